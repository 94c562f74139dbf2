//! Terminal implementation of the confirmation prompt.

use std::io::{self, BufRead, Write};

use langtool_core::resolver::INVALID_INPUT;
use langtool_core::{Prompt, Result};
use owo_colors::OwoColorize;

/// Prompts on stdout and reads answers from stdin.
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn show(&mut self, lines: &[String]) {
        for line in lines {
            if line == INVALID_INPUT {
                println!("{}", line.red());
            } else if line.starts_with("- ") {
                println!("  {}", line.bright_black());
            } else {
                println!("{}", line.yellow().bold());
            }
        }
    }

    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", question.bold())?;
        stdout.flush()?;

        let mut answer = String::new();
        let read = io::stdin().lock().read_line(&mut answer)?;
        if read == 0 {
            println!();
            return Ok(None);
        }
        Ok(Some(answer))
    }
}
