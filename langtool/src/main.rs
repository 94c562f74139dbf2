mod commands;
mod formatting;
mod prompt;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;

use crate::formatting::print_error;

#[derive(Parser)]
#[command(name = "langtool")]
#[command(version)]
#[command(about = "Keeps YAML language files in sync with a base locale")]
struct Cli {
    /// Directory containing one `<locale>.yaml` file per locale
    directory: Option<PathBuf>,

    /// YAML file of edits shaped `{locale: {key: value}}`, or `-` for stdin
    input: Option<String>,

    /// Approve every confirmation without prompting
    #[arg(long, action)]
    no_confirm: bool,

    /// Locale whose file defines keys, sections and fallback values
    #[arg(long)]
    base_locale: Option<String>,

    /// Language file extension
    #[arg(long)]
    extension: Option<String>,

    /// Report what would change without writing any file
    #[arg(long, action)]
    dry_run: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(short, long, action)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.quiet {
        Level::ERROR
    } else {
        match cli.verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let Some(directory) = cli.directory.clone() else {
        eprintln!("Error: No input directory provided.");
        return ExitCode::from(1);
    };

    match commands::cmd_sync(directory, &cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<langtool_core::Error>() {
            Some(core_err) if core_err.is_cancelled() => {
                print_error(&core_err.to_string());
                ExitCode::from(core_err.exit_code())
            }
            _ => {
                eprintln!("Error: {:#}", err);
                ExitCode::FAILURE
            }
        },
    }
}
