#![allow(dead_code)]

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use langtool_core::{Prompt, Result};

/// Answers confirmations from a fixed script and records what was shown.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    pub shown: Vec<String>,
    pub asked: usize,
}

impl ScriptedPrompt {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn show(&mut self, lines: &[String]) {
        self.shown.extend(lines.iter().cloned());
    }

    fn ask(&mut self, _question: &str) -> Result<Option<String>> {
        self.asked += 1;
        Ok(self.answers.pop_front())
    }
}

pub fn write_lang_files(dir: &Path, files: &[(&str, &str)]) {
    for (locale, content) in files {
        fs::write(dir.join(format!("{}.yaml", locale)), content).unwrap();
    }
}

pub fn read_lang_file(dir: &Path, locale: &str) -> String {
    fs::read_to_string(lang_path(dir, locale)).unwrap()
}

pub fn lang_path(dir: &Path, locale: &str) -> PathBuf {
    dir.join(format!("{}.yaml", locale))
}
