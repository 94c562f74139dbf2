//! Status indicators and message formatting.

use langtool_core::SyncReport;
use owo_colors::OwoColorize;

use super::headers::{print_section_header, SectionStyle};

/// Status types for consistent formatting.
#[derive(Debug, Clone, Copy)]
pub enum Status {
    Success,
    Error,
    Added,
    Deleted,
}

impl Status {
    pub fn symbol(&self) -> &'static str {
        match self {
            Status::Success => "✓",
            Status::Error => "✗",
            Status::Added => "+",
            Status::Deleted => "-",
        }
    }

    pub fn colored_symbol(&self) -> String {
        match self {
            Status::Success | Status::Added => self.symbol().green().to_string(),
            Status::Error | Status::Deleted => self.symbol().red().to_string(),
        }
    }

    /// Formats a status message with symbol and color.
    pub fn format(&self, message: &str) -> String {
        match self {
            Status::Success => format!("{} {}", self.colored_symbol(), message.green().bold()),
            Status::Error => format!("{} {}", self.colored_symbol(), message.red().bold()),
            Status::Added | Status::Deleted => format!("{} {}", self.colored_symbol(), message),
        }
    }
}

pub fn print_success(message: &str) {
    println!("  {}", Status::Success.format(message));
}

/// Prints an error message to stderr.
pub fn print_error(message: &str) {
    eprintln!("  {}", Status::Error.format(message));
}

/// Prints every applied edit and deleted key, grouped by locale.
pub fn print_change_log(report: &SyncReport) {
    let has_changes = report
        .locales
        .iter()
        .any(|r| !r.applied_edits.is_empty() || !r.deleted_keys.is_empty());
    if !has_changes {
        return;
    }

    print_section_header("Changes", SectionStyle::Warning);
    for locale in &report.locales {
        for key in &locale.applied_edits {
            let message = format!("Added key: \"{}\" in \"{}\"", key, locale.locale);
            println!("  {}", Status::Added.format(&message));
        }
        for key in &locale.deleted_keys {
            let message = format!("Deleted key: \"{}\" in \"{}\"", key, locale.locale);
            println!("  {}", Status::Deleted.format(&message));
        }
    }
}
