//! Command implementations for the CLI.

use std::path::PathBuf;

use anyhow::{Context, Result};
use langtool_core::{EditSource, SyncConfig, SyncReport, Synchronizer};
use tracing::debug;

use crate::formatting::{
    print_change_log, print_locale_table, print_section_header, print_success, SectionStyle,
};
use crate::prompt::TerminalPrompt;
use crate::Cli;

pub fn cmd_sync(directory: PathBuf, cli: &Cli) -> Result<()> {
    let mut config = SyncConfig::from_directory(&directory)
        .with_context(|| format!("Failed to load configuration for {}", directory.display()))?
        .with_input(cli.input.as_deref().map(EditSource::from_arg))
        .with_no_confirm(cli.no_confirm)
        .with_dry_run(cli.dry_run);
    if let Some(ref base_locale) = cli.base_locale {
        config = config.with_base_locale(base_locale);
    }
    if let Some(ref extension) = cli.extension {
        config = config.with_extension(extension);
    }
    debug!(?config, "resolved configuration");

    let report = Synchronizer::new(config).run(TerminalPrompt)?;
    if !cli.quiet {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &SyncReport) {
    print_change_log(report);

    let title = if report.dry_run {
        "Language Files (Dry Run)"
    } else {
        "Saving changes..."
    };
    println!();
    print_section_header(title, SectionStyle::Primary);
    print_locale_table(report);
    println!();

    let changed = report.changed_files().len();
    let message = match (changed, report.dry_run) {
        (0, _) => "All language files are up to date".to_string(),
        (n, true) => format!("{} file(s) would be updated", n),
        (n, false) => format!("Updated {} file(s)", n),
    };
    print_success(&message);
}
