//! Table formatting utilities using comfy-table.

use comfy_table::{Cell, Color, Table};
use langtool_core::{LocaleReport, SyncReport};

fn status_cell(locale: &LocaleReport, dry_run: bool) -> Cell {
    match (locale.changed, dry_run) {
        (false, _) => Cell::new("unchanged").fg(Color::DarkGrey),
        (true, true) => Cell::new("would update").fg(Color::Yellow),
        (true, false) => Cell::new("updated").fg(Color::Green),
    }
}

/// Prints one row per language file with its edit, deletion and fill counts.
pub fn print_locale_table(report: &SyncReport) {
    let mut table = Table::new();
    table
        .set_header(vec![
            Cell::new("Locale").add_attribute(comfy_table::Attribute::Bold),
            Cell::new("Edited").add_attribute(comfy_table::Attribute::Bold),
            Cell::new("Deleted").add_attribute(comfy_table::Attribute::Bold),
            Cell::new("Filled").add_attribute(comfy_table::Attribute::Bold),
            Cell::new("Status").add_attribute(comfy_table::Attribute::Bold),
        ])
        .load_preset(comfy_table::presets::UTF8_FULL)
        .apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS)
        .set_content_arrangement(comfy_table::ContentArrangement::Dynamic);

    let base_label = format!("{} (base)", report.base.locale);
    table.add_row(vec![
        Cell::new(base_label).fg(Color::Cyan),
        Cell::new("-").fg(Color::DarkGrey),
        Cell::new("-").fg(Color::DarkGrey),
        Cell::new("-").fg(Color::DarkGrey),
        status_cell(&report.base, report.dry_run),
    ]);

    for locale in &report.locales {
        table.add_row(vec![
            Cell::new(&locale.locale).fg(Color::White),
            Cell::new(locale.applied_edits.len()),
            Cell::new(locale.deleted_keys.len()),
            Cell::new(locale.filled_keys.len()),
            status_cell(locale, report.dry_run),
        ]);
    }

    println!("{}", table);
}
