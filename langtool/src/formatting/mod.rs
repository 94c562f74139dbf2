//! CLI formatting utilities.

mod headers;
mod status;
mod tables;

pub use headers::{print_section_header, SectionStyle};
pub use status::{print_change_log, print_error, print_success};
pub use tables::print_locale_table;
