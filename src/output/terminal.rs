//! Error reporting on the terminal.

use crate::error::Cidr2IpsError;
use colored::Colorize;

/// Format an error as a single line with an `error:` prefix.
pub fn format_error(err: &Cidr2IpsError) -> String {
    format!("{} {err}", "error:".red().bold())
}

/// Print an error to stderr, followed by `usage` when the command line was at fault.
pub fn print_error(err: &Cidr2IpsError, usage: &str) {
    log::debug!("reporting {err:?}");
    eprintln!("\n{}\n", format_error(err));
    if err.is_usage() {
        eprintln!("{usage}");
    }
}
