//! Output of expanded addresses.
//!
//! - [`lines`] - one address per line to any writer
//! - [`terminal`] - error reporting on stderr

mod lines;
mod terminal;

pub use lines::write_addresses;
pub use terminal::{format_error, print_error};
