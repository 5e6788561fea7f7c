//! CIDR processing pipeline.
//!
//! - [`validate`] - syntax check of the input string
//! - [`expand`] - block to address range, with optional trimming
//! - [`shuffle`] - random ordering with an injected rng

mod expand;
mod shuffle;
mod validate;

// Re-export public functions
pub use expand::{expand, expand_cidr, Expansion, Hosts};
pub use shuffle::{seeded_rng, shuffle};
pub use validate::is_valid_cidr;
