//! Domain models for CIDR expansion.
//!
//! - [`Ipv4Cidr`] - IPv4 block with CIDR notation support
//! - [`AddressRange`] - lazy ascending run of addresses

mod ipv4;
mod range;

// Re-export public types
pub use ipv4::{broadcast_addr, get_cidr_mask, network_addr, num_addresses, Ipv4Cidr, MAX_LENGTH};
pub use range::AddressRange;
