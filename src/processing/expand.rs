//! Expansion of a CIDR block into its addresses.

use crate::error::Cidr2IpsError;
use crate::models::{AddressRange, Ipv4Cidr};
use std::net::Ipv4Addr;

/// Which addresses of the block are handed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hosts {
    /// Every address, network and broadcast included.
    Full(AddressRange),
    /// Network and broadcast removed. Empty for a /31.
    Trimmed(AddressRange),
    /// Trimming was asked for on a block of a single address.
    Rejected,
}

/// Result of expanding one CIDR block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    pub cidr: Ipv4Cidr,
    pub network: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    pub hosts: Hosts,
}

impl Expansion {
    /// The selected addresses, or an error when none can be selected.
    pub fn into_range(self) -> Result<AddressRange, Cidr2IpsError> {
        match self.hosts {
            Hosts::Full(range) | Hosts::Trimmed(range) => Ok(range),
            Hosts::Rejected => Err(Cidr2IpsError::NoUsableAddresses(self.cidr)),
        }
    }
}

/// Expand `cidr` into its addresses in ascending order.
///
/// With `full` unset the network and broadcast addresses are left out. The
/// string is expected to have passed [`super::is_valid_cidr`] already.
pub fn expand(cidr: &str, full: bool) -> Result<Expansion, Cidr2IpsError> {
    let cidr = Ipv4Cidr::new(cidr)?;
    Ok(expand_cidr(cidr, full))
}

/// Same as [`expand`] for an already parsed block.
pub fn expand_cidr(cidr: Ipv4Cidr, full: bool) -> Expansion {
    let network = cidr.lo();
    let broadcast = cidr.hi();
    let all = AddressRange::new(network, broadcast);
    log::debug!(
        "expand {cidr}: network={network} broadcast={broadcast} size={}",
        all.len_u64()
    );

    let hosts = if full {
        Hosts::Full(all)
    } else if all.len_u64() < 2 {
        log::warn!("{cidr} has no network/broadcast pair to remove");
        Hosts::Rejected
    } else {
        Hosts::Trimmed(all.trimmed())
    };

    Expansion {
        cidr,
        network,
        broadcast,
        hosts,
    }
}
