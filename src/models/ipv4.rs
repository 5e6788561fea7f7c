//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4Cidr`] for representing an IPv4 block, along with the mask
//! arithmetic used to find its network and broadcast addresses.

use crate::error::Cidr2IpsError;
use crate::models::AddressRange;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// Lengths above [`MAX_LENGTH`] are clamped to a full mask.
///
/// # Examples
/// ```
/// use cidr2ips::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len.min(MAX_LENGTH);
    let all_bits = u32::MAX as u64;

    let mask = (all_bits >> right_len) << right_len;

    mask as u32
}

/// Get the network (lowest) address for a given IP and prefix length.
pub fn network_addr(addr: Ipv4Addr, len: u8) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) & get_cidr_mask(len))
}

/// Calculate the broadcast (highest) address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Ipv4Addr {
    let mask = get_cidr_mask(len);
    let network_bits = u32::from(addr) & mask;
    Ipv4Addr::from(network_bits | !mask)
}

/// Number of addresses in a block with the given prefix length.
///
/// A `u64` because a /0 holds 2^32 addresses.
pub fn num_addresses(len: u8) -> u64 {
    1u64 << (MAX_LENGTH - len.min(MAX_LENGTH))
}

/// IPv4 block in CIDR notation.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4Cidr {
    /// The base address as written; host bits may be set.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub mask: u8,
}

impl Ipv4Cidr {
    /// Create a new [`Ipv4Cidr`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4Cidr, Cidr2IpsError> {
        let parse_err = |reason: String| Cidr2IpsError::Parse {
            cidr: addr_cidr.to_string(),
            reason,
        };

        let (addr, mask) = addr_cidr
            .split_once('/')
            .ok_or_else(|| parse_err("missing '/' separator".to_string()))?;
        let addr: Ipv4Addr = addr
            .parse()
            .map_err(|_| parse_err(format!("invalid address {addr}")))?;
        let mask: u8 = mask
            .parse()
            .map_err(|_| parse_err(format!("invalid prefix length {mask}")))?;
        if mask > MAX_LENGTH {
            return Err(parse_err(format!("prefix length {mask} is too long")));
        }
        Ok(Ipv4Cidr { addr, mask })
    }

    /// The subnet mask as a u32.
    pub fn netmask(&self) -> u32 {
        get_cidr_mask(self.mask)
    }

    /// Get the lowest (network) address in the block.
    pub fn lo(&self) -> Ipv4Addr {
        network_addr(self.addr, self.mask)
    }

    /// Get the highest (broadcast) address in the block.
    pub fn hi(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.mask)
    }

    /// Number of addresses in the block, network and broadcast included.
    pub fn size(&self) -> u64 {
        num_addresses(self.mask)
    }

    /// True if `ip` falls inside the block.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        let mask = self.netmask();
        u32::from(ip) & mask == u32::from(self.addr) & mask
    }

    /// Every address in the block, ascending.
    pub fn addresses(&self) -> AddressRange {
        AddressRange::new(self.lo(), self.hi())
    }
}

impl FromStr for Ipv4Cidr {
    type Err = Cidr2IpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4Cidr::new(s)
    }
}

impl std::fmt::Display for Ipv4Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0), 0x00000000);
        assert_eq!(get_cidr_mask(1), 0x80000000);
        assert_eq!(get_cidr_mask(8), 0xFF000000);
        assert_eq!(get_cidr_mask(16), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(31), 0xFFFFFFFE);
        assert_eq!(get_cidr_mask(32), 0xFFFFFFFF);
    }

    #[test]
    fn test_network_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(network_addr(ip, 24), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(network_addr(ip, 16), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(network_addr(ip, 8), Ipv4Addr::new(192, 0, 0, 0));
        assert_eq!(network_addr(ip, 0), Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(network_addr(ip, 32), Ipv4Addr::new(192, 168, 1, 42));
    }

    #[test]
    fn test_broadcast_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 0);
        assert_eq!(broadcast_addr(ip, 24), Ipv4Addr::new(192, 168, 1, 255));
        assert_eq!(broadcast_addr(ip, 16), Ipv4Addr::new(192, 168, 255, 255));
        assert_eq!(broadcast_addr(ip, 8), Ipv4Addr::new(192, 255, 255, 255));
        assert_eq!(broadcast_addr(ip, 32), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(broadcast_addr(ip, 0), Ipv4Addr::new(255, 255, 255, 255));
    }

    #[test]
    fn test_num_addresses() {
        assert_eq!(num_addresses(0), 4294967296);
        assert_eq!(num_addresses(8), 16777216);
        assert_eq!(num_addresses(24), 256);
        assert_eq!(num_addresses(30), 4);
        assert_eq!(num_addresses(31), 2);
        assert_eq!(num_addresses(32), 1);
    }

    #[test]
    fn test_ipv4_cidr_new() {
        let cidr = Ipv4Cidr::new("10.2.3.4/16").unwrap();
        assert_eq!(cidr.addr, Ipv4Addr::new(10, 2, 3, 4));
        assert_eq!(cidr.mask, 16);
        assert_eq!(cidr.lo(), Ipv4Addr::new(10, 2, 0, 0));
        assert_eq!(cidr.hi(), Ipv4Addr::new(10, 2, 255, 255));
        assert_eq!(cidr.to_string(), "10.2.3.4/16");
        assert_eq!("10.2.3.4/16".parse::<Ipv4Cidr>().unwrap(), cidr);
    }

    #[test]
    fn test_ipv4_cidr_new_errors() {
        assert!(Ipv4Cidr::new("10.0.0.0").is_err());
        assert!(Ipv4Cidr::new("10.0.0/8").is_err());
        assert!(Ipv4Cidr::new("10.0.0.0/33").is_err());
        assert!(Ipv4Cidr::new("10.0.0.0/x").is_err());
        let err = Ipv4Cidr::new("abc/24").unwrap_err();
        assert!(matches!(err, Cidr2IpsError::Parse { .. }));
        assert!(err.to_string().contains("abc/24"));
    }

    #[test]
    fn test_contains() {
        let cidr = Ipv4Cidr::new("10.0.10.64/26").unwrap();
        assert!(cidr.contains(Ipv4Addr::new(10, 0, 10, 64)));
        assert!(cidr.contains(Ipv4Addr::new(10, 0, 10, 127)));
        assert!(!cidr.contains(Ipv4Addr::new(10, 0, 10, 63)));
        assert!(!cidr.contains(Ipv4Addr::new(10, 0, 10, 128)));
    }

    #[test]
    fn test_host_bits_set() {
        let cidr = Ipv4Cidr::new("192.168.1.77/30").unwrap();
        assert_eq!(cidr.lo(), Ipv4Addr::new(192, 168, 1, 76));
        assert_eq!(cidr.hi(), Ipv4Addr::new(192, 168, 1, 79));
        assert_eq!(cidr.size(), 4);
    }
}
