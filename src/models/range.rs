//! Lazy iteration over a contiguous block of IPv4 addresses.

use std::iter::FusedIterator;
use std::net::Ipv4Addr;

/// Ascending run of IPv4 addresses.
///
/// Counts with a `u64` cursor so a range ending at `255.255.255.255`, or a
/// whole /0, terminates without wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRange {
    next: u64,
    end: u64,
}

impl AddressRange {
    /// Range from `first` through `last`, both included.
    ///
    /// Empty when `last < first`.
    pub fn new(first: Ipv4Addr, last: Ipv4Addr) -> AddressRange {
        let next = u32::from(first) as u64;
        let end = (u32::from(last) as u64 + 1).max(next);
        AddressRange { next, end }
    }

    /// A range holding no addresses.
    pub fn empty() -> AddressRange {
        AddressRange { next: 0, end: 0 }
    }

    /// Drop the first and last address.
    ///
    /// A range of two becomes empty; callers decide what a range of one means.
    pub fn trimmed(&self) -> AddressRange {
        if self.len_u64() < 2 {
            return AddressRange::empty();
        }
        AddressRange {
            next: self.next + 1,
            end: self.end - 1,
        }
    }

    /// Remaining addresses, as a `u64` since a /0 does not fit `usize` everywhere.
    pub fn len_u64(&self) -> u64 {
        self.end - self.next
    }

    pub fn is_empty(&self) -> bool {
        self.next >= self.end
    }
}

impl Iterator for AddressRange {
    type Item = Ipv4Addr;

    fn next(&mut self) -> Option<Ipv4Addr> {
        if self.is_empty() {
            return None;
        }
        let ip = Ipv4Addr::from(self.next as u32);
        self.next += 1;
        Some(ip)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.len_u64()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }

    fn nth(&mut self, n: usize) -> Option<Ipv4Addr> {
        self.next = self.next.saturating_add(n as u64).min(self.end);
        self.next()
    }
}

impl DoubleEndedIterator for AddressRange {
    fn next_back(&mut self) -> Option<Ipv4Addr> {
        if self.is_empty() {
            return None;
        }
        self.end -= 1;
        Some(Ipv4Addr::from(self.end as u32))
    }
}

impl FusedIterator for AddressRange {}
