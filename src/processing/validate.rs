//! Syntax check for IPv4 CIDR strings.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Plain decimal octets 0-255 without leading zeros, prefix 0-32.
    static ref CIDR_RE: Regex = Regex::new(concat!(
        r"^(([0-9]|[1-9][0-9]|1[0-9]{2}|2[0-4][0-9]|25[0-5])\.){3}",
        r"([0-9]|[1-9][0-9]|1[0-9]{2}|2[0-4][0-9]|25[0-5])",
        r"/([0-9]|[1-2][0-9]|3[0-2])$"
    ))
    .expect("Invalid Regex?");
}

/// True if `input` is a dotted-quad IPv4 block with a prefix length, e.g. `10.0.0.0/24`.
///
/// Only the syntax is checked; host bits in the address may be set.
pub fn is_valid_cidr(input: &str) -> bool {
    let valid = CIDR_RE.is_match(input);
    log::trace!("is_valid_cidr({input:?}) = {valid}");
    valid
}
