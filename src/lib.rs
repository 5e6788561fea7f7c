//! Expand an IPv4 CIDR block into the addresses it contains.
//!
//! The pipeline is [`processing::is_valid_cidr`] → [`processing::expand`] →
//! optional [`processing::shuffle`] → [`output::write_addresses`], driven by [`run`].

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::Cidr2IpsError;

use processing::{expand, is_valid_cidr, seeded_rng, shuffle};
use std::io::Write;
use std::net::Ipv4Addr;

/// Prefixes shorter than this are large enough to warn about before shuffling.
const SHUFFLE_WARN_BELOW: u8 = 8;

/// Validate, expand and write the addresses for `config` to `out`.
///
/// Returns the number of addresses written. Nothing is written when the CIDR
/// is invalid or has no addresses to give.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<u64, Cidr2IpsError> {
    log::info!(
        "#Start run() cidr={} randomize={} full={}",
        config.cidr,
        config.randomize,
        config.full
    );

    if !is_valid_cidr(&config.cidr) {
        return Err(Cidr2IpsError::InvalidCidr(config.cidr.clone()));
    }

    let expansion = expand(&config.cidr, config.full)?;
    let cidr = expansion.cidr;
    let range = expansion.into_range()?;

    let written = if config.randomize {
        if cidr.mask < SHUFFLE_WARN_BELOW {
            log::warn!(
                "randomizing {cidr} holds {} addresses in memory",
                range.len_u64()
            );
        }
        let mut addrs: Vec<Ipv4Addr> = range.collect();
        shuffle(&mut addrs, &mut seeded_rng(config.seed));
        output::write_addresses(out, addrs)?
    } else {
        output::write_addresses(out, range)?
    };

    log::info!("#End run() wrote {written} addresses for {cidr}");
    Ok(written)
}
