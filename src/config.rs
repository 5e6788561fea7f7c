//! Run configuration resolved from the command line and environment.

use crate::cli::Cli;
use crate::error::Cidr2IpsError;

/// Everything one run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub cidr: String,
    pub randomize: bool,
    pub full: bool,
    pub seed: Option<u64>,
}

impl Config {
    pub fn new(cidr: &str) -> Config {
        Config {
            cidr: cidr.to_string(),
            randomize: false,
            full: false,
            seed: None,
        }
    }

    /// Resolve parsed arguments. An absent or empty `--cidr` is an error.
    pub fn from_cli(cli: Cli) -> Result<Config, Cidr2IpsError> {
        let cidr = cli
            .cidr
            .filter(|c| !c.is_empty())
            .ok_or(Cidr2IpsError::MissingCidr)?;
        if cli.seed.is_some() && !cli.randomize {
            log::warn!("--seed has no effect without --randomize");
        }
        Ok(Config {
            cidr,
            randomize: cli.randomize,
            full: cli.full,
            seed: cli.seed,
        })
    }
}
