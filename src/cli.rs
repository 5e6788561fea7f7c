//! Command line arguments.

use clap::Parser;

/// Expand an IPv4 CIDR block to the list of addresses it contains, one per line.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Example: cidr2ips --cidr 172.17.24.0/24 --randomize")]
pub struct Cli {
    /// Required: CIDR block (ex: 192.168.0.0/16) to expand to a list of IP addresses
    #[arg(short, long, env = "CIDR2IPS_CIDR")]
    pub cidr: Option<String>,
    /// Randomize the order of the IP addresses provided as output
    #[arg(short, long, default_value_t = false)]
    pub randomize: bool,
    /// Include the network and broadcast addresses; by default only usable addresses are printed
    #[arg(short, long, default_value_t = false)]
    pub full: bool,
    /// Seed for --randomize, to repeat an earlier order
    #[arg(short, long, env = "CIDR2IPS_SEED")]
    pub seed: Option<u64>,
}

/// Full help text, printed after command line errors.
pub fn usage() -> String {
    use clap::CommandFactory;
    Cli::command().render_help().to_string()
}
