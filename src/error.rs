//! Error type shared by the library and the binary.

use crate::models::Ipv4Cidr;

#[derive(Debug, thiserror::Error)]
pub enum Cidr2IpsError {
    #[error("Missing required --cidr argument")]
    MissingCidr,

    #[error("invalid network CIDR: {0}")]
    InvalidCidr(String),

    #[error("failed to parse CIDR {cidr}: {reason}")]
    Parse { cidr: String, reason: String },

    #[error("{0} holds a single address, so there is nothing left once network and broadcast are removed (use --full)")]
    NoUsableAddresses(Ipv4Cidr),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("logging setup failed: {0}")]
    Logging(String),
}

impl Cidr2IpsError {
    /// Errors caused by the command line rather than by the run itself.
    ///
    /// The binary prints usage after these.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Cidr2IpsError::MissingCidr | Cidr2IpsError::InvalidCidr(_)
        )
    }
}
