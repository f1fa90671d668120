use std::{io, sync::Arc};
use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum NetError {
    // Resolution Errors
    #[error("Name not resolved")]
    NameNotResolved,
    #[error("Name not resolved: {domain}")]
    NameNotResolvedFor {
        domain: String,
        #[source]
        source: Arc<io::Error>,
    },
    #[error("Address invalid")]
    AddressInvalid,
    #[error("Name resolution failed")]
    NameResolutionFailed,

    // Query Errors (custom codes, outside Chromium's range)
    #[error("Service not resolved: {service}")]
    ServiceNotResolved { service: String },
    #[error("Unrecognized resolver flags: {bits:#x}")]
    BadResolverFlags { bits: i32 },

    #[error("Unknown error: {0}")]
    Unknown(i32),
}

impl NetError {
    /// Wrap a failed lookup for `domain`.
    pub fn dns_failed(domain: &str, source: io::Error) -> Self {
        NetError::NameNotResolvedFor {
            domain: domain.to_string(),
            source: Arc::new(source),
        }
    }

    /// A lookup for `domain` that succeeded but produced nothing usable.
    pub fn no_addresses(domain: &str) -> Self {
        Self::dns_failed(
            domain,
            io::Error::new(io::ErrorKind::NotFound, "No addresses returned"),
        )
    }

    pub fn as_i32(&self) -> i32 {
        match self {
            NetError::NameNotResolved => -105,
            NetError::NameNotResolvedFor { .. } => -105,
            NetError::AddressInvalid => -108,
            NetError::NameResolutionFailed => -137,

            // Edge case errors (custom codes starting at -10100)
            NetError::ServiceNotResolved { .. } => -10100,
            NetError::BadResolverFlags { .. } => -10101,

            NetError::Unknown(code) => *code,
        }
    }

    /// Whether this error came from the name lookup rather than the query.
    pub fn is_resolution_failure(&self) -> bool {
        matches!(
            self,
            NetError::NameNotResolved
                | NetError::NameNotResolvedFor { .. }
                | NetError::NameResolutionFailed
        )
    }
}

impl From<i32> for NetError {
    fn from(code: i32) -> Self {
        match code {
            -105 => NetError::NameNotResolved,
            -108 => NetError::AddressInvalid,
            -137 => NetError::NameResolutionFailed,
            _ => NetError::Unknown(code),
        }
    }
}
