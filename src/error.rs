//! Error types for cloudinv.
//!
//! The taxonomy mirrors the run's control flow: credential and client
//! configuration failures are fatal, per-family query failures are
//! recoverable and confined to their family.

use crate::family::ResourceFamily;
use thiserror::Error;

/// Result type alias for cloudinv operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for cloudinv.
#[derive(Error, Debug)]
pub enum Error {
    /// No credential source could be found at all.
    #[error("No AWS credentials found. Please provide valid AWS credentials.")]
    NoCredentials,

    /// A credential source exists but could not produce usable credentials.
    #[error("AWS error: {0}")]
    CredentialsRejected(String),

    /// Client construction failed before any query was issued.
    #[error("Failed to configure {family} client: {message}")]
    ClientConfig {
        /// Family whose client could not be bound
        family: ResourceFamily,
        /// Error message
        message: String,
    },

    /// The provider rejected or failed one family's describe query.
    #[error("Error listing {family} instances: {message}")]
    Query {
        /// Family whose query failed
        family: ResourceFamily,
        /// Error message
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Anything not classified above.
    #[error("An error occurred: {0}")]
    Unexpected(String),
}

impl Error {
    /// Creates a new per-family query error.
    pub fn query(family: ResourceFamily, message: impl Into<String>) -> Self {
        Self::Query {
            family,
            message: message.into(),
        }
    }

    /// Creates a new client configuration error.
    pub fn client_config(family: ResourceFamily, message: impl Into<String>) -> Self {
        Self::ClientConfig {
            family,
            message: message.into(),
        }
    }

    /// Returns true if this error is recoverable.
    ///
    /// Recoverable errors are reported on the error channel and the run
    /// advances to the next family; everything else aborts the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Query { .. })
    }

    /// Returns the error code for CLI exit status.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::NoCredentials | Error::CredentialsRejected(_) => 3,
            Error::ClientConfig { .. } => 4,
            Error::Query { .. } => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn query_errors_are_recoverable() {
        let err = Error::query(ResourceFamily::Compute, "throttled");
        assert!(err.is_recoverable());
        assert!(!Error::NoCredentials.is_recoverable());
        assert!(!Error::client_config(ResourceFamily::Database, "no region").is_recoverable());
    }

    #[test]
    fn exit_codes_classify_by_error_kind() {
        assert_eq!(Error::NoCredentials.exit_code(), 3);
        assert_eq!(Error::CredentialsRejected("expired".into()).exit_code(), 3);
        assert_eq!(
            Error::client_config(ResourceFamily::Compute, "no region").exit_code(),
            4
        );
        assert_eq!(
            Error::query(ResourceFamily::Database, "denied").exit_code(),
            2
        );
        assert_eq!(Error::Unexpected("boom".into()).exit_code(), 1);
    }

    #[test]
    fn display_identifies_the_failing_family() {
        let err = Error::query(ResourceFamily::Compute, "access denied");
        assert_eq!(err.to_string(), "Error listing EC2 instances: access denied");
    }
}
