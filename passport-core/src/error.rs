//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error types
pub use passport_chain::ChainError;
pub use passport_riot::RiotError;

/// Core layer error type.
///
/// One variant per failure class; the serving layer maps these onto HTTP
/// statuses and a uniform `{ "error": message }` body. Verification
/// mismatch is deliberately NOT an error — see
/// [`VerifyOutcome`](crate::types::VerifyOutcome).
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Missing or malformed input; local, never retried.
    #[error("Validation error: {0}")]
    Validation(String),

    /// No matching identity or store row.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Provider failure, surfaced verbatim to the caller.
    #[error("{0}")]
    Upstream(#[from] RiotError),

    /// Missing credentials or broken wiring; fatal at startup.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Store read/write failure.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A required prior step has not been completed (wallet missing,
    /// no verified accounts); user-actionable.
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// Wallet is on the wrong chain and could not be switched.
    #[error("Wrong network: connected to chain {actual}, expected {expected}. {remediation}")]
    NetworkMismatch {
        expected: u64,
        actual: u64,
        remediation: String,
    },

    /// Wallet or chain rejected/failed the transaction.
    #[error("Transaction error: {0}")]
    Transaction(#[from] ChainError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not
    /// exist, etc.), used for log-level selection: `warn` when `true`,
    /// `error` otherwise.
    ///
    /// Update this method when adding variants.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_)
            | Self::NotFound(_)
            | Self::Precondition(_)
            | Self::NetworkMismatch { .. } => true,
            Self::Upstream(e) => e.is_expected(),
            Self::Transaction(e) => e.is_expected(),
            Self::Configuration(_) | Self::Storage(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_validation() {
        let e = CoreError::Validation("userId is required".to_string());
        assert_eq!(e.to_string(), "Validation error: userId is required");
    }

    #[test]
    fn display_network_mismatch() {
        let e = CoreError::NetworkMismatch {
            expected: 10143,
            actual: 1,
            remediation: "Switch your wallet to Monad Testnet and retry.".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Wrong network: connected to chain 1, expected 10143. \
             Switch your wallet to Monad Testnet and retry."
        );
    }

    #[test]
    fn upstream_inherits_expectedness() {
        let not_found: CoreError = RiotError::NotFound {
            resource: "Riot ID".to_string(),
        }
        .into();
        assert!(not_found.is_expected());

        let network: CoreError = RiotError::NetworkError {
            detail: "refused".to_string(),
        }
        .into();
        assert!(!network.is_expected());
    }

    #[test]
    fn transaction_inherits_expectedness() {
        let rejected: CoreError = ChainError::Rejected("user denied".to_string()).into();
        assert!(rejected.is_expected());

        let rpc: CoreError = ChainError::RpcError("boom".to_string()).into();
        assert!(!rpc.is_expected());
    }

    #[test]
    fn serialize_tagged() {
        let json = serde_json::to_string(&CoreError::Storage("disk full".to_string())).unwrap();
        assert!(json.contains("\"code\":\"Storage\""));
        assert!(json.contains("disk full"));
    }
}
