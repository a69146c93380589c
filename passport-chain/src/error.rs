//! Wallet/chain error type.

use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by wallet and chain operations.
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum ChainError {
    /// No wallet account is available on the bridge.
    #[error("No wallet connected")]
    WalletUnavailable,

    /// The bridge could not switch to the requested chain.
    #[error("Chain switch failed: {0}")]
    SwitchFailed(String),

    /// The RPC endpoint returned an error object.
    #[error("RPC error: {0}")]
    RpcError(String),

    /// The wallet or chain rejected the transaction.
    #[error("Transaction rejected: {0}")]
    Rejected(String),

    /// The transaction was not confirmed within the polling budget.
    #[error("Transaction {0} not confirmed in time")]
    ConfirmationTimeout(String),

    /// Failed to parse an RPC response.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Network-level failure reaching the RPC endpoint.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The RPC request timed out.
    #[error("Request timeout: {0}")]
    Timeout(String),
}

impl ChainError {
    /// Whether the error is user-correctable (wallet state, chain choice)
    /// rather than an infrastructure fault; used for log-level selection.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::WalletUnavailable | Self::SwitchFailed(_) | Self::Rejected(_)
        )
    }
}

/// Convenience type alias for `Result<T, ChainError>`.
pub type ChainResult<T> = std::result::Result<T, ChainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_wallet_unavailable() {
        assert_eq!(ChainError::WalletUnavailable.to_string(), "No wallet connected");
    }

    #[test]
    fn display_confirmation_timeout() {
        let e = ChainError::ConfirmationTimeout("0xabc".to_string());
        assert_eq!(e.to_string(), "Transaction 0xabc not confirmed in time");
    }

    #[test]
    fn expected_variants() {
        assert!(ChainError::WalletUnavailable.is_expected());
        assert!(ChainError::Rejected("user denied".into()).is_expected());
        assert!(!ChainError::RpcError("boom".into()).is_expected());
        assert!(!ChainError::NetworkError("down".into()).is_expected());
    }

    #[test]
    fn serialize_tagged() {
        let json = serde_json::to_string(&ChainError::SwitchFailed("nope".into())).unwrap();
        assert!(json.contains("\"code\":\"SwitchFailed\""));
    }
}
