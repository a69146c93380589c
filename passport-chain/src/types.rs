//! Chain profiles and transaction types.

use serde::{Deserialize, Serialize};

/// A supported network: chain ID plus display/explorer metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainProfile {
    pub chain_id: u64,
    pub name: &'static str,
    pub explorer_base: &'static str,
}

/// The network credentials are anchored on.
pub const MONAD_TESTNET: ChainProfile = ChainProfile {
    chain_id: 10143,
    name: "Monad Testnet",
    explorer_base: "https://testnet.monadexplorer.com",
};

impl ChainProfile {
    /// Block-explorer link for a transaction.
    #[must_use]
    pub fn explorer_tx_url(&self, tx_hash: &TxHash) -> String {
        format!("{}/tx/{}", self.explorer_base, tx_hash.0)
    }
}

/// A 0x-prefixed transaction hash.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TxHash(pub String);

impl std::fmt::Display for TxHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An outbound transaction: recipient, value in wei, opaque calldata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRequest {
    pub from: String,
    pub to: String,
    pub value: u128,
    pub data: Vec<u8>,
}

impl TransactionRequest {
    /// A zero-value transaction from an address to itself, carrying `data`.
    /// This is the anchoring shape: no transfer, payload only.
    #[must_use]
    pub fn self_transfer(address: impl Into<String>, data: Vec<u8>) -> Self {
        let address = address.into();
        Self {
            from: address.clone(),
            to: address,
            value: 0,
            data,
        }
    }
}

/// A mined transaction receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxReceipt {
    pub tx_hash: TxHash,
    pub block_number: u64,
    /// Execution status: `true` for success (`0x1`), `false` for revert.
    pub success: bool,
}

/// Lifecycle of a watched transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum TxStatus {
    /// Accepted by the wallet, no receipt yet.
    Submitted,
    /// Still no receipt after at least one poll.
    Confirming,
    /// Mined successfully.
    Confirmed(TxReceipt),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monad_testnet_profile() {
        assert_eq!(MONAD_TESTNET.chain_id, 10143);
        assert_eq!(MONAD_TESTNET.name, "Monad Testnet");
    }

    #[test]
    fn explorer_tx_url() {
        let hash = TxHash("0xdeadbeef".to_string());
        assert_eq!(
            MONAD_TESTNET.explorer_tx_url(&hash),
            "https://testnet.monadexplorer.com/tx/0xdeadbeef"
        );
    }

    #[test]
    fn self_transfer_shape() {
        let req = TransactionRequest::self_transfer("0xabc", vec![1, 2, 3]);
        assert_eq!(req.from, req.to);
        assert_eq!(req.value, 0);
        assert_eq!(req.data, vec![1, 2, 3]);
    }
}
