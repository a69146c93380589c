use async_trait::async_trait;

use crate::error::ChainResult;
use crate::types::{TransactionRequest, TxHash, TxReceipt};

/// Wallet/chain operations consumed by credential anchoring.
///
/// The concrete wallet (browser extension, JSON-RPC endpoint) lives behind
/// this trait; the anchoring service never talks to a chain directly.
#[async_trait]
pub trait WalletBridge: Send + Sync {
    /// The connected account address, if any.
    async fn address(&self) -> Option<String>;

    /// The chain the wallet is currently on.
    async fn chain_id(&self) -> ChainResult<u64>;

    /// Ask the wallet to switch to `chain_id`.
    ///
    /// A successful switch does NOT mean the caller may continue: wallet
    /// state may lag the switch, so callers are expected to re-invoke the
    /// whole operation afterwards.
    async fn request_chain_switch(&self, chain_id: u64) -> ChainResult<()>;

    /// Submit a transaction; returns its hash once broadcast.
    async fn send_transaction(&self, request: &TransactionRequest) -> ChainResult<TxHash>;

    /// Fetch the receipt for a transaction, `None` while unmined.
    async fn transaction_receipt(&self, tx_hash: &TxHash) -> ChainResult<Option<TxReceipt>>;
}
