//! Transaction confirmation watcher.
//!
//! Walks a submitted transaction through `Submitted -> Confirming ->
//! Confirmed` by polling the wallet's receipt lookup on a fixed interval.
//! The chain itself drives progress; this type only observes it.

use std::time::Duration;

use crate::error::{ChainError, ChainResult};
use crate::traits::WalletBridge;
use crate::types::{TxHash, TxReceipt, TxStatus};

/// Default interval between receipt polls.
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);
/// Default polling budget before giving up.
const DEFAULT_MAX_POLLS: u32 = 60;

/// Polls for a transaction receipt until confirmation or budget exhaustion.
#[derive(Debug, Clone)]
pub struct TransactionWatcher {
    poll_interval: Duration,
    max_polls: u32,
}

impl Default for TransactionWatcher {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_polls: DEFAULT_MAX_POLLS,
        }
    }
}

impl TransactionWatcher {
    #[must_use]
    pub fn new(poll_interval: Duration, max_polls: u32) -> Self {
        Self {
            poll_interval,
            max_polls,
        }
    }

    /// Single receipt poll, mapped onto the transaction lifecycle.
    ///
    /// `polled_before` distinguishes `Submitted` (first look) from
    /// `Confirming` (still unmined after at least one poll).
    pub async fn poll_status(
        &self,
        wallet: &dyn WalletBridge,
        tx_hash: &TxHash,
        polled_before: bool,
    ) -> ChainResult<TxStatus> {
        match wallet.transaction_receipt(tx_hash).await? {
            Some(receipt) if receipt.success => Ok(TxStatus::Confirmed(receipt)),
            Some(receipt) => Err(ChainError::Rejected(format!(
                "transaction {tx_hash} reverted in block {}",
                receipt.block_number
            ))),
            None if polled_before => Ok(TxStatus::Confirming),
            None => Ok(TxStatus::Submitted),
        }
    }

    /// Poll until the transaction is mined.
    ///
    /// Returns the receipt on success, `Rejected` if it reverted, and
    /// `ConfirmationTimeout` once the polling budget runs out.
    pub async fn wait_for_confirmation(
        &self,
        wallet: &dyn WalletBridge,
        tx_hash: &TxHash,
    ) -> ChainResult<TxReceipt> {
        for attempt in 0..self.max_polls {
            match self.poll_status(wallet, tx_hash, attempt > 0).await? {
                TxStatus::Confirmed(receipt) => {
                    log::info!(
                        "[chain] transaction {tx_hash} confirmed in block {}",
                        receipt.block_number
                    );
                    return Ok(receipt);
                }
                TxStatus::Submitted => {
                    log::debug!("[chain] transaction {tx_hash} submitted, awaiting receipt");
                }
                TxStatus::Confirming => {
                    log::debug!(
                        "[chain] transaction {tx_hash} confirming (poll {}/{})",
                        attempt + 1,
                        self.max_polls
                    );
                }
            }
            tokio::time::sleep(self.poll_interval).await;
        }

        Err(ChainError::ConfirmationTimeout(tx_hash.0.clone()))
    }
}
