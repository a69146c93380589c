//! # passport-chain
//!
//! Wallet and chain interface for credential anchoring.
//!
//! Anchoring records a digest of off-chain credential data inside the
//! payload of a zero-value self-transaction; no contract is involved. This
//! crate provides:
//!
//! - [`WalletBridge`] — the trait the anchoring service talks to (address,
//!   chain ID, chain switch, send, receipt lookup);
//! - [`JsonRpcBridge`] — a JSON-RPC 2.0 implementation for a node with a
//!   wallet-managed account;
//! - [`TransactionWatcher`] — receipt polling that walks the
//!   `Submitted -> Confirming -> Confirmed` lifecycle;
//! - [`MONAD_TESTNET`] — the target chain profile with explorer links.

mod error;
mod rpc;
mod traits;
mod types;
mod watcher;

pub use error::{ChainError, ChainResult};
pub use rpc::JsonRpcBridge;
pub use traits::WalletBridge;
pub use types::{ChainProfile, TransactionRequest, TxHash, TxReceipt, TxStatus, MONAD_TESTNET};
pub use watcher::TransactionWatcher;
