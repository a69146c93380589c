//! monad.passport Core Library
//!
//! Provides core business logic for linking League accounts to wallet
//! identities, including:
//! - Account linking (Link Service)
//! - Profile-icon challenge verification (Verify Service)
//! - Credential anchoring on Monad testnet (Anchor Service)
//! - Wizard orchestration read-model (Dashboard Service)
//!
//! This library is platform-independent: storage goes through the
//! `LinkedAccountRepository` trait, the game-stats provider through
//! `passport_riot::RiotApi`, and the chain through
//! `passport_chain::WalletBridge`.

pub mod crypto;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::ServiceContext;
pub use traits::LinkedAccountRepository;
