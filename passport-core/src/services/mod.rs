//! Business logic service layer.

mod anchor_service;
mod dashboard_service;
mod link_service;
mod verify_service;

pub use anchor_service::AnchorService;
pub use dashboard_service::DashboardService;
pub use link_service::LinkService;
pub use verify_service::VerifyService;

use std::sync::Arc;

use passport_chain::WalletBridge;
use passport_riot::RiotApi;

use crate::traits::LinkedAccountRepository;

/// Service context - holds all dependencies.
///
/// The platform layer creates this context and injects its provider
/// client, store adapter, and wallet bridge.
pub struct ServiceContext {
    /// Riot API client.
    pub riot: Arc<dyn RiotApi>,
    /// Linked-account persistence.
    pub accounts: Arc<dyn LinkedAccountRepository>,
    /// Wallet/chain bridge.
    pub wallet: Arc<dyn WalletBridge>,
}

impl ServiceContext {
    /// Create a service context.
    #[must_use]
    pub fn new(
        riot: Arc<dyn RiotApi>,
        accounts: Arc<dyn LinkedAccountRepository>,
        wallet: Arc<dyn WalletBridge>,
    ) -> Self {
        Self {
            riot,
            accounts,
            wallet,
        }
    }
}
