//! Shared application state.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use passport_chain::JsonRpcBridge;
use passport_core::services::{AnchorService, DashboardService, LinkService, VerifyService};
use passport_core::ServiceContext;
use passport_riot::RiotClient;

use crate::config::PassportConfig;
use crate::db::DbLinkedAccountRepository;

/// Services shared across workers.
pub struct AppState {
    pub link_service: LinkService,
    pub verify_service: VerifyService,
    pub anchor_service: AnchorService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    /// Wire the provider client, store adapter, and wallet bridge into the
    /// core service context.
    #[must_use]
    pub fn new(config: &PassportConfig, db: DatabaseConnection) -> Self {
        let riot = Arc::new(RiotClient::new(config.riot_api_key.clone()));
        let accounts = Arc::new(DbLinkedAccountRepository::new(db));
        let wallet = Arc::new(JsonRpcBridge::new(
            config.rpc_url.clone(),
            config.wallet_address.clone(),
        ));

        let ctx = Arc::new(ServiceContext::new(riot, accounts, wallet));

        Self {
            link_service: LinkService::new(ctx.clone()),
            verify_service: VerifyService::new(ctx.clone()),
            anchor_service: AnchorService::new(ctx.clone()),
            dashboard_service: DashboardService::new(ctx),
        }
    }
}
