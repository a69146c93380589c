//! Dashboard orchestration: the wizard's completion state as a derived
//! read-model, recomputed from store + wallet state on every load.
//!
//! Nothing here is the source of truth. A verified row marks the link step
//! complete and a connected wallet marks the wallet step complete, which
//! makes the wizard re-entrant across sessions instead of strictly linear.

use std::sync::Arc;

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::types::{DashboardStage, DashboardStatus};

/// Dashboard orchestration service.
pub struct DashboardService {
    ctx: Arc<ServiceContext>,
}

impl DashboardService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Recompute the wizard stage for a user.
    pub async fn status(&self, user_id: &str) -> CoreResult<DashboardStatus> {
        let accounts = self.ctx.accounts.find_by_user(user_id).await?;
        let link_complete = accounts.iter().any(|account| account.verified);
        let wallet_complete = self.ctx.wallet.address().await.is_some();

        let stage = if !link_complete {
            DashboardStage::LinkPending
        } else if !wallet_complete {
            DashboardStage::WalletPending
        } else {
            DashboardStage::AnchorReady
        };

        Ok(DashboardStatus {
            stage,
            link_complete,
            wallet_complete,
        })
    }
}
