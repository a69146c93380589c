//! Dashboard orchestration read-model.

use serde::Serialize;

/// Current wizard stage, derived from store + wallet state.
///
/// `AnchorConfirmed` is deliberately absent: confirmation is transient UI
/// state carried by the anchor call's own result, never persisted, and a
/// reload recomputes the stage from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DashboardStage {
    /// No verified linked account yet.
    LinkPending,
    /// Account verified, wallet not connected.
    WalletPending,
    /// Both prior stages complete; anchoring may run.
    AnchorReady,
}

/// Completion snapshot for the three-step wizard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatus {
    pub stage: DashboardStage,
    pub link_complete: bool,
    pub wallet_complete: bool,
}
