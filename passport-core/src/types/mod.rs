//! Domain type definitions.

mod account;
mod anchor;
mod dashboard;

pub use account::{
    LinkOutcome, LinkRequest, LinkedAccount, VerifyOutcome, VerifyRequest, MAX_VERIFICATION_ICON,
};
pub use anchor::{AnchorOutcome, AnchorPayload, AnchorRecord, AnchoredAccount};
pub use dashboard::{DashboardStage, DashboardStatus};
