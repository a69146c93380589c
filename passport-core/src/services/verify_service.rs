//! Challenge verification: compare the account's current profile icon to
//! the stored code and flip the row to verified on match.

use std::sync::Arc;

use chrono::Utc;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{VerifyOutcome, VerifyRequest};

/// Account verification service.
pub struct VerifyService {
    ctx: Arc<ServiceContext>,
}

impl VerifyService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Verify ownership of a linked account.
    ///
    /// Already-verified rows short-circuit to success without a provider
    /// call. An icon mismatch is returned as a non-error
    /// [`VerifyOutcome::IconMismatch`] and leaves the row untouched.
    pub async fn verify(&self, request: VerifyRequest) -> CoreResult<VerifyOutcome> {
        if request.account_id.is_empty() || request.user_id.is_empty() {
            return Err(CoreError::Validation(
                "accountId and userId are required".to_string(),
            ));
        }

        // Compound lookup doubles as the ownership check.
        let mut account = self
            .ctx
            .accounts
            .find_by_id(&request.account_id, &request.user_id)
            .await?
            .ok_or_else(|| {
                CoreError::NotFound(format!("linked account {}", request.account_id))
            })?;

        if account.verified {
            return Ok(VerifyOutcome::AlreadyVerified);
        }

        // A pending row always carries a numeric code; anything else is a
        // broken invariant, not user error.
        let expected: i64 = account
            .verification_code
            .as_deref()
            .ok_or_else(|| {
                CoreError::Storage(format!(
                    "pending account {} has no verification code",
                    account.id
                ))
            })?
            .parse()
            .map_err(|e| {
                CoreError::Storage(format!(
                    "account {} has a non-numeric verification code: {e}",
                    account.id
                ))
            })?;

        let observed = self
            .ctx
            .riot
            .current_profile_icon(&account.summoner_id, account.region)
            .await?;

        if observed != expected {
            log::info!(
                "verification mismatch for account {}: expected icon {expected}, got {observed}",
                account.id
            );
            return Ok(VerifyOutcome::IconMismatch { expected, observed });
        }

        account.verified = true;
        account.verification_code = None;
        account.updated_at = Utc::now();
        self.ctx.accounts.save(&account).await?;
        log::info!("account {} verified", account.id);

        Ok(VerifyOutcome::Verified)
    }
}
