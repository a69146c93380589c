//! Account linking: resolve a Riot ID, assign a challenge icon, upsert the
//! store row in pending state. Also owns listing and user-initiated unlink.

use std::sync::Arc;

use chrono::Utc;
use rand::Rng;

use passport_riot::Region;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{LinkOutcome, LinkRequest, LinkedAccount, MAX_VERIFICATION_ICON};

/// Account linking service.
pub struct LinkService {
    ctx: Arc<ServiceContext>,
}

/// A uniformly random icon number in the starter catalog, as a decimal string.
fn generate_verification_code() -> String {
    rand::rng().random_range(0..=MAX_VERIFICATION_ICON).to_string()
}

impl LinkService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Link a game account to a user.
    ///
    /// Resolves the Riot ID, generates a fresh verification code, and
    /// upserts the row keyed by PUUID. Relinking an already-linked account
    /// (by any user) overwrites the row and resets it to pending, so a
    /// transferred link always requires re-verification.
    pub async fn link(&self, request: LinkRequest) -> CoreResult<LinkOutcome> {
        if request.user_id.is_empty() {
            return Err(CoreError::Validation("userId is required".to_string()));
        }
        if request.region.is_empty() {
            return Err(CoreError::Validation("region is required".to_string()));
        }
        let (game_name, tag_line) = request.riot_id()?;
        let region: Region = request
            .region
            .parse()
            .map_err(|e| CoreError::Validation(format!("invalid region: {e}")))?;

        let resolved = self
            .ctx
            .riot
            .resolve_account(&game_name, &tag_line, region)
            .await?;

        let verification_code = generate_verification_code();
        let now = Utc::now();
        let (rank_tier, rank_division) = match resolved.rank.rank() {
            Some(rank) => (Some(rank.tier.clone()), Some(rank.division.clone())),
            None => (None, None),
        };

        let account = match self.ctx.accounts.find_by_puuid(&resolved.puuid).await? {
            Some(mut existing) => {
                if existing.user_id != request.user_id {
                    log::info!(
                        "relink transfers account {} to another user; verification reset",
                        existing.id
                    );
                }
                existing.user_id = request.user_id;
                existing.game_name = resolved.game_name;
                existing.tag_line = resolved.tag_line;
                existing.summoner_id = resolved.summoner_id;
                existing.region = region;
                existing.rank_tier = rank_tier;
                existing.rank_division = rank_division;
                existing.verification_code = Some(verification_code.clone());
                existing.verified = false;
                existing.updated_at = now;
                existing
            }
            None => LinkedAccount {
                id: uuid::Uuid::new_v4().to_string(),
                user_id: request.user_id,
                game_name: resolved.game_name,
                tag_line: resolved.tag_line,
                puuid: resolved.puuid,
                summoner_id: resolved.summoner_id,
                region,
                rank_tier,
                rank_division,
                verification_code: Some(verification_code.clone()),
                verified: false,
                created_at: now,
                updated_at: now,
            },
        };

        self.ctx.accounts.save(&account).await?;
        log::info!(
            "linked account {} ({}#{}) pending verification",
            account.id,
            account.game_name,
            account.tag_line
        );

        Ok(LinkOutcome {
            verification_code,
            account_id: account.id,
        })
    }

    /// All rows owned by a user.
    pub async fn list(&self, user_id: &str) -> CoreResult<Vec<LinkedAccount>> {
        self.ctx.accounts.find_by_user(user_id).await
    }

    /// User-initiated unlink: removes the row outright (no soft delete).
    pub async fn unlink(&self, account_id: &str, user_id: &str) -> CoreResult<()> {
        self.ctx.accounts.delete(account_id, user_id).await
    }
}
