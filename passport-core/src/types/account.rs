//! Linked-account types and the link/verify operation contracts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use passport_riot::Region;

use crate::error::{CoreError, CoreResult};

/// Highest profile icon number usable as a verification code.
/// The starter icon catalog is icons `0..=28`, which every account owns.
pub const MAX_VERIFICATION_ICON: u8 = 28;

/// One provider-account-to-user link.
///
/// At most one active row exists per `puuid`; relinking upserts. While
/// verification is pending, `verification_code` holds the challenge icon
/// number as a decimal string; once `verified` flips, the code is cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedAccount {
    /// Row ID (UUID).
    pub id: String,
    /// Owning identity in the external auth subsystem.
    pub user_id: String,
    /// Riot ID display name.
    pub game_name: String,
    /// Riot ID tag suffix.
    pub tag_line: String,
    /// Cross-product provider identifier; the upsert key.
    pub puuid: String,
    /// Region-scoped opaque identifier, used for the icon lookup.
    pub summoner_id: String,
    pub region: Region,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank_tier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank_division: Option<String>,
    /// Pending challenge icon number; `None` once verified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_code: Option<String>,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LinkedAccount {
    /// Rank as a single display string, e.g. `GOLD II`.
    #[must_use]
    pub fn rank_display(&self) -> Option<String> {
        match (&self.rank_tier, &self.rank_division) {
            (Some(tier), Some(division)) => Some(format!("{tier} {division}")),
            (Some(tier), None) => Some(tier.clone()),
            _ => None,
        }
    }
}

/// Link operation input.
///
/// Either `game_name` + `tag_line`, or the legacy single `summoner_name`
/// field in `Name#TAG` form.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRequest {
    #[serde(default)]
    pub game_name: Option<String>,
    #[serde(default)]
    pub tag_line: Option<String>,
    /// Legacy field: full Riot ID as `Name#TAG`.
    #[serde(default)]
    pub summoner_name: Option<String>,
    pub region: String,
    pub user_id: String,
}

impl LinkRequest {
    /// Resolve the two accepted input shapes into `(game_name, tag_line)`.
    pub fn riot_id(&self) -> CoreResult<(String, String)> {
        if let (Some(name), Some(tag)) = (&self.game_name, &self.tag_line) {
            if !name.is_empty() && !tag.is_empty() {
                return Ok((name.clone(), tag.clone()));
            }
        }

        if let Some(legacy) = &self.summoner_name {
            if let Some((name, tag)) = legacy.split_once('#') {
                if !name.is_empty() && !tag.is_empty() {
                    return Ok((name.to_string(), tag.to_string()));
                }
            }
            return Err(CoreError::Validation(format!(
                "summonerName must be of the form Name#TAG, got: {legacy}"
            )));
        }

        Err(CoreError::Validation(
            "gameName and tagLine are required".to_string(),
        ))
    }
}

/// Link operation result.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkOutcome {
    /// Challenge icon number the user must set as their profile icon.
    pub verification_code: String,
    /// Store row ID for the subsequent verify call.
    pub account_id: String,
}

/// Verify operation input.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub account_id: String,
    pub user_id: String,
}

/// Verify operation result.
///
/// `IconMismatch` is a successful run that found the wrong icon — a
/// user-correctable condition, distinct from the operation failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum VerifyOutcome {
    Verified,
    AlreadyVerified,
    IconMismatch { expected: i64, observed: i64 },
}

impl VerifyOutcome {
    #[must_use]
    pub fn success(&self) -> bool {
        !matches!(self, Self::IconMismatch { .. })
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Verified => "Account verified successfully".to_string(),
            Self::AlreadyVerified => "Account already verified".to_string(),
            Self::IconMismatch { expected, observed } => format!(
                "Profile icon does not match. Expected icon #{expected}, but found \
                 #{observed}. Please update your profile icon in the League client."
            ),
        }
    }
}
