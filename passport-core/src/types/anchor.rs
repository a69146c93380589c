//! Credential-anchoring payload and result types.

use serde::{Deserialize, Serialize};

use passport_chain::TxHash;
use passport_riot::Region;

use crate::types::LinkedAccount;

/// One verified account as it appears in the anchored payload.
///
/// Only public identity fields go on-chain; provider identifiers (puuid,
/// summoner ID) never leave the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnchoredAccount {
    pub game_name: String,
    pub tag_line: String,
    pub region: Region,
    pub rank: Option<String>,
}

impl From<&LinkedAccount> for AnchoredAccount {
    fn from(account: &LinkedAccount) -> Self {
        Self {
            game_name: account.game_name.clone(),
            tag_line: account.tag_line.clone(),
            region: account.region,
            rank: account.rank_display(),
        }
    }
}

/// The canonical payload whose digest is written on-chain.
///
/// Field order and the order of `accounts` are part of the canonical form;
/// serializing the same payload twice yields identical bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnchorPayload {
    pub accounts: Vec<AnchoredAccount>,
    /// Unix timestamp (seconds) of the anchoring request.
    pub timestamp: i64,
    pub wallet_address: String,
}

/// A confirmed anchoring transaction.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnchorRecord {
    pub tx_hash: TxHash,
    pub block_number: u64,
    /// Hex rendering of the payload digest carried as calldata.
    pub digest: String,
    pub explorer_url: String,
}

/// Result of an anchoring attempt.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum AnchorOutcome {
    /// The wallet was switched to the required chain; wallet state may
    /// lag the switch, so the caller must re-invoke rather than continue.
    NetworkSwitched { chain_id: u64 },
    /// The digest is on-chain.
    Anchored(AnchorRecord),
}
