//! Riot API response types and the normalized resolve result.

use serde::{Deserialize, Serialize};

/// account-v1 identity record, keyed by Riot ID (`gameName#tagLine`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiotAccount {
    /// Player universally unique ID, stable across regions and titles.
    pub puuid: String,
    pub game_name: String,
    pub tag_line: String,
}

/// summoner-v4 record in the platform namespace.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summoner {
    /// Encrypted summoner ID, scoped to the platform region.
    pub id: String,
    pub puuid: String,
    pub profile_icon_id: i64,
    #[serde(default)]
    pub summoner_level: i64,
}

/// One league-v4 entry; a summoner has one per ranked queue.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntry {
    pub queue_type: String,
    pub tier: String,
    pub rank: String,
}

/// Queue whose entry supplies the displayed rank.
pub(crate) const SOLO_QUEUE: &str = "RANKED_SOLO_5x5";

/// Competitive placement (solo queue tier + division).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rank {
    pub tier: String,
    pub division: String,
}

/// Outcome of the best-effort rank lookup.
///
/// `Unranked` means the lookup succeeded and found no solo-queue entry;
/// `Unavailable` means the lookup itself failed. Both render as "no rank"
/// downstream, but callers can tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RankLookup {
    Ranked(Rank),
    Unranked,
    Unavailable,
}

impl RankLookup {
    /// The rank, if one was found.
    #[must_use]
    pub fn rank(&self) -> Option<&Rank> {
        match self {
            Self::Ranked(rank) => Some(rank),
            Self::Unranked | Self::Unavailable => None,
        }
    }
}

/// Normalized result of resolving a Riot ID: identity, platform-scoped
/// summoner ID, and best-effort rank.
#[derive(Debug, Clone)]
pub struct ResolvedAccount {
    pub game_name: String,
    pub tag_line: String,
    pub puuid: String,
    pub summoner_id: String,
    pub rank: RankLookup,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_account() {
        let json = r#"{"puuid":"P1","gameName":"Faker","tagLine":"KR1"}"#;
        let account: RiotAccount = serde_json::from_str(json).unwrap();
        assert_eq!(account.puuid, "P1");
        assert_eq!(account.game_name, "Faker");
        assert_eq!(account.tag_line, "KR1");
    }

    #[test]
    fn deserialize_summoner() {
        let json = r#"{"id":"S1","puuid":"P1","profileIconId":7,"summonerLevel":412}"#;
        let summoner: Summoner = serde_json::from_str(json).unwrap();
        assert_eq!(summoner.id, "S1");
        assert_eq!(summoner.profile_icon_id, 7);
    }

    #[test]
    fn deserialize_summoner_without_level() {
        let json = r#"{"id":"S1","puuid":"P1","profileIconId":0}"#;
        let summoner: Summoner = serde_json::from_str(json).unwrap();
        assert_eq!(summoner.summoner_level, 0);
    }

    #[test]
    fn rank_lookup_accessor() {
        let ranked = RankLookup::Ranked(Rank {
            tier: "CHALLENGER".into(),
            division: "I".into(),
        });
        assert_eq!(ranked.rank().unwrap().tier, "CHALLENGER");
        assert!(RankLookup::Unranked.rank().is_none());
        assert!(RankLookup::Unavailable.rank().is_none());
    }
}
