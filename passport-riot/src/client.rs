//! Live Riot API client.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::{Result, RiotError};
use crate::http::{create_http_client, execute_request, parse_json};
use crate::region::{Region, RoutingCluster};
use crate::traits::RiotApi;
use crate::types::{LeagueEntry, RankLookup, ResolvedAccount, RiotAccount, SOLO_QUEUE, Summoner};

/// Riot API client holding the key and a pooled HTTP client.
pub struct RiotClient {
    client: Client,
    api_key: String,
}

impl RiotClient {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: create_http_client(),
            api_key: api_key.into(),
        }
    }

    /// Execute a GET against `url` and map non-2xx statuses.
    ///
    /// `resource` names what was looked up, for the 404 error message.
    async fn get_json<T: DeserializeOwned>(&self, url: &str, resource: &str) -> Result<T> {
        let request = self.client.get(url).header("X-Riot-Token", &self.api_key);
        let (status, body) = execute_request(request, url).await?;

        match status {
            200..=299 => parse_json(&body),
            404 => Err(RiotError::NotFound {
                resource: resource.to_string(),
            }),
            401 | 403 => Err(RiotError::InvalidApiKey {
                raw_message: Some(body),
            }),
            _ => Err(RiotError::ApiError { status, body }),
        }
    }

    /// account-v1: identity by Riot ID, served from the continental cluster.
    pub async fn account_by_riot_id(
        &self,
        game_name: &str,
        tag_line: &str,
        cluster: RoutingCluster,
    ) -> Result<RiotAccount> {
        let url = format!(
            "https://{cluster}.api.riotgames.com/riot/account/v1/accounts/by-riot-id/{}/{}",
            urlencoding::encode(game_name),
            urlencoding::encode(tag_line)
        );
        self.get_json(&url, &format!("Riot ID {game_name}#{tag_line}"))
            .await
    }

    /// summoner-v4: summoner by PUUID, served from the platform region.
    pub async fn summoner_by_puuid(&self, puuid: &str, region: Region) -> Result<Summoner> {
        let url = format!(
            "https://{region}.api.riotgames.com/lol/summoner/v4/summoners/by-puuid/{}",
            urlencoding::encode(puuid)
        );
        self.get_json(&url, "summoner").await
    }

    /// summoner-v4: summoner by encrypted summoner ID.
    pub async fn summoner_by_id(&self, summoner_id: &str, region: Region) -> Result<Summoner> {
        let url = format!(
            "https://{region}.api.riotgames.com/lol/summoner/v4/summoners/{}",
            urlencoding::encode(summoner_id)
        );
        self.get_json(&url, "summoner").await
    }

    /// league-v4: ranked entries for a summoner.
    pub async fn league_entries_by_summoner(
        &self,
        summoner_id: &str,
        region: Region,
    ) -> Result<Vec<LeagueEntry>> {
        let url = format!(
            "https://{region}.api.riotgames.com/lol/league/v4/entries/by-summoner/{}",
            urlencoding::encode(summoner_id)
        );
        self.get_json(&url, "league entries").await
    }

    /// Pick the solo-queue placement out of the entry list.
    fn solo_queue_rank(entries: Vec<LeagueEntry>) -> RankLookup {
        entries
            .into_iter()
            .find(|entry| entry.queue_type == SOLO_QUEUE)
            .map_or(RankLookup::Unranked, |entry| {
                RankLookup::Ranked(crate::types::Rank {
                    tier: entry.tier,
                    division: entry.rank,
                })
            })
    }
}

#[async_trait]
impl RiotApi for RiotClient {
    async fn resolve_account(
        &self,
        game_name: &str,
        tag_line: &str,
        region: Region,
    ) -> Result<ResolvedAccount> {
        let cluster = region.routing_cluster();
        let account = self.account_by_riot_id(game_name, tag_line, cluster).await?;
        let summoner = self.summoner_by_puuid(&account.puuid, region).await?;

        // Rank is best-effort: a failed lookup never aborts the resolve,
        // but it is recorded as Unavailable rather than folded into Unranked.
        let rank = match self.league_entries_by_summoner(&summoner.id, region).await {
            Ok(entries) => Self::solo_queue_rank(entries),
            Err(e) => {
                log::warn!("[riot] rank lookup failed for {}: {e}", account.puuid);
                RankLookup::Unavailable
            }
        };

        Ok(ResolvedAccount {
            game_name: account.game_name,
            tag_line: account.tag_line,
            puuid: account.puuid,
            summoner_id: summoner.id,
            rank,
        })
    }

    async fn current_profile_icon(&self, summoner_id: &str, region: Region) -> Result<i64> {
        let summoner = self.summoner_by_id(summoner_id, region).await?;
        Ok(summoner.profile_icon_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rank;

    fn entry(queue: &str, tier: &str, rank: &str) -> LeagueEntry {
        LeagueEntry {
            queue_type: queue.to_string(),
            tier: tier.to_string(),
            rank: rank.to_string(),
        }
    }

    #[test]
    fn solo_queue_rank_found() {
        let entries = vec![
            entry("RANKED_FLEX_SR", "GOLD", "II"),
            entry("RANKED_SOLO_5x5", "CHALLENGER", "I"),
        ];
        assert_eq!(
            RiotClient::solo_queue_rank(entries),
            RankLookup::Ranked(Rank {
                tier: "CHALLENGER".into(),
                division: "I".into()
            })
        );
    }

    #[test]
    fn solo_queue_rank_absent_is_unranked() {
        let entries = vec![entry("RANKED_FLEX_SR", "GOLD", "II")];
        assert_eq!(RiotClient::solo_queue_rank(entries), RankLookup::Unranked);
    }

    #[test]
    fn solo_queue_rank_empty_is_unranked() {
        assert_eq!(RiotClient::solo_queue_rank(vec![]), RankLookup::Unranked);
    }
}
