use async_trait::async_trait;

use crate::error::Result;
use crate::region::Region;
use crate::types::ResolvedAccount;

/// Riot API surface consumed by the linking workflow.
///
/// Implemented by [`RiotClient`](crate::RiotClient) against the live API and
/// by in-memory mocks in core tests.
#[async_trait]
pub trait RiotApi: Send + Sync {
    /// Resolve a Riot ID to a normalized account record with best-effort rank.
    async fn resolve_account(
        &self,
        game_name: &str,
        tag_line: &str,
        region: Region,
    ) -> Result<ResolvedAccount>;

    /// Fetch the summoner's current profile icon number.
    async fn current_profile_icon(&self, summoner_id: &str, region: Region) -> Result<i64>;
}
