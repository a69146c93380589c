//! Linked-account persistence abstraction.

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::LinkedAccount;

/// Linked-account repository trait.
///
/// Platform implementation:
/// - Web: `DbLinkedAccountRepository` (`SeaORM`)
/// - Tests: `MockLinkedAccountRepository` (in-memory)
#[async_trait]
pub trait LinkedAccountRepository: Send + Sync {
    /// Get a row by ID, scoped to its owner.
    ///
    /// The compound lookup is the ownership check: a row belonging to
    /// another user is indistinguishable from a missing row.
    async fn find_by_id(&self, id: &str, user_id: &str) -> CoreResult<Option<LinkedAccount>>;

    /// Get the active row for a provider account, regardless of owner.
    /// Backs the relink upsert.
    async fn find_by_puuid(&self, puuid: &str) -> CoreResult<Option<LinkedAccount>>;

    /// All rows owned by a user.
    async fn find_by_user(&self, user_id: &str) -> CoreResult<Vec<LinkedAccount>>;

    /// Verified rows owned by a user (the anchoring input set).
    async fn find_verified_by_user(&self, user_id: &str) -> CoreResult<Vec<LinkedAccount>>;

    /// Save a row (insert or update by `id`).
    async fn save(&self, account: &LinkedAccount) -> CoreResult<()>;

    /// Delete a row, scoped to its owner. Missing row is `NotFound`.
    async fn delete(&self, id: &str, user_id: &str) -> CoreResult<()>;
}
