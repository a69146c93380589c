//! `LinkedAccountRepository` implementation backed by `SeaORM`.

use async_trait::async_trait;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
};

use passport_core::error::{CoreError, CoreResult};
use passport_core::traits::LinkedAccountRepository;
use passport_core::types::LinkedAccount;
use passport_riot::Region;

use super::entity::linked_account;

/// Database-backed linked-account repository.
pub struct DbLinkedAccountRepository {
    db: DatabaseConnection,
}

impl DbLinkedAccountRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl linked_account::Model {
    /// Convert a `SeaORM` row model into a domain `LinkedAccount`.
    ///
    /// String-backed fields are parsed into strongly typed values.
    fn into_linked_account(self) -> CoreResult<LinkedAccount> {
        let created_at = chrono::DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|e| CoreError::Storage(format!("Invalid created_at: {e}")))?
            .with_timezone(&chrono::Utc);
        let updated_at = chrono::DateTime::parse_from_rfc3339(&self.updated_at)
            .map_err(|e| CoreError::Storage(format!("Invalid updated_at: {e}")))?
            .with_timezone(&chrono::Utc);
        let region: Region = self
            .region
            .parse()
            .map_err(|e| CoreError::Storage(format!("Invalid region: {e}")))?;

        Ok(LinkedAccount {
            id: self.id,
            user_id: self.user_id,
            game_name: self.game_name,
            tag_line: self.tag_line,
            puuid: self.puuid,
            summoner_id: self.summoner_id,
            region,
            rank_tier: self.rank_tier,
            rank_division: self.rank_division,
            verification_code: self.verification_code,
            verified: self.verified,
            created_at,
            updated_at,
        })
    }
}

/// Convert a domain `LinkedAccount` into a `SeaORM` active model for upsert.
fn to_active_model(account: &LinkedAccount) -> linked_account::ActiveModel {
    linked_account::ActiveModel {
        id: Set(account.id.clone()),
        user_id: Set(account.user_id.clone()),
        game_name: Set(account.game_name.clone()),
        tag_line: Set(account.tag_line.clone()),
        puuid: Set(account.puuid.clone()),
        summoner_id: Set(account.summoner_id.clone()),
        region: Set(account.region.as_str().to_string()),
        rank_tier: Set(account.rank_tier.clone()),
        rank_division: Set(account.rank_division.clone()),
        verification_code: Set(account.verification_code.clone()),
        verified: Set(account.verified),
        created_at: Set(account.created_at.to_rfc3339()),
        updated_at: Set(account.updated_at.to_rfc3339()),
    }
}

#[async_trait]
impl LinkedAccountRepository for DbLinkedAccountRepository {
    async fn find_by_id(&self, id: &str, user_id: &str) -> CoreResult<Option<LinkedAccount>> {
        let row = linked_account::Entity::find()
            .filter(linked_account::Column::Id.eq(id))
            .filter(linked_account::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to query linked account: {e}")))?;

        row.map(linked_account::Model::into_linked_account)
            .transpose()
    }

    async fn find_by_puuid(&self, puuid: &str) -> CoreResult<Option<LinkedAccount>> {
        let row = linked_account::Entity::find()
            .filter(linked_account::Column::Puuid.eq(puuid))
            .one(&self.db)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to query linked account: {e}")))?;

        row.map(linked_account::Model::into_linked_account)
            .transpose()
    }

    async fn find_by_user(&self, user_id: &str) -> CoreResult<Vec<LinkedAccount>> {
        let rows = linked_account::Entity::find()
            .filter(linked_account::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to query linked accounts: {e}")))?;

        rows.into_iter()
            .map(linked_account::Model::into_linked_account)
            .collect()
    }

    async fn find_verified_by_user(&self, user_id: &str) -> CoreResult<Vec<LinkedAccount>> {
        let rows = linked_account::Entity::find()
            .filter(linked_account::Column::UserId.eq(user_id))
            .filter(linked_account::Column::Verified.eq(true))
            .all(&self.db)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to query linked accounts: {e}")))?;

        rows.into_iter()
            .map(linked_account::Model::into_linked_account)
            .collect()
    }

    async fn save(&self, account: &LinkedAccount) -> CoreResult<()> {
        let active_model = to_active_model(account);

        linked_account::Entity::insert(active_model)
            .on_conflict(
                sea_orm::sea_query::OnConflict::column(linked_account::Column::Id)
                    .update_columns([
                        linked_account::Column::UserId,
                        linked_account::Column::GameName,
                        linked_account::Column::TagLine,
                        linked_account::Column::SummonerId,
                        linked_account::Column::Region,
                        linked_account::Column::RankTier,
                        linked_account::Column::RankDivision,
                        linked_account::Column::VerificationCode,
                        linked_account::Column::Verified,
                        linked_account::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to save linked account: {e}")))?;

        Ok(())
    }

    async fn delete(&self, id: &str, user_id: &str) -> CoreResult<()> {
        let model = linked_account::Entity::find()
            .filter(linked_account::Column::Id.eq(id))
            .filter(linked_account::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| CoreError::Storage(format!("Failed to query linked account: {e}")))?;

        match model {
            Some(m) => {
                m.delete(&self.db).await.map_err(|e| {
                    CoreError::Storage(format!("Failed to delete linked account: {e}"))
                })?;
                Ok(())
            }
            None => Err(CoreError::NotFound(format!("linked account {id}"))),
        }
    }
}
