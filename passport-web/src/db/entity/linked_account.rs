//! `SeaORM` entity for the `linked_accounts` table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "linked_accounts")]
/// Database row model for a provider-account-to-user link.
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub game_name: String,
    pub tag_line: String,
    #[sea_orm(unique)]
    pub puuid: String,
    pub summoner_id: String,
    pub region: String,
    pub rank_tier: Option<String>,
    pub rank_division: Option<String>,
    pub verification_code: Option<String>,
    pub verified: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
