use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LinkedAccount::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LinkedAccount::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LinkedAccount::UserId).string().not_null())
                    .col(ColumnDef::new(LinkedAccount::GameName).string().not_null())
                    .col(ColumnDef::new(LinkedAccount::TagLine).string().not_null())
                    .col(
                        ColumnDef::new(LinkedAccount::Puuid)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(LinkedAccount::SummonerId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(LinkedAccount::Region).string().not_null())
                    .col(ColumnDef::new(LinkedAccount::RankTier).string().null())
                    .col(ColumnDef::new(LinkedAccount::RankDivision).string().null())
                    .col(
                        ColumnDef::new(LinkedAccount::VerificationCode)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(LinkedAccount::Verified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(LinkedAccount::CreatedAt)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LinkedAccount::UpdatedAt)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // listing is always per user
        manager
            .create_index(
                Index::create()
                    .name("idx_linked_accounts_user_id")
                    .table(LinkedAccount::Table)
                    .col(LinkedAccount::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LinkedAccount::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum LinkedAccount {
    #[sea_orm(iden = "linked_accounts")]
    Table,
    Id,
    UserId,
    GameName,
    TagLine,
    Puuid,
    SummonerId,
    Region,
    RankTier,
    RankDivision,
    VerificationCode,
    Verified,
    CreatedAt,
    UpdatedAt,
}
