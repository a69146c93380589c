//! Database layer: `SeaORM` entities and the repository adapter.

pub(crate) mod entity;
mod linked_account_repo;

pub use linked_account_repo::DbLinkedAccountRepository;

use migration::{Migrator, MigratorTrait};
use passport_core::error::{CoreError, CoreResult};
use sea_orm::{Database, DatabaseConnection};

/// Connect to the database and bring the schema up to date.
pub async fn connect(database_url: &str) -> CoreResult<DatabaseConnection> {
    let db = Database::connect(database_url)
        .await
        .map_err(|e| CoreError::Storage(format!("Failed to connect to database: {e}")))?;

    Migrator::up(&db, None)
        .await
        .map_err(|e| CoreError::Storage(format!("Failed to run migrations: {e}")))?;

    Ok(db)
}
