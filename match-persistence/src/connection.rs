use sea_orm::{Database, DatabaseConnection, DbErr};
use tracing::info;

/// Connect using `DATABASE_URL`, falling back to a local sqlite file.
pub async fn connect_from_env() -> Result<DatabaseConnection, DbErr> {
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://match_points.db".to_string());

    info!(%database_url, "connecting to point store");
    Database::connect(&database_url).await
}

/// In-memory sqlite connection for tests and offline sessions.
pub async fn connect_in_memory() -> Result<DatabaseConnection, DbErr> {
    Database::connect("sqlite::memory:").await
}
