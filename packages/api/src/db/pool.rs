//! Database connection pool using the OnceCell pattern.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::OnceCell;

use crate::error::ApiError;
use crate::settings::Settings;

static POOL: OnceCell<PgPool> = OnceCell::const_new();

/// Get or initialize the database connection pool from [`Settings`].
pub async fn get_pool() -> Result<&'static PgPool, ApiError> {
    POOL.get_or_try_init(|| async {
        dotenvy::dotenv().ok();
        let settings = Settings::new()?;

        tracing::info!(
            max_connections = settings.database.max_connections,
            "connecting to database"
        );
        let pool = PgPoolOptions::new()
            .max_connections(settings.database.max_connections)
            .connect(&settings.database.url)
            .await?;
        Ok(pool)
    })
    .await
}

/// Apply the embedded schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), ApiError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
