use std::time::Duration;

use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::{info, warn};

/// Tables the repositories query. See `migrations/0001_init.sql`.
pub const REQUIRED_TABLES: [&str; 2] = ["pro_keys", "receipts"];

/// How long a request waits for a pooled connection before failing with 500.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

pub async fn init_db(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(database_url)
        .await
        .map_err(|e| {
            anyhow::anyhow!("Postgres connection failed (check DATABASE_URL/password): {e}")
        })?;

    info!(max_connections, "Connected to database");

    let present: Vec<String> = sqlx::query_scalar(
        "SELECT table_name::text FROM information_schema.tables WHERE table_schema = current_schema() AND table_name = ANY($1)",
    )
    .bind(&REQUIRED_TABLES[..])
    .fetch_all(&pool)
    .await?;

    let missing = missing_tables(&present);
    if !missing.is_empty() {
        // Lookups against a missing table read as invalid keys, so say so loudly.
        warn!(
            ?missing,
            "Receipt tables not found; apply migrations/0001_init.sql"
        );
    }

    Ok(pool)
}

fn missing_tables(present: &[String]) -> Vec<&'static str> {
    REQUIRED_TABLES
        .into_iter()
        .filter(|table| !present.iter().any(|p| p == table))
        .collect()
}
