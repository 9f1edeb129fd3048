use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Row;

use crate::{
    adapters::persistence::{PostgresPersistence, single_row},
    app_error::{AppError, AppResult},
    entities::pro_key::{ProKey, ProKeyStatus},
    use_cases::pro_key::ProKeyRepo,
};

fn row_to_pro_key(row: sqlx::postgres::PgRow) -> Result<ProKey, sqlx::Error> {
    Ok(ProKey {
        key: row.try_get("key")?,
        status: ProKeyStatus::from_str(row.try_get::<&str, _>("status")?),
        payment_reference: row.try_get("payment_reference")?,
        created_at: row.try_get("created_at")?,
    })
}

#[async_trait]
impl ProKeyRepo for PostgresPersistence {
    async fn get_by_key(&self, key: &str) -> AppResult<Option<ProKey>> {
        let rows = sqlx::query(
            "SELECT key, status, payment_reference, created_at FROM pro_keys WHERE key = $1 LIMIT 2",
        )
        .bind(key)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;
        single_row(rows)
            .map(row_to_pro_key)
            .transpose()
            .map_err(AppError::from)
    }

    async fn create_active(
        &self,
        key: &str,
        payment_reference: &str,
        created_at: DateTime<Utc>,
    ) -> AppResult<ProKey> {
        let row = sqlx::query(
            r#"
                INSERT INTO pro_keys (key, status, payment_reference, created_at)
                VALUES ($1, 'active', $2, $3)
                RETURNING key, status, payment_reference, created_at
            "#,
        )
        .bind(key)
        .bind(payment_reference)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;
        row_to_pro_key(row).map_err(AppError::from)
    }
}
