use async_trait::async_trait;
use sqlx::Row;

use crate::{
    adapters::persistence::{PostgresPersistence, single_row},
    app_error::{AppError, AppResult},
    entities::receipt::{NewReceipt, Receipt},
    use_cases::receipt::ReceiptRepo,
};

fn row_to_receipt(row: sqlx::postgres::PgRow) -> Result<Receipt, sqlx::Error> {
    Ok(Receipt {
        token: row.try_get("token")?,
        customer_name: row.try_get("customer_name")?,
        date: row.try_get("date")?,
        items: row
            .try_get::<Option<serde_json::Value>, _>("items")?
            .unwrap_or(serde_json::Value::Null),
        total: row.try_get("total")?,
        timestamp: row.try_get("timestamp")?,
    })
}

#[async_trait]
impl ReceiptRepo for PostgresPersistence {
    async fn create(&self, receipt: &NewReceipt) -> AppResult<()> {
        sqlx::query(
            r#"
                INSERT INTO receipts (token, customer_name, date, items, total, pro_key)
                VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&receipt.token)
        .bind(&receipt.customer_name)
        .bind(&receipt.date)
        .bind(&receipt.items)
        .bind(receipt.total)
        .bind(&receipt.pro_key)
        .execute(&self.pool)
        .await
        .map_err(AppError::from)?;
        Ok(())
    }

    async fn list_by_pro_key(&self, pro_key: &str) -> AppResult<Vec<Receipt>> {
        let rows = sqlx::query(
            r#"
                SELECT token, customer_name, date, items, total, timestamp
                FROM receipts
                WHERE pro_key = $1
                ORDER BY timestamp DESC
            "#,
        )
        .bind(pro_key)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;
        rows.into_iter()
            .map(row_to_receipt)
            .collect::<Result<Vec<_>, _>>()
            .map_err(AppError::from)
    }

    async fn get_by_token(&self, token: &str) -> AppResult<Option<Receipt>> {
        let rows = sqlx::query(
            "SELECT token, customer_name, date, items, total, timestamp FROM receipts WHERE token = $1 LIMIT 2",
        )
        .bind(token)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;
        single_row(rows)
            .map(row_to_receipt)
            .transpose()
            .map_err(AppError::from)
    }
}
