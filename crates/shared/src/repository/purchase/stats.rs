use crate::{
    abstract_trait::purchase::repository::stats::PurchaseStatsRepositoryTrait,
    config::ConnectionPool, errors::RepositoryError,
};
use async_trait::async_trait;
use tracing::error;

#[derive(Clone)]
pub struct PurchaseStatsRepository {
    db: ConnectionPool,
}

impl PurchaseStatsRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn get_conn(
        &self,
    ) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })
    }
}

#[async_trait]
impl PurchaseStatsRepositoryTrait for PurchaseStatsRepository {
    async fn count_sales_by_company(&self, company_id: i32) -> Result<i64, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM purchases p
            JOIN auctions a ON a.id = p.auction_id
            WHERE a.company_seller_id = $1
            "#,
        )
        .bind(company_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in count_sales_by_company: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(total)
    }

    async fn count_purchases_by_company(&self, company_id: i32) -> Result<i64, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM purchases p
            JOIN offers o ON o.id = p.offer_id
            WHERE o.company_buyer_id = $1
            "#,
        )
        .bind(company_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in count_purchases_by_company: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(total)
    }
}
