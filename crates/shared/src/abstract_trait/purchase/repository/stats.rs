use crate::errors::RepositoryError;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynPurchaseStatsRepository = Arc<dyn PurchaseStatsRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait PurchaseStatsRepositoryTrait {
    /// Purchases where `company_id` posted the auction.
    async fn count_sales_by_company(&self, company_id: i32) -> Result<i64, RepositoryError>;

    /// Purchases where `company_id` made the offer.
    async fn count_purchases_by_company(&self, company_id: i32) -> Result<i64, RepositoryError>;
}
