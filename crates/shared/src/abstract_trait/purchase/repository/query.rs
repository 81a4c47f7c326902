use crate::{errors::RepositoryError, model::purchase::PurchaseDetail};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynPurchaseQueryRepository = Arc<dyn PurchaseQueryRepositoryTrait + Send + Sync>;

/// Purchase listings, newest first, with auction and offer eager-loaded.
#[async_trait]
pub trait PurchaseQueryRepositoryTrait {
    /// Purchases whose auction was posted by `company_id`.
    ///
    /// The buyer company of every row carries its offers and auctions.
    async fn find_by_seller_company(
        &self,
        company_id: i32,
    ) -> Result<Vec<PurchaseDetail>, RepositoryError>;

    /// Purchases whose offer was made by `company_id`.
    ///
    /// The seller company of every row carries its offers and auctions.
    async fn find_by_buyer_company(
        &self,
        company_id: i32,
    ) -> Result<Vec<PurchaseDetail>, RepositoryError>;
}
