use crate::{
    domain::{requests::RecordType, responses::PurchaseWithCountsResponse},
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynPurchaseQueryService = Arc<dyn PurchaseQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait PurchaseQueryServiceTrait {
    async fn find_by_record_type(
        &self,
        company_id: i32,
        record_type: RecordType,
    ) -> Result<Vec<PurchaseWithCountsResponse>, ServiceError>;
}
