use crate::{
    domain::responses::PurchaseCounts, errors::ServiceError, model::company::CompanyDetail,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCompanyStatsService = Arc<dyn CompanyStatsServiceTrait + Send + Sync>;

#[async_trait]
pub trait CompanyStatsServiceTrait {
    async fn get_counts(&self, company: &CompanyDetail) -> Result<PurchaseCounts, ServiceError>;
}
