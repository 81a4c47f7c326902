use crate::{
    abstract_trait::{
        company::service::stats::CompanyStatsServiceTrait,
        purchase::repository::stats::DynPurchaseStatsRepository,
    },
    domain::responses::PurchaseCounts,
    errors::ServiceError,
    model::company::CompanyDetail,
};
use async_trait::async_trait;
use tracing::{debug, error};

/// Activity totals of one company.
///
/// Offer and auction totals come from the collections already loaded on the
/// company; sales and purchase totals are two count queries issued together.
pub struct CompanyStatsService {
    stats: DynPurchaseStatsRepository,
}

impl CompanyStatsService {
    pub fn new(stats: DynPurchaseStatsRepository) -> Self {
        Self { stats }
    }
}

#[async_trait]
impl CompanyStatsServiceTrait for CompanyStatsService {
    async fn get_counts(&self, company: &CompanyDetail) -> Result<PurchaseCounts, ServiceError> {
        let company_id = company.company.id;

        let (Some(offers), Some(auctions)) = (&company.offers, &company.auctions) else {
            error!("❌ Activity of company {company_id} was not loaded");
            return Err(ServiceError::InternalServerError(format!(
                "activity of company {company_id} was not loaded"
            )));
        };

        let (count_sales, count_purchases) = tokio::try_join!(
            self.stats.count_sales_by_company(company_id),
            self.stats.count_purchases_by_company(company_id),
        )?;

        let counts = PurchaseCounts {
            count_offers: offers.len() as i64,
            count_sales,
            count_purchases,
            count_auctions: auctions.len() as i64,
        };

        debug!("📊 Company {company_id} counts: {counts:?}");

        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::purchase::repository::{
            query::PurchaseQueryRepositoryTrait, stats::DynPurchaseStatsRepository,
        },
        repository::memory::InMemoryMarketplace,
    };
    use std::sync::Arc;

    #[tokio::test]
    async fn counts_a_company_in_isolation() {
        let store = Arc::new(InMemoryMarketplace::new());
        let a = store.add_company("A");
        let b = store.add_company("B");
        let c = store.add_company("C");
        let waste = store.add_waste("Vidrio", "Kilo", "Vidrio");

        store.add_sale(a, b, waste);
        store.add_sale(a, b, waste);
        store.add_sale(c, b, waste);
        store.add_sale(b, c, waste);
        // an open auction by B without a purchase
        store.add_auction(b, waste, "Sin oferta");

        let sales = store.find_by_seller_company(a).await.unwrap();
        let buyer = &sales[0].offer.company_buyer;

        let service = CompanyStatsService::new(store.clone() as DynPurchaseStatsRepository);
        let counts = service.get_counts(buyer).await.unwrap();

        assert_eq!(
            counts,
            PurchaseCounts {
                count_offers: 3,
                count_sales: 1,
                count_purchases: 3,
                count_auctions: 2,
            }
        );
    }

    #[tokio::test]
    async fn refuses_companies_without_loaded_activity() {
        let store = Arc::new(InMemoryMarketplace::new());
        let a = store.add_company("A");
        let b = store.add_company("B");
        let waste = store.add_waste("Vidrio", "Kilo", "Vidrio");
        store.add_sale(a, b, waste);

        let sales = store.find_by_seller_company(a).await.unwrap();
        let seller = &sales[0].auction.company_seller;

        let service = CompanyStatsService::new(store.clone() as DynPurchaseStatsRepository);

        assert!(matches!(
            service.get_counts(seller).await,
            Err(ServiceError::InternalServerError(_))
        ));
        assert_eq!(store.count_queries(), 0);
    }
}
