use crate::{
    abstract_trait::{
        company::service::stats::DynCompanyStatsService,
        purchase::{
            repository::query::DynPurchaseQueryRepository,
            service::query::PurchaseQueryServiceTrait,
        },
    },
    domain::{
        requests::RecordType,
        responses::{PurchaseResponse, PurchaseWithCountsResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use futures::future::try_join_all;
use tracing::{error, info};

pub struct PurchaseQueryService {
    query: DynPurchaseQueryRepository,
    stats: DynCompanyStatsService,
}

impl PurchaseQueryService {
    pub fn new(query: DynPurchaseQueryRepository, stats: DynCompanyStatsService) -> Self {
        Self { query, stats }
    }
}

#[async_trait]
impl PurchaseQueryServiceTrait for PurchaseQueryService {
    async fn find_by_record_type(
        &self,
        company_id: i32,
        record_type: RecordType,
    ) -> Result<Vec<PurchaseWithCountsResponse>, ServiceError> {
        info!("🔍 Listing {record_type} for company {company_id}");

        let purchases = match record_type {
            RecordType::Ventas => self.query.find_by_seller_company(company_id).await,
            RecordType::Compras => self.query.find_by_buyer_company(company_id).await,
        }
        .map_err(|e| {
            error!("❌ Failed to list {record_type} for company {company_id}: {e}");
            ServiceError::Repo(e)
        })?;

        let counts = try_join_all(
            purchases
                .iter()
                .map(|purchase| self.stats.get_counts(record_type.counterparty(purchase))),
        )
        .await?;

        let response: Vec<PurchaseWithCountsResponse> = purchases
            .into_iter()
            .zip(counts)
            .map(|(purchase, counts)| PurchaseWithCountsResponse {
                purchase: PurchaseResponse::from(purchase),
                counts,
            })
            .collect();

        info!(
            "✅ Found {} {record_type} for company {company_id}",
            response.len()
        );

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{
            company::service::stats::DynCompanyStatsService,
            purchase::repository::{
                query::DynPurchaseQueryRepository, stats::DynPurchaseStatsRepository,
            },
        },
        domain::responses::PurchaseCounts,
        repository::memory::InMemoryMarketplace,
        service::company::CompanyStatsService,
    };
    use chrono::Duration;
    use std::sync::Arc;

    fn service(store: &Arc<InMemoryMarketplace>) -> PurchaseQueryService {
        let stats = Arc::new(CompanyStatsService::new(
            store.clone() as DynPurchaseStatsRepository
        )) as DynCompanyStatsService;
        PurchaseQueryService::new(store.clone() as DynPurchaseQueryRepository, stats)
    }

    #[tokio::test]
    async fn sales_are_counted_for_the_buyer() {
        let store = Arc::new(InMemoryMarketplace::new());
        let a = store.add_company("A");
        let b = store.add_company("B");
        let c = store.add_company("C");
        let waste = store.add_waste("Cartón", "Kilo", "Papel");

        store.add_sale(a, b, waste);
        store.add_sale(a, b, waste);
        store.add_sale(c, b, waste);

        let rows = service(&store)
            .find_by_record_type(a, RecordType::Ventas)
            .await
            .unwrap();

        assert_eq!(rows.len(), 2);
        for row in &rows {
            assert_eq!(row.purchase.auction.company_seller_id, a);
            assert_eq!(row.purchase.offer.company_buyer_id, b);
            assert_eq!(
                row.counts,
                PurchaseCounts {
                    count_offers: 3,
                    count_sales: 0,
                    count_purchases: 3,
                    count_auctions: 0,
                }
            );
        }
        // two count queries per row
        assert_eq!(store.count_queries(), 4);
    }

    #[tokio::test]
    async fn purchases_are_counted_for_the_seller() {
        let store = Arc::new(InMemoryMarketplace::new());
        let a = store.add_company("A");
        let b = store.add_company("B");
        let waste = store.add_waste("Chatarra", "Tonelada", "Metal");

        store.add_sale(b, a, waste);
        store.add_sale(b, a, waste);
        store.add_sale(a, b, waste);

        let rows = service(&store)
            .find_by_record_type(a, RecordType::Compras)
            .await
            .unwrap();

        assert_eq!(rows.len(), 2);
        for row in &rows {
            assert_eq!(row.purchase.offer.company_buyer_id, a);
            assert_eq!(
                row.counts,
                PurchaseCounts {
                    count_offers: 1,
                    count_sales: 2,
                    count_purchases: 1,
                    count_auctions: 2,
                }
            );
        }
    }

    #[tokio::test]
    async fn rows_come_back_newest_first() {
        let store = Arc::new(InMemoryMarketplace::new());
        let a = store.add_company("A");
        let b = store.add_company("B");
        let waste = store.add_waste("Cartón", "Kilo", "Papel");

        let auction_old = store.add_auction(a, waste, "Antiguo");
        let offer_old = store.add_offer(auction_old, b, 10.0);
        let auction_new = store.add_auction(a, waste, "Reciente");
        let offer_new = store.add_offer(auction_new, b, 20.0);

        let newest = store.add_purchase_shifted(auction_old, offer_old, Duration::days(2));
        let oldest = store.add_purchase_shifted(auction_new, offer_new, Duration::days(-2));

        let rows = service(&store)
            .find_by_record_type(a, RecordType::Ventas)
            .await
            .unwrap();

        let ids: Vec<i32> = rows.iter().map(|r| r.purchase.id).collect();
        assert_eq!(ids, vec![newest, oldest]);
    }

    #[tokio::test]
    async fn empty_listing_issues_no_count_queries() {
        let store = Arc::new(InMemoryMarketplace::new());
        let a = store.add_company("A");

        let rows = service(&store)
            .find_by_record_type(a, RecordType::Compras)
            .await
            .unwrap();

        assert!(rows.is_empty());
        assert_eq!(store.listing_queries(), 1);
        assert_eq!(store.count_queries(), 0);
    }

    #[tokio::test]
    async fn repeated_calls_return_the_same_rows() {
        let store = Arc::new(InMemoryMarketplace::new());
        let a = store.add_company("A");
        let b = store.add_company("B");
        let waste = store.add_waste("Cartón", "Kilo", "Papel");
        store.add_sale(a, b, waste);
        store.add_sale(b, a, waste);

        let service = service(&store);
        let first = service
            .find_by_record_type(a, RecordType::Ventas)
            .await
            .unwrap();
        let second = service
            .find_by_record_type(a, RecordType::Ventas)
            .await
            .unwrap();

        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }
}
