//! In-memory implementation of every repository trait.
//!
//! Mirrors the filtering and ordering of the PostgreSQL repositories so
//! services and routes can be exercised without a database. Enabled for
//! unit tests and behind the `test-utils` feature.

use crate::{
    abstract_trait::{
        purchase::repository::{
            query::PurchaseQueryRepositoryTrait, stats::PurchaseStatsRepositoryTrait,
        },
        user::repository::query::UserQueryRepositoryTrait,
    },
    errors::RepositoryError,
    model::{
        auction::AuctionModel,
        company::{CompanyDetail, CompanyModel},
        offer::OfferModel,
        purchase::{AuctionDetail, OfferDetail, PurchaseDetail, PurchaseModel, WasteDetail},
        user::UserModel,
        waste::{UnitTypeModel, WasteModel, WasteTypeModel},
    },
};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::sync::{
    RwLock, RwLockReadGuard, RwLockWriteGuard,
    atomic::{AtomicUsize, Ordering},
};

const EPOCH_SECS: i64 = 1_700_000_000;

#[derive(Default)]
struct Tables {
    users: Vec<UserModel>,
    companies: Vec<CompanyModel>,
    unit_types: Vec<UnitTypeModel>,
    waste_types: Vec<WasteTypeModel>,
    wastes: Vec<WasteModel>,
    auctions: Vec<AuctionModel>,
    offers: Vec<OfferModel>,
    purchases: Vec<PurchaseModel>,
    clock: i64,
}

impl Tables {
    /// Monotonic timestamps so insertion order is creation order.
    fn tick(&mut self) -> DateTime<Utc> {
        self.clock += 1;
        DateTime::<Utc>::from_timestamp(EPOCH_SECS + self.clock, 0).unwrap_or_default()
    }

    fn company(&self, id: i32) -> Result<&CompanyModel, RepositoryError> {
        self.companies
            .iter()
            .find(|c| c.id == id)
            .ok_or(RepositoryError::NotFound)
    }

    fn activity(&self, company: &CompanyModel) -> CompanyDetail {
        let offers = self
            .offers
            .iter()
            .filter(|o| o.company_buyer_id == company.id)
            .cloned()
            .collect();
        let auctions = self
            .auctions
            .iter()
            .filter(|a| a.company_seller_id == company.id)
            .cloned()
            .collect();

        CompanyDetail::with_activity(company.clone(), offers, auctions)
    }

    fn detail(&self, purchase: &PurchaseModel) -> Result<PurchaseDetail, RepositoryError> {
        let auction = self
            .auctions
            .iter()
            .find(|a| a.id == purchase.auction_id)
            .ok_or(RepositoryError::NotFound)?;
        let offer = self
            .offers
            .iter()
            .find(|o| o.id == purchase.offer_id)
            .ok_or(RepositoryError::NotFound)?;
        let waste = self
            .wastes
            .iter()
            .find(|w| w.id == auction.waste_id)
            .ok_or(RepositoryError::NotFound)?;
        let unit_type = self
            .unit_types
            .iter()
            .find(|u| u.id == waste.unit_type_id)
            .ok_or(RepositoryError::NotFound)?;
        let waste_type = self
            .waste_types
            .iter()
            .find(|t| t.id == waste.waste_type_id)
            .ok_or(RepositoryError::NotFound)?;

        Ok(PurchaseDetail {
            purchase: purchase.clone(),
            auction: AuctionDetail {
                auction: auction.clone(),
                company_seller: CompanyDetail::bare(self.company(auction.company_seller_id)?.clone()),
                waste: WasteDetail {
                    waste: waste.clone(),
                    unit_type: unit_type.clone(),
                    waste_type: waste_type.clone(),
                },
            },
            offer: OfferDetail {
                offer: offer.clone(),
                company_buyer: CompanyDetail::bare(self.company(offer.company_buyer_id)?.clone()),
            },
        })
    }

    fn listing<F>(&self, keep: F) -> Result<Vec<PurchaseDetail>, RepositoryError>
    where
        F: Fn(&PurchaseDetail) -> bool,
    {
        let mut rows = Vec::new();
        for purchase in &self.purchases {
            let detail = self.detail(purchase)?;
            if keep(&detail) {
                rows.push(detail);
            }
        }

        rows.sort_by(|a, b| {
            b.purchase
                .created_at
                .cmp(&a.purchase.created_at)
                .then(b.purchase.id.cmp(&a.purchase.id))
        });

        Ok(rows)
    }
}

#[derive(Default)]
pub struct InMemoryMarketplace {
    tables: RwLock<Tables>,
    listing_queries: AtomicUsize,
    count_queries: AtomicUsize,
}

impl InMemoryMarketplace {
    pub fn new() -> Self {
        Self::default()
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(|e| e.into_inner())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, RepositoryError> {
        self.tables
            .read()
            .map_err(|_| RepositoryError::Custom("in-memory store lock poisoned".to_string()))
    }

    /// Number of purchase listing queries served so far.
    pub fn listing_queries(&self) -> usize {
        self.listing_queries.load(Ordering::SeqCst)
    }

    /// Number of purchase count queries served so far.
    pub fn count_queries(&self) -> usize {
        self.count_queries.load(Ordering::SeqCst)
    }

    pub fn add_company(&self, name: &str) -> i32 {
        let mut tables = self.write();
        let now = tables.tick();
        let id = tables.companies.len() as i32 + 1;
        tables.companies.push(CompanyModel {
            id,
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        });
        id
    }

    pub fn add_user(&self, email: &str, company_id: Option<i32>) -> i32 {
        let mut tables = self.write();
        let now = tables.tick();
        let id = tables.users.len() as i32 + 1;
        tables.users.push(UserModel {
            id,
            email: email.to_string(),
            name: None,
            company_id,
            created_at: now,
            updated_at: now,
        });
        id
    }

    /// Registers a waste together with a fresh unit type and waste type.
    pub fn add_waste(&self, name: &str, unit_type: &str, waste_type: &str) -> i32 {
        let mut tables = self.write();

        let unit_type_id = tables.unit_types.len() as i32 + 1;
        tables.unit_types.push(UnitTypeModel {
            id: unit_type_id,
            name: unit_type.to_string(),
        });

        let waste_type_id = tables.waste_types.len() as i32 + 1;
        tables.waste_types.push(WasteTypeModel {
            id: waste_type_id,
            name: waste_type.to_string(),
        });

        let id = tables.wastes.len() as i32 + 1;
        tables.wastes.push(WasteModel {
            id,
            name: name.to_string(),
            unit_type_id,
            waste_type_id,
        });
        id
    }

    pub fn add_auction(&self, company_seller_id: i32, waste_id: i32, title: &str) -> i32 {
        let mut tables = self.write();
        let now = tables.tick();
        let id = tables.auctions.len() as i32 + 1;
        tables.auctions.push(AuctionModel {
            id,
            title: title.to_string(),
            company_seller_id,
            waste_id,
            volume: 1.0,
            created_at: now,
            updated_at: now,
        });
        id
    }

    pub fn add_offer(&self, auction_id: i32, company_buyer_id: i32, price: f64) -> i32 {
        let mut tables = self.write();
        let now = tables.tick();
        let id = tables.offers.len() as i32 + 1;
        tables.offers.push(OfferModel {
            id,
            auction_id,
            company_buyer_id,
            price,
            created_at: now,
            updated_at: now,
        });
        id
    }

    pub fn add_purchase(&self, auction_id: i32, offer_id: i32) -> i32 {
        let mut tables = self.write();
        let now = tables.tick();
        Self::push_purchase(&mut tables, auction_id, offer_id, now)
    }

    /// Inserts a purchase `offset` away from the store's clock, for ordering checks.
    pub fn add_purchase_shifted(&self, auction_id: i32, offer_id: i32, offset: Duration) -> i32 {
        let mut tables = self.write();
        let at = tables.tick() + offset;
        Self::push_purchase(&mut tables, auction_id, offer_id, at)
    }

    /// Auction from `seller`, offer from `buyer`, and the purchase matching them.
    pub fn add_sale(&self, seller: i32, buyer: i32, waste_id: i32) -> i32 {
        let auction = self.add_auction(seller, waste_id, "Lote");
        let offer = self.add_offer(auction, buyer, 100.0);
        self.add_purchase(auction, offer)
    }

    fn push_purchase(
        tables: &mut Tables,
        auction_id: i32,
        offer_id: i32,
        created_at: DateTime<Utc>,
    ) -> i32 {
        let id = tables.purchases.len() as i32 + 1;
        tables.purchases.push(PurchaseModel {
            id,
            auction_id,
            offer_id,
            created_at,
            updated_at: created_at,
        });
        id
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for InMemoryMarketplace {
    async fn find_by_id(&self, user_id: i32) -> Result<Option<UserModel>, RepositoryError> {
        let tables = self.read()?;
        Ok(tables.users.iter().find(|u| u.id == user_id).cloned())
    }
}

#[async_trait]
impl PurchaseQueryRepositoryTrait for InMemoryMarketplace {
    async fn find_by_seller_company(
        &self,
        company_id: i32,
    ) -> Result<Vec<PurchaseDetail>, RepositoryError> {
        self.listing_queries.fetch_add(1, Ordering::SeqCst);
        let tables = self.read()?;

        let mut rows = tables.listing(|p| p.seller_company_id() == company_id)?;
        for row in &mut rows {
            let buyer = row.offer.company_buyer.company.clone();
            row.offer.company_buyer = tables.activity(&buyer);
        }

        Ok(rows)
    }

    async fn find_by_buyer_company(
        &self,
        company_id: i32,
    ) -> Result<Vec<PurchaseDetail>, RepositoryError> {
        self.listing_queries.fetch_add(1, Ordering::SeqCst);
        let tables = self.read()?;

        let mut rows = tables.listing(|p| p.buyer_company_id() == company_id)?;
        for row in &mut rows {
            let seller = row.auction.company_seller.company.clone();
            row.auction.company_seller = tables.activity(&seller);
        }

        Ok(rows)
    }
}

#[async_trait]
impl PurchaseStatsRepositoryTrait for InMemoryMarketplace {
    async fn count_sales_by_company(&self, company_id: i32) -> Result<i64, RepositoryError> {
        self.count_queries.fetch_add(1, Ordering::SeqCst);
        let tables = self.read()?;

        let total = tables
            .purchases
            .iter()
            .filter_map(|p| tables.auctions.iter().find(|a| a.id == p.auction_id))
            .filter(|a| a.company_seller_id == company_id)
            .count();

        Ok(total as i64)
    }

    async fn count_purchases_by_company(&self, company_id: i32) -> Result<i64, RepositoryError> {
        self.count_queries.fetch_add(1, Ordering::SeqCst);
        let tables = self.read()?;

        let total = tables
            .purchases
            .iter()
            .filter_map(|p| tables.offers.iter().find(|o| o.id == p.offer_id))
            .filter(|o| o.company_buyer_id == company_id)
            .count();

        Ok(total as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn listings_are_newest_first_and_filtered_by_side() {
        let store = InMemoryMarketplace::new();
        let seller = store.add_company("Reciclados Sur");
        let buyer = store.add_company("Metales Norte");
        let waste = store.add_waste("Chatarra", "Tonelada", "Metal");

        let first = store.add_sale(seller, buyer, waste);
        let second = store.add_sale(seller, buyer, waste);
        store.add_sale(buyer, seller, waste);

        let sales = store.find_by_seller_company(seller).await.unwrap();
        let ids: Vec<i32> = sales.iter().map(|p| p.purchase.id).collect();

        assert_eq!(ids, vec![second, first]);
        assert!(sales.iter().all(|p| p.seller_company_id() == seller));
        assert!(sales[0].offer.company_buyer.offers.is_some());
        assert!(sales[0].auction.company_seller.offers.is_none());
        assert_eq!(store.listing_queries(), 1);
    }

    #[tokio::test]
    async fn counts_follow_each_side_of_the_purchase() {
        let store = InMemoryMarketplace::new();
        let a = store.add_company("A");
        let b = store.add_company("B");
        let waste = store.add_waste("Cartón", "Kilo", "Papel");

        store.add_sale(a, b, waste);
        store.add_sale(a, b, waste);
        store.add_sale(b, a, waste);

        assert_eq!(store.count_sales_by_company(a).await.unwrap(), 2);
        assert_eq!(store.count_purchases_by_company(a).await.unwrap(), 1);
        assert_eq!(store.count_sales_by_company(b).await.unwrap(), 1);
        assert_eq!(store.count_purchases_by_company(b).await.unwrap(), 2);
        assert_eq!(store.count_queries(), 4);
    }
}
