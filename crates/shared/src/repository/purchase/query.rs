use crate::{
    abstract_trait::purchase::repository::query::PurchaseQueryRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{
        auction::AuctionModel,
        offer::OfferModel,
        purchase::{PurchaseDetail, PurchaseRow},
    },
};
use async_trait::async_trait;
use sqlx::{PgConnection, pool::PoolConnection};
use std::collections::{BTreeSet, HashMap};
use tracing::{error, info};

const PURCHASE_LISTING_SELECT: &str = r#"
    SELECT
        p.id AS purchase_id,
        p.auction_id,
        p.offer_id,
        p.created_at AS purchase_created_at,
        p.updated_at AS purchase_updated_at,
        a.title AS auction_title,
        a.company_seller_id,
        a.waste_id,
        a.volume AS auction_volume,
        a.created_at AS auction_created_at,
        a.updated_at AS auction_updated_at,
        o.company_buyer_id,
        o.price AS offer_price,
        o.created_at AS offer_created_at,
        o.updated_at AS offer_updated_at,
        s.name AS seller_name,
        s.created_at AS seller_created_at,
        s.updated_at AS seller_updated_at,
        b.name AS buyer_name,
        b.created_at AS buyer_created_at,
        b.updated_at AS buyer_updated_at,
        w.name AS waste_name,
        w.unit_type_id,
        w.waste_type_id,
        ut.name AS unit_type_name,
        wt.name AS waste_type_name
    FROM purchases p
    JOIN auctions a ON a.id = p.auction_id
    JOIN offers o ON o.id = p.offer_id
    JOIN companies s ON s.id = a.company_seller_id
    JOIN companies b ON b.id = o.company_buyer_id
    JOIN wastes w ON w.id = a.waste_id
    JOIN unit_types ut ON ut.id = w.unit_type_id
    JOIN waste_types wt ON wt.id = w.waste_type_id
"#;

const PURCHASE_LISTING_ORDER: &str = "ORDER BY p.created_at DESC, p.id DESC";

/// Offers and auctions of a set of companies, keyed by company id.
#[derive(Default)]
struct CompanyActivity {
    offers: HashMap<i32, Vec<OfferModel>>,
    auctions: HashMap<i32, Vec<AuctionModel>>,
}

impl CompanyActivity {
    fn offers_of(&self, company_id: i32) -> Vec<OfferModel> {
        self.offers.get(&company_id).cloned().unwrap_or_default()
    }

    fn auctions_of(&self, company_id: i32) -> Vec<AuctionModel> {
        self.auctions.get(&company_id).cloned().unwrap_or_default()
    }
}

#[derive(Clone)]
pub struct PurchaseQueryRepository {
    db: ConnectionPool,
}

impl PurchaseQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn get_conn(&self) -> Result<PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn fetch_rows(
        conn: &mut PgConnection,
        filter: &str,
        company_id: i32,
    ) -> Result<Vec<PurchaseDetail>, RepositoryError> {
        let sql = format!("{PURCHASE_LISTING_SELECT} WHERE {filter} = $1 {PURCHASE_LISTING_ORDER}");

        let rows = sqlx::query_as::<_, PurchaseRow>(&sql)
            .bind(company_id)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error listing purchases by {filter}: {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        Ok(rows.into_iter().map(PurchaseDetail::from).collect())
    }

    async fn fetch_activity(
        conn: &mut PgConnection,
        company_ids: Vec<i32>,
    ) -> Result<CompanyActivity, RepositoryError> {
        let mut activity = CompanyActivity::default();

        if company_ids.is_empty() {
            return Ok(activity);
        }

        let offers = sqlx::query_as::<_, OfferModel>(
            r#"
            SELECT id, auction_id, company_buyer_id, price, created_at, updated_at
            FROM offers
            WHERE company_buyer_id = ANY($1)
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(&company_ids)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error loading company offers: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        let auctions = sqlx::query_as::<_, AuctionModel>(
            r#"
            SELECT id, title, company_seller_id, waste_id, volume, created_at, updated_at
            FROM auctions
            WHERE company_seller_id = ANY($1)
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(&company_ids)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error loading company auctions: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        for offer in offers {
            activity
                .offers
                .entry(offer.company_buyer_id)
                .or_default()
                .push(offer);
        }

        for auction in auctions {
            activity
                .auctions
                .entry(auction.company_seller_id)
                .or_default()
                .push(auction);
        }

        Ok(activity)
    }
}

#[async_trait]
impl PurchaseQueryRepositoryTrait for PurchaseQueryRepository {
    async fn find_by_seller_company(
        &self,
        company_id: i32,
    ) -> Result<Vec<PurchaseDetail>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let mut purchases = Self::fetch_rows(&mut conn, "a.company_seller_id", company_id).await?;

        let buyer_ids: BTreeSet<i32> = purchases.iter().map(|p| p.buyer_company_id()).collect();
        let activity = Self::fetch_activity(&mut conn, buyer_ids.into_iter().collect()).await?;

        for purchase in &mut purchases {
            let buyer = &mut purchase.offer.company_buyer;
            buyer.offers = Some(activity.offers_of(buyer.company.id));
            buyer.auctions = Some(activity.auctions_of(buyer.company.id));
        }

        info!(
            "✅ Loaded {} sales for company {company_id}",
            purchases.len()
        );

        Ok(purchases)
    }

    async fn find_by_buyer_company(
        &self,
        company_id: i32,
    ) -> Result<Vec<PurchaseDetail>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let mut purchases = Self::fetch_rows(&mut conn, "o.company_buyer_id", company_id).await?;

        let seller_ids: BTreeSet<i32> = purchases.iter().map(|p| p.seller_company_id()).collect();
        let activity = Self::fetch_activity(&mut conn, seller_ids.into_iter().collect()).await?;

        for purchase in &mut purchases {
            let seller = &mut purchase.auction.company_seller;
            seller.offers = Some(activity.offers_of(seller.company.id));
            seller.auctions = Some(activity.auctions_of(seller.company.id));
        }

        info!(
            "✅ Loaded {} purchases for company {company_id}",
            purchases.len()
        );

        Ok(purchases)
    }
}
