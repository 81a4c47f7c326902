use crate::model::{
    auction::AuctionModel,
    company::{CompanyDetail, CompanyModel},
    offer::OfferModel,
    waste::{UnitTypeModel, WasteModel, WasteTypeModel},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseModel {
    pub id: i32,
    pub auction_id: i32,
    pub offer_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One row of the purchase listing join: a purchase with its auction, offer,
/// both companies and the auctioned waste, flattened.
#[derive(Debug, Clone, FromRow)]
pub struct PurchaseRow {
    pub purchase_id: i32,
    pub auction_id: i32,
    pub offer_id: i32,
    pub purchase_created_at: DateTime<Utc>,
    pub purchase_updated_at: DateTime<Utc>,

    pub auction_title: String,
    pub company_seller_id: i32,
    pub waste_id: i32,
    pub auction_volume: f64,
    pub auction_created_at: DateTime<Utc>,
    pub auction_updated_at: DateTime<Utc>,

    pub company_buyer_id: i32,
    pub offer_price: f64,
    pub offer_created_at: DateTime<Utc>,
    pub offer_updated_at: DateTime<Utc>,

    pub seller_name: String,
    pub seller_created_at: DateTime<Utc>,
    pub seller_updated_at: DateTime<Utc>,

    pub buyer_name: String,
    pub buyer_created_at: DateTime<Utc>,
    pub buyer_updated_at: DateTime<Utc>,

    pub waste_name: String,
    pub unit_type_id: i32,
    pub waste_type_id: i32,
    pub unit_type_name: String,
    pub waste_type_name: String,
}

#[derive(Debug, Clone)]
pub struct WasteDetail {
    pub waste: WasteModel,
    pub unit_type: UnitTypeModel,
    pub waste_type: WasteTypeModel,
}

#[derive(Debug, Clone)]
pub struct AuctionDetail {
    pub auction: AuctionModel,
    pub company_seller: CompanyDetail,
    pub waste: WasteDetail,
}

#[derive(Debug, Clone)]
pub struct OfferDetail {
    pub offer: OfferModel,
    pub company_buyer: CompanyDetail,
}

/// A purchase with its auction and offer populated. Both sides always exist.
#[derive(Debug, Clone)]
pub struct PurchaseDetail {
    pub purchase: PurchaseModel,
    pub auction: AuctionDetail,
    pub offer: OfferDetail,
}

impl PurchaseDetail {
    pub fn seller_company_id(&self) -> i32 {
        self.auction.auction.company_seller_id
    }

    pub fn buyer_company_id(&self) -> i32 {
        self.offer.offer.company_buyer_id
    }
}

impl From<PurchaseRow> for PurchaseDetail {
    fn from(row: PurchaseRow) -> Self {
        let purchase = PurchaseModel {
            id: row.purchase_id,
            auction_id: row.auction_id,
            offer_id: row.offer_id,
            created_at: row.purchase_created_at,
            updated_at: row.purchase_updated_at,
        };

        let auction = AuctionModel {
            id: row.auction_id,
            title: row.auction_title,
            company_seller_id: row.company_seller_id,
            waste_id: row.waste_id,
            volume: row.auction_volume,
            created_at: row.auction_created_at,
            updated_at: row.auction_updated_at,
        };

        let offer = OfferModel {
            id: row.offer_id,
            auction_id: row.auction_id,
            company_buyer_id: row.company_buyer_id,
            price: row.offer_price,
            created_at: row.offer_created_at,
            updated_at: row.offer_updated_at,
        };

        let seller = CompanyModel {
            id: row.company_seller_id,
            name: row.seller_name,
            created_at: row.seller_created_at,
            updated_at: row.seller_updated_at,
        };

        let buyer = CompanyModel {
            id: row.company_buyer_id,
            name: row.buyer_name,
            created_at: row.buyer_created_at,
            updated_at: row.buyer_updated_at,
        };

        let waste = WasteDetail {
            waste: WasteModel {
                id: row.waste_id,
                name: row.waste_name,
                unit_type_id: row.unit_type_id,
                waste_type_id: row.waste_type_id,
            },
            unit_type: UnitTypeModel {
                id: row.unit_type_id,
                name: row.unit_type_name,
            },
            waste_type: WasteTypeModel {
                id: row.waste_type_id,
                name: row.waste_type_name,
            },
        };

        PurchaseDetail {
            purchase,
            auction: AuctionDetail {
                auction,
                company_seller: CompanyDetail::bare(seller),
                waste,
            },
            offer: OfferDetail {
                offer,
                company_buyer: CompanyDetail::bare(buyer),
            },
        }
    }
}
