use crate::model::{
    auction::AuctionModel,
    company::CompanyDetail,
    offer::OfferModel,
    purchase::{AuctionDetail, OfferDetail, PurchaseDetail, WasteDetail},
    waste::{UnitTypeModel, WasteTypeModel},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyResponse {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offers: Option<Vec<OfferModel>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auctions: Option<Vec<AuctionModel>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WasteResponse {
    pub id: i32,
    pub name: String,
    pub unit_type_id: i32,
    pub waste_type_id: i32,
    pub unit_type: UnitTypeModel,
    pub waste_type: WasteTypeModel,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuctionResponse {
    pub id: i32,
    pub title: String,
    pub company_seller_id: i32,
    pub waste_id: i32,
    pub volume: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub company_seller: CompanyResponse,
    pub waste: WasteResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OfferResponse {
    pub id: i32,
    pub auction_id: i32,
    pub company_buyer_id: i32,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub company_buyer: CompanyResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseResponse {
    pub id: i32,
    pub auction_id: i32,
    pub offer_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub auction: AuctionResponse,
    pub offer: OfferResponse,
}

/// Activity totals of the counterparty company of a listed purchase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseCounts {
    pub count_offers: i64,
    pub count_sales: i64,
    pub count_purchases: i64,
    pub count_auctions: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PurchaseWithCountsResponse {
    #[serde(flatten)]
    pub purchase: PurchaseResponse,
    pub counts: PurchaseCounts,
}

// model to response
impl From<CompanyDetail> for CompanyResponse {
    fn from(value: CompanyDetail) -> Self {
        CompanyResponse {
            id: value.company.id,
            name: value.company.name,
            created_at: value.company.created_at,
            updated_at: value.company.updated_at,
            offers: value.offers,
            auctions: value.auctions,
        }
    }
}

impl From<WasteDetail> for WasteResponse {
    fn from(value: WasteDetail) -> Self {
        WasteResponse {
            id: value.waste.id,
            name: value.waste.name,
            unit_type_id: value.waste.unit_type_id,
            waste_type_id: value.waste.waste_type_id,
            unit_type: value.unit_type,
            waste_type: value.waste_type,
        }
    }
}

impl From<AuctionDetail> for AuctionResponse {
    fn from(value: AuctionDetail) -> Self {
        AuctionResponse {
            id: value.auction.id,
            title: value.auction.title,
            company_seller_id: value.auction.company_seller_id,
            waste_id: value.auction.waste_id,
            volume: value.auction.volume,
            created_at: value.auction.created_at,
            updated_at: value.auction.updated_at,
            company_seller: CompanyResponse::from(value.company_seller),
            waste: WasteResponse::from(value.waste),
        }
    }
}

impl From<OfferDetail> for OfferResponse {
    fn from(value: OfferDetail) -> Self {
        OfferResponse {
            id: value.offer.id,
            auction_id: value.offer.auction_id,
            company_buyer_id: value.offer.company_buyer_id,
            price: value.offer.price,
            created_at: value.offer.created_at,
            updated_at: value.offer.updated_at,
            company_buyer: CompanyResponse::from(value.company_buyer),
        }
    }
}

impl From<PurchaseDetail> for PurchaseResponse {
    fn from(value: PurchaseDetail) -> Self {
        PurchaseResponse {
            id: value.purchase.id,
            auction_id: value.purchase.auction_id,
            offer_id: value.purchase.offer_id,
            created_at: value.purchase.created_at,
            updated_at: value.purchase.updated_at,
            auction: AuctionResponse::from(value.auction),
            offer: OfferResponse::from(value.offer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_serialize_with_client_field_names() {
        let counts = PurchaseCounts {
            count_offers: 3,
            count_sales: 2,
            count_purchases: 1,
            count_auctions: 4,
        };

        assert_eq!(
            serde_json::to_value(counts).unwrap(),
            serde_json::json!({
                "countOffers": 3,
                "countSales": 2,
                "countPurchases": 1,
                "countAuctions": 4,
            })
        );
    }
}
