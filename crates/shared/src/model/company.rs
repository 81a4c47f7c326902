use crate::model::{auction::AuctionModel, offer::OfferModel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyModel {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A company with its activity collections.
///
/// `offers` and `auctions` are `Some` only when the query eager-loaded them,
/// which the listing does for the counterparty side of each purchase.
#[derive(Debug, Clone)]
pub struct CompanyDetail {
    pub company: CompanyModel,
    pub offers: Option<Vec<OfferModel>>,
    pub auctions: Option<Vec<AuctionModel>>,
}

impl CompanyDetail {
    pub fn bare(company: CompanyModel) -> Self {
        Self {
            company,
            offers: None,
            auctions: None,
        }
    }

    pub fn with_activity(
        company: CompanyModel,
        offers: Vec<OfferModel>,
        auctions: Vec<AuctionModel>,
    ) -> Self {
        Self {
            company,
            offers: Some(offers),
            auctions: Some(auctions),
        }
    }
}
