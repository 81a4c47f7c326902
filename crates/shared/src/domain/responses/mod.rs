mod purchase;

pub use self::purchase::{
    AuctionResponse, CompanyResponse, OfferResponse, PurchaseCounts, PurchaseResponse,
    PurchaseWithCountsResponse, WasteResponse,
};
