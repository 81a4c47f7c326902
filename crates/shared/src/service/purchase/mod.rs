mod query;

pub use self::query::PurchaseQueryService;
