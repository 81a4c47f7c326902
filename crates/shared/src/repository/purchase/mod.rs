mod query;
mod stats;

pub use self::query::PurchaseQueryRepository;
pub use self::stats::PurchaseStatsRepository;
