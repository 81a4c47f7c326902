mod stats;

pub use self::stats::CompanyStatsService;
