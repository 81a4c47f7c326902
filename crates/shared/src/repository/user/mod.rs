mod query;

pub use self::query::UserQueryRepository;
