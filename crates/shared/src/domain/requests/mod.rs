mod purchase;

pub use self::purchase::{FindPurchasesRequest, RecordType};
