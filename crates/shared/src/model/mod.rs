pub mod auction;
pub mod company;
pub mod offer;
pub mod purchase;
pub mod user;
pub mod waste;
