pub mod auth;
pub mod company;
pub mod jwt;
pub mod purchase;
pub mod user;
