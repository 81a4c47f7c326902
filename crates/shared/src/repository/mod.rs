pub mod purchase;
pub mod user;

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
