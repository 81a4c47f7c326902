use crate::errors::ServiceError;
use chrono::Duration;
use std::sync::Arc;

pub type DynJwtService = Arc<dyn JwtServiceTrait + Send + Sync>;

pub trait JwtServiceTrait {
    /// Mints a session token for `user_id`, for token issuers and tests.
    fn generate_token(&self, user_id: i32, ttl: Duration) -> Result<String, ServiceError>;

    /// Verifies signature and expiry and returns the numeric subject.
    fn verify_token(&self, token: &str) -> Result<i32, ServiceError>;
}
