use crate::errors::ServiceError;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynAuthService = Arc<dyn AuthServiceTrait + Send + Sync>;

#[async_trait]
pub trait AuthServiceTrait {
    /// Resolves the company the authenticated user belongs to.
    async fn company_for_user(&self, user_id: i32) -> Result<i32, ServiceError>;
}
