use crate::{
    abstract_trait::{
        auth::AuthServiceTrait, user::repository::query::DynUserQueryRepository,
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::{info, warn};

pub const NO_COMPANY_MESSAGE: &str = "No pertenece a ninguna empresa";

pub struct AuthService {
    user_query: DynUserQueryRepository,
}

impl AuthService {
    pub fn new(user_query: DynUserQueryRepository) -> Self {
        Self { user_query }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn company_for_user(&self, user_id: i32) -> Result<i32, ServiceError> {
        let Some(user) = self.user_query.find_by_id(user_id).await? else {
            warn!("🔐 Token subject {user_id} does not match any user");
            return Err(ServiceError::Unauthorized(None));
        };

        let Some(company_id) = user.company_id else {
            warn!("🏢 User {user_id} does not belong to any company");
            return Err(ServiceError::Unauthorized(Some(
                NO_COMPANY_MESSAGE.to_string(),
            )));
        };

        info!("✅ User {user_id} acts for company {company_id}");

        Ok(company_id)
    }
}
