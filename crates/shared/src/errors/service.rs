use crate::errors::{repository::RepositoryError, validate::ValidationIssue};
use jsonwebtoken::errors::Error as JwtError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("Unauthorized{}", unauthorized_suffix(.0))]
    Unauthorized(Option<String>),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<ValidationIssue>),

    #[error("JWT error: {0}")]
    Jwt(#[from] JwtError),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

fn unauthorized_suffix(reason: &Option<String>) -> String {
    reason
        .as_deref()
        .map(|msg| format!(": {msg}"))
        .unwrap_or_default()
}
