use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

pub const INTERNAL_ERROR_MESSAGE: &str = "internal error";

#[derive(Debug)]
pub struct AppErrorHttp(pub ServiceError);

impl IntoResponse for AppErrorHttp {
    fn into_response(self) -> Response {
        let (status, body) = match self.0 {
            ServiceError::Unauthorized(reason) => {
                warn!("🔐 Unauthorized request: {reason:?}");
                (
                    StatusCode::UNAUTHORIZED,
                    ErrorResponse::message(reason.unwrap_or_else(|| "Unauthorized".to_string())),
                )
            }
            ServiceError::Jwt(err) => {
                warn!("🎫 JWT rejected: {err}");
                (
                    StatusCode::UNAUTHORIZED,
                    ErrorResponse::message("Unauthorized"),
                )
            }
            ServiceError::Validation(issues) => {
                warn!("📝 Validation failed: {issues:?}");
                let error = serde_json::to_value(&issues).unwrap_or_default();
                (StatusCode::BAD_REQUEST, ErrorResponse { error })
            }
            ServiceError::Repo(repo_err) => {
                match &repo_err {
                    RepositoryError::Sqlx(err) => error!("💾 Database error: {err}"),
                    RepositoryError::NotFound => error!("🔍 Resource unexpectedly missing"),
                    RepositoryError::Custom(msg) => error!("⚙️ Custom repository error: {msg}"),
                }
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::message(INTERNAL_ERROR_MESSAGE),
                )
            }
            ServiceError::InternalServerError(msg) => {
                error!("🔥 Internal server error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::message(INTERNAL_ERROR_MESSAGE),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for AppErrorHttp {
    fn from(error: ServiceError) -> Self {
        AppErrorHttp(error)
    }
}

impl From<RepositoryError> for AppErrorHttp {
    fn from(error: RepositoryError) -> Self {
        AppErrorHttp(ServiceError::Repo(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationIssue;

    #[test]
    fn maps_each_service_error_to_its_status() {
        let cases = vec![
            (ServiceError::Unauthorized(None), StatusCode::UNAUTHORIZED),
            (
                ServiceError::Unauthorized(Some("No pertenece a ninguna empresa".into())),
                StatusCode::UNAUTHORIZED,
            ),
            (
                ServiceError::Validation(vec![ValidationIssue {
                    code: "invalid_type".into(),
                    path: vec!["recordType".into()],
                    message: "Required".into(),
                    options: vec![],
                    expected: Some("'Ventas' | 'Compras'".into()),
                    received: None,
                }]),
                StatusCode::BAD_REQUEST,
            ),
            (
                ServiceError::Repo(RepositoryError::Custom("boom".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ServiceError::InternalServerError("no rows".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            let response = AppErrorHttp(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }
}
