use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every non-2xx response: `{ "error": ... }`.
///
/// The payload is a plain message for authorization and internal failures
/// and the list of validation issues for rejected query parameters.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(value_type = Object)]
    pub error: serde_json::Value,
}

impl ErrorResponse {
    pub fn message(msg: impl Into<String>) -> Self {
        Self {
            error: serde_json::Value::String(msg.into()),
        }
    }
}
