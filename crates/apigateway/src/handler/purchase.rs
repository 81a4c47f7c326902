use crate::{middleware::jwt, state::AppState};
use axum::{
    Json,
    extract::{Extension, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::{auth::DynAuthService, purchase::service::query::DynPurchaseQueryService},
    domain::{requests::FindPurchasesRequest, responses::PurchaseWithCountsResponse},
    errors::{AppErrorHttp, ErrorResponse},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/purchases/list",
    tag = "Purchase",
    security(("bearer_auth" = [])),
    params(FindPurchasesRequest),
    responses(
        (status = 200, description = "Purchases of the caller's company, newest first, with counterparty counts", body = Vec<PurchaseWithCountsResponse>),
        (status = 400, description = "Missing or invalid recordType", body = ErrorResponse),
        (status = 401, description = "Unauthorized or no company", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_purchases(
    Extension(auth): Extension<DynAuthService>,
    Extension(service): Extension<DynPurchaseQueryService>,
    Extension(user_id): Extension<i32>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    // The company check runs before the query string is looked at.
    let company_id = auth.company_for_user(user_id).await?;

    let record_type = FindPurchasesRequest::from_query_pairs(pairs).record_type()?;

    let response = service.find_by_record_type(company_id, record_type).await?;

    Ok((StatusCode::OK, Json(response)))
}

pub fn purchase_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/purchases/list", get(list_purchases))
        .route_layer(middleware::from_fn(jwt::auth))
        .layer(Extension(app_state.di_container.auth_service.clone()))
        .layer(Extension(
            app_state.di_container.purchase_query_service.clone(),
        ))
        .layer(Extension(app_state.jwt_config.clone()))
}
