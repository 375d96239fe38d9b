use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::health::HealthDto,
    server::{service::health::HealthService, state::AppState},
};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Report service and database health.
///
/// Always answers 200; a failed database ping is reported as `degraded`.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Health report", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let report = HealthService::new(&state.db).check().await;

    (StatusCode::OK, Json(report))
}
