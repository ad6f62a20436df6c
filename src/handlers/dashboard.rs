// src/handlers/dashboard.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::{error::AppError, response::ApiResponse},
    config::AppState,
    models::dashboard::ResumenDashboard,
};

// GET /api/dashboard/summary
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    tag = "Dashboard",
    responses((status = 200, description = "Contadores del panel", body = ResumenDashboard)),
    security(("api_jwt" = []))
)]
pub async fn summary(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let resumen = app_state.dashboard_repo.resumen().await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(resumen))))
}
