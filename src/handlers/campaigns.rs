// src/handlers/campaigns.rs
// Campañas de e-mail del panel de marketing. Todo el módulo va detrás de
// auth_guard + admin_guard en el router.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::{error::AppError, response::ApiResponse},
    config::AppState,
    handlers::descarga_json,
    models::campaigns::{
        Campana, CreateCampanaPayload, FiltroCampanas, UpdateCampanaPayload,
    },
};

// GET /api/campaigns
#[utoipa::path(
    get,
    path = "/api/campaigns",
    tag = "Campaigns",
    params(FiltroCampanas),
    responses((status = 200, description = "Listado de campañas", body = Vec<Campana>)),
    security(("api_jwt" = []))
)]
pub async fn list(
    State(app_state): State<AppState>,
    Query(filtro): Query<FiltroCampanas>,
) -> Result<impl IntoResponse, AppError> {
    let campanas = app_state
        .campaigns_service
        .list(filtro.buscar.as_deref(), filtro.estado, filtro.tipo.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(campanas))))
}

// GET /api/campaigns/export
#[utoipa::path(
    get,
    path = "/api/campaigns/export",
    tag = "Campaigns",
    params(FiltroCampanas),
    responses((status = 200, description = "Descarga JSON del listado filtrado")),
    security(("api_jwt" = []))
)]
pub async fn export(
    State(app_state): State<AppState>,
    Query(filtro): Query<FiltroCampanas>,
) -> Result<Response, AppError> {
    let campanas = app_state
        .campaigns_service
        .list(filtro.buscar.as_deref(), filtro.estado, filtro.tipo.as_deref())
        .await?;

    descarga_json("campanas", &campanas)
}

// POST /api/campaigns
#[utoipa::path(
    post,
    path = "/api/campaigns",
    tag = "Campaigns",
    request_body = CreateCampanaPayload,
    responses((status = 201, description = "Campaña creada en borrador", body = Campana)),
    security(("api_jwt" = []))
)]
pub async fn create(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateCampanaPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let campana = app_state.campaigns_service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(campana))))
}

// GET /api/campaigns/{id}
#[utoipa::path(
    get,
    path = "/api/campaigns/{id}",
    tag = "Campaigns",
    params(("id" = Uuid, Path, description = "ID de la campaña")),
    responses(
        (status = 200, description = "Detalle de la campaña", body = Campana),
        (status = 404, description = "No existe")
    ),
    security(("api_jwt" = []))
)]
pub async fn get(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let campana = app_state.campaigns_service.get(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(campana))))
}

// PUT /api/campaigns/{id}
#[utoipa::path(
    put,
    path = "/api/campaigns/{id}",
    tag = "Campaigns",
    params(("id" = Uuid, Path, description = "ID de la campaña")),
    request_body = UpdateCampanaPayload,
    responses((status = 200, description = "Campaña actualizada", body = Campana)),
    security(("api_jwt" = []))
)]
pub async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCampanaPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let campana = app_state.campaigns_service.update(id, payload).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(campana))))
}

// POST /api/campaigns/{id}/send
#[utoipa::path(
    post,
    path = "/api/campaigns/{id}/send",
    tag = "Campaigns",
    params(("id" = Uuid, Path, description = "ID de la campaña")),
    responses(
        (status = 200, description = "Campaña enviada", body = Campana),
        (status = 422, description = "El estado actual no permite el envío")
    ),
    security(("api_jwt" = []))
)]
pub async fn send(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let campana = app_state.campaigns_service.enviar(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(campana))))
}

// DELETE /api/campaigns/{id}
#[utoipa::path(
    delete,
    path = "/api/campaigns/{id}",
    tag = "Campaigns",
    params(("id" = Uuid, Path, description = "ID de la campaña")),
    responses(
        (status = 200, description = "Campaña eliminada"),
        (status = 404, description = "No existe")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.campaigns_service.delete(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(()))))
}
