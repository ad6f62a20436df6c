// src/handlers/invoices.rs
// Todas estas rutas van detrás de auth_guard + admin_guard en el router.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    common::{error::AppError, response::ApiResponse},
    config::AppState,
    handlers::descarga_json,
    models::invoices::{CreateFacturaPayload, EstadoFactura, Factura, FiltroFacturas},
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CambioEstadoFacturaPayload {
    pub estado: EstadoFactura,
}

// GET /api/invoices
#[utoipa::path(
    get,
    path = "/api/invoices",
    tag = "Invoices",
    params(FiltroFacturas),
    responses((status = 200, description = "Listado de facturas", body = Vec<Factura>)),
    security(("api_jwt" = []))
)]
pub async fn list(
    State(app_state): State<AppState>,
    Query(filtro): Query<FiltroFacturas>,
) -> Result<impl IntoResponse, AppError> {
    let facturas = app_state
        .invoices_service
        .list(filtro.buscar.as_deref(), filtro.estado)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(facturas))))
}

// GET /api/invoices/export
#[utoipa::path(
    get,
    path = "/api/invoices/export",
    tag = "Invoices",
    params(FiltroFacturas),
    responses((status = 200, description = "Descarga JSON del listado filtrado")),
    security(("api_jwt" = []))
)]
pub async fn export(
    State(app_state): State<AppState>,
    Query(filtro): Query<FiltroFacturas>,
) -> Result<Response, AppError> {
    let facturas = app_state
        .invoices_service
        .list(filtro.buscar.as_deref(), filtro.estado)
        .await?;

    descarga_json("facturas", &facturas)
}

// POST /api/invoices
#[utoipa::path(
    post,
    path = "/api/invoices",
    tag = "Invoices",
    request_body = CreateFacturaPayload,
    responses(
        (status = 201, description = "Factura emitida a partir del pedido", body = Factura),
        (status = 404, description = "El pedido no existe")
    ),
    security(("api_jwt" = []))
)]
pub async fn create(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateFacturaPayload>,
) -> Result<impl IntoResponse, AppError> {
    let factura = app_state.invoices_service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(factura))))
}

// GET /api/invoices/{id}
#[utoipa::path(
    get,
    path = "/api/invoices/{id}",
    tag = "Invoices",
    params(("id" = Uuid, Path, description = "ID de la factura")),
    responses(
        (status = 200, description = "Detalle de la factura", body = Factura),
        (status = 404, description = "No existe")
    ),
    security(("api_jwt" = []))
)]
pub async fn get(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let factura = app_state.invoices_service.get(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(factura))))
}

// PUT /api/invoices/{id}/status
#[utoipa::path(
    put,
    path = "/api/invoices/{id}/status",
    tag = "Invoices",
    params(("id" = Uuid, Path, description = "ID de la factura")),
    request_body = CambioEstadoFacturaPayload,
    responses((status = 200, description = "Estado actualizado", body = Factura)),
    security(("api_jwt" = []))
)]
pub async fn update_status(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CambioEstadoFacturaPayload>,
) -> Result<impl IntoResponse, AppError> {
    let factura = app_state
        .invoices_service
        .cambiar_estado(id, payload.estado)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(factura))))
}
