// src/handlers/payments.rs

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
    middleware::auth::{requiere_admin, requiere_interno, AuthenticatedUser},
    models::payments::{CambioEstadoPagoPayload, CreatePagoPayload, FiltroPagos, Pago},
};

// GET /api/payments
// El panel ve todos los pagos; un cliente, los de sus pedidos.
#[utoipa::path(
    get,
    path = "/api/payments",
    tag = "Payments",
    params(FiltroPagos),
    responses((status = 200, description = "Listado de pagos", body = Vec<Pago>)),
    security(("api_jwt" = []))
)]
pub async fn list(
    State(app_state): State<AppState>,
    AuthenticatedUser(usuario): AuthenticatedUser,
    Query(filtro): Query<FiltroPagos>,
) -> Result<Response, AppError> {
    let pagos = if usuario.rol.es_interno() {
        app_state
            .payments_service
            .list(filtro.buscar.as_deref(), filtro.estado, filtro.pedido_id)
            .await?
    } else {
        app_state.payments_service.list_por_cliente(usuario.id).await?
    };

    Ok((StatusCode::OK, Json(ApiResponse::ok(pagos))).into_response())
}

// GET /api/payments/export
#[utoipa::path(
    get,
    path = "/api/payments/export",
    tag = "Payments",
    params(FiltroPagos),
    responses((status = 200, description = "Descarga JSON del listado filtrado")),
    security(("api_jwt" = []))
)]
pub async fn export(
    State(app_state): State<AppState>,
    AuthenticatedUser(usuario): AuthenticatedUser,
    Query(filtro): Query<FiltroPagos>,
) -> Result<Response, AppError> {
    requiere_interno(&usuario)?;

    let pagos = app_state
        .payments_service
        .list(filtro.buscar.as_deref(), filtro.estado, filtro.pedido_id)
        .await?;

    descarga_json("pagos", &pagos)
}

// POST /api/payments
#[utoipa::path(
    post,
    path = "/api/payments",
    tag = "Payments",
    request_body = CreatePagoPayload,
    responses(
        (status = 201, description = "Pago registrado", body = Pago),
        (status = 404, description = "El pedido no existe")
    ),
    security(("api_jwt" = []))
)]
pub async fn create(
    State(app_state): State<AppState>,
    AuthenticatedUser(usuario): AuthenticatedUser,
    Json(payload): Json<CreatePagoPayload>,
) -> Result<impl IntoResponse, AppError> {
    requiere_admin(&usuario)?;
    payload.validate()?;

    let pago = app_state.payments_service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(pago))))
}

// GET /api/payments/{id}
#[utoipa::path(
    get,
    path = "/api/payments/{id}",
    tag = "Payments",
    params(("id" = Uuid, Path, description = "ID del pago")),
    responses(
        (status = 200, description = "Detalle del pago", body = Pago),
        (status = 404, description = "No existe")
    ),
    security(("api_jwt" = []))
)]
pub async fn get(
    State(app_state): State<AppState>,
    AuthenticatedUser(usuario): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let pago = app_state.payments_service.get(id).await?;

    // Un cliente solo puede ver pagos de sus propios pedidos
    if !usuario.rol.es_interno() {
        let pedido = app_state.orders_service.get(pago.pedido_id).await?;
        if pedido.cliente_id != usuario.id {
            return Err(AppError::AccesoDenegado);
        }
    }

    Ok((StatusCode::OK, Json(ApiResponse::ok(pago))))
}

// PUT /api/payments/{id}/status
#[utoipa::path(
    put,
    path = "/api/payments/{id}/status",
    tag = "Payments",
    params(("id" = Uuid, Path, description = "ID del pago")),
    request_body = CambioEstadoPagoPayload,
    responses((status = 200, description = "Estado actualizado", body = Pago)),
    security(("api_jwt" = []))
)]
pub async fn update_status(
    State(app_state): State<AppState>,
    AuthenticatedUser(usuario): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<CambioEstadoPagoPayload>,
) -> Result<impl IntoResponse, AppError> {
    requiere_admin(&usuario)?;

    let pago = app_state
        .payments_service
        .cambiar_estado(id, payload.estado)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(pago))))
}

// DELETE /api/payments/{id}
#[utoipa::path(
    delete,
    path = "/api/payments/{id}",
    tag = "Payments",
    params(("id" = Uuid, Path, description = "ID del pago")),
    responses(
        (status = 200, description = "Pago eliminado"),
        (status = 404, description = "No existe")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete(
    State(app_state): State<AppState>,
    AuthenticatedUser(usuario): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    requiere_admin(&usuario)?;

    app_state.payments_service.delete(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(()))))
}
