// src/handlers/orders.rs

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
    models::orders::{
        CambioEstadoPayload, CambioPrioridadPayload, CreatePedidoPayload, FiltroPedidos, Pedido,
        PedidoCliente, UpdatePedidoPayload,
    },
};

// GET /api/orders
// El panel ve todo (con filtros); un cliente solo sus pedidos, cada uno
// anotado con `requiere_pago` para el botón "Pagar ahora".
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Orders",
    params(FiltroPedidos),
    responses(
        (status = 200, description = "Listado de pedidos", body = Vec<Pedido>),
        (status = 401, description = "Sin sesión")
    ),
    security(("api_jwt" = []))
)]
pub async fn list(
    State(app_state): State<AppState>,
    AuthenticatedUser(usuario): AuthenticatedUser,
    Query(filtro): Query<FiltroPedidos>,
) -> Result<Response, AppError> {
    if usuario.rol.es_interno() {
        let pedidos = app_state
            .orders_service
            .list(filtro.buscar.as_deref(), filtro.estado, filtro.prioridad)
            .await?;
        return Ok((StatusCode::OK, Json(ApiResponse::ok(pedidos))).into_response());
    }

    let pedidos: Vec<PedidoCliente> = app_state
        .orders_service
        .list_por_cliente(usuario.id)
        .await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(pedidos))).into_response())
}

// GET /api/orders/export
#[utoipa::path(
    get,
    path = "/api/orders/export",
    tag = "Orders",
    params(FiltroPedidos),
    responses((status = 200, description = "Descarga JSON del listado filtrado")),
    security(("api_jwt" = []))
)]
pub async fn export(
    State(app_state): State<AppState>,
    AuthenticatedUser(usuario): AuthenticatedUser,
    Query(filtro): Query<FiltroPedidos>,
) -> Result<Response, AppError> {
    requiere_interno(&usuario)?;

    let pedidos = app_state
        .orders_service
        .list(filtro.buscar.as_deref(), filtro.estado, filtro.prioridad)
        .await?;

    descarga_json("pedidos", &pedidos)
}

// POST /api/orders
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "Orders",
    request_body = CreatePedidoPayload,
    responses(
        (status = 201, description = "Pedido creado", body = Pedido),
        (status = 400, description = "Datos inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create(
    State(app_state): State<AppState>,
    AuthenticatedUser(usuario): AuthenticatedUser,
    Json(payload): Json<CreatePedidoPayload>,
) -> Result<impl IntoResponse, AppError> {
    requiere_admin(&usuario)?;
    payload.validate()?;

    let pedido = app_state.orders_service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(pedido))))
}

// GET /api/orders/{id}
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = "Orders",
    params(("id" = Uuid, Path, description = "ID del pedido")),
    responses(
        (status = 200, description = "Detalle del pedido", body = Pedido),
        (status = 403, description = "El pedido pertenece a otro cliente"),
        (status = 404, description = "No existe")
    ),
    security(("api_jwt" = []))
)]
pub async fn get(
    State(app_state): State<AppState>,
    AuthenticatedUser(usuario): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let pedido = app_state.orders_service.get(id).await?;

    if !usuario.rol.es_interno() && pedido.cliente_id != usuario.id {
        return Err(AppError::AccesoDenegado);
    }

    Ok((StatusCode::OK, Json(ApiResponse::ok(pedido))))
}

// PUT /api/orders/{id}
#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    tag = "Orders",
    params(("id" = Uuid, Path, description = "ID del pedido")),
    request_body = UpdatePedidoPayload,
    responses(
        (status = 200, description = "Pedido actualizado", body = Pedido),
        (status = 422, description = "Transición de estado ilegal")
    ),
    security(("api_jwt" = []))
)]
pub async fn update(
    State(app_state): State<AppState>,
    AuthenticatedUser(usuario): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePedidoPayload>,
) -> Result<impl IntoResponse, AppError> {
    requiere_admin(&usuario)?;
    payload.validate()?;

    let pedido = app_state.orders_service.update(id, payload).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(pedido))))
}

// PUT /api/orders/{id}/status
#[utoipa::path(
    put,
    path = "/api/orders/{id}/status",
    tag = "Orders",
    params(("id" = Uuid, Path, description = "ID del pedido")),
    request_body = CambioEstadoPayload,
    responses(
        (status = 200, description = "Estado actualizado", body = Pedido),
        (status = 422, description = "Transición de estado ilegal")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_status(
    State(app_state): State<AppState>,
    AuthenticatedUser(usuario): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<CambioEstadoPayload>,
) -> Result<impl IntoResponse, AppError> {
    requiere_admin(&usuario)?;

    let pedido = app_state
        .orders_service
        .cambiar_estado(id, payload.estado)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(pedido))))
}

// PUT /api/orders/{id}/priority
#[utoipa::path(
    put,
    path = "/api/orders/{id}/priority",
    tag = "Orders",
    params(("id" = Uuid, Path, description = "ID del pedido")),
    request_body = CambioPrioridadPayload,
    responses((status = 200, description = "Prioridad actualizada", body = Pedido)),
    security(("api_jwt" = []))
)]
pub async fn update_priority(
    State(app_state): State<AppState>,
    AuthenticatedUser(usuario): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<CambioPrioridadPayload>,
) -> Result<impl IntoResponse, AppError> {
    requiere_admin(&usuario)?;

    let pedido = app_state
        .orders_service
        .cambiar_prioridad(id, payload.prioridad)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(pedido))))
}

// DELETE /api/orders/{id}
#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = "Orders",
    params(("id" = Uuid, Path, description = "ID del pedido")),
    responses(
        (status = 200, description = "Pedido eliminado"),
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

    app_state.orders_service.delete(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(()))))
}
