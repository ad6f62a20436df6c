// src/handlers/messages.rs
// El POST es el formulario público de contacto (sin sesión). El resto del
// módulo va detrás de auth_guard + admin_guard en el router.

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
    models::messages::{
        CreateMensajePayload, FiltroMensajes, Mensaje, ResponderMensajePayload,
    },
};

// POST /api/messages (público)
#[utoipa::path(
    post,
    path = "/api/messages",
    tag = "Messages",
    request_body = CreateMensajePayload,
    responses(
        (status = 201, description = "Mensaje recibido", body = Mensaje),
        (status = 400, description = "Datos inválidos")
    )
)]
pub async fn create(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateMensajePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let mensaje = app_state.messages_service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(mensaje))))
}

// GET /api/messages
#[utoipa::path(
    get,
    path = "/api/messages",
    tag = "Messages",
    params(FiltroMensajes),
    responses((status = 200, description = "Bandeja de entrada", body = Vec<Mensaje>)),
    security(("api_jwt" = []))
)]
pub async fn list(
    State(app_state): State<AppState>,
    Query(filtro): Query<FiltroMensajes>,
) -> Result<impl IntoResponse, AppError> {
    let mensajes = app_state
        .messages_service
        .list(filtro.buscar.as_deref(), filtro.estado, filtro.prioridad)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(mensajes))))
}

// GET /api/messages/export
#[utoipa::path(
    get,
    path = "/api/messages/export",
    tag = "Messages",
    params(FiltroMensajes),
    responses((status = 200, description = "Descarga JSON del listado filtrado")),
    security(("api_jwt" = []))
)]
pub async fn export(
    State(app_state): State<AppState>,
    Query(filtro): Query<FiltroMensajes>,
) -> Result<Response, AppError> {
    let mensajes = app_state
        .messages_service
        .list(filtro.buscar.as_deref(), filtro.estado, filtro.prioridad)
        .await?;

    descarga_json("mensajes", &mensajes)
}

// GET /api/messages/{id}
// Abrirlo marca los mensajes 'nuevo' como 'leido'.
#[utoipa::path(
    get,
    path = "/api/messages/{id}",
    tag = "Messages",
    params(("id" = Uuid, Path, description = "ID del mensaje")),
    responses(
        (status = 200, description = "Detalle del mensaje", body = Mensaje),
        (status = 404, description = "No existe")
    ),
    security(("api_jwt" = []))
)]
pub async fn get(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let mensaje = app_state.messages_service.get(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(mensaje))))
}

// POST /api/messages/{id}/reply
#[utoipa::path(
    post,
    path = "/api/messages/{id}/reply",
    tag = "Messages",
    params(("id" = Uuid, Path, description = "ID del mensaje")),
    request_body = ResponderMensajePayload,
    responses(
        (status = 200, description = "Respuesta registrada", body = Mensaje),
        (status = 404, description = "No existe")
    ),
    security(("api_jwt" = []))
)]
pub async fn reply(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ResponderMensajePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let mensaje = app_state
        .messages_service
        .responder(id, &payload.respuesta)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(mensaje))))
}

// PUT /api/messages/{id}/archive
#[utoipa::path(
    put,
    path = "/api/messages/{id}/archive",
    tag = "Messages",
    params(("id" = Uuid, Path, description = "ID del mensaje")),
    responses(
        (status = 200, description = "Mensaje archivado", body = Mensaje),
        (status = 404, description = "No existe")
    ),
    security(("api_jwt" = []))
)]
pub async fn archive(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let mensaje = app_state.messages_service.archivar(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(mensaje))))
}

// DELETE /api/messages/{id}
#[utoipa::path(
    delete,
    path = "/api/messages/{id}",
    tag = "Messages",
    params(("id" = Uuid, Path, description = "ID del mensaje")),
    responses(
        (status = 200, description = "Mensaje eliminado"),
        (status = 404, description = "No existe")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.messages_service.delete(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(()))))
}
