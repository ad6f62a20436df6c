// src/handlers/notifications.rs
// El listado y las acciones de lectura/borrado son del usuario autenticado
// sobre SUS notificaciones; crear (puntual o broadcast) es cosa del panel.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::{error::AppError, response::ApiResponse},
    config::AppState,
    middleware::auth::{requiere_admin, AuthenticatedUser},
    models::notifications::{CreateNotificacionPayload, Notificacion},
};

// GET /api/notifications
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = "Notifications",
    responses((status = 200, description = "Notificaciones del usuario", body = Vec<Notificacion>)),
    security(("api_jwt" = []))
)]
pub async fn list(
    State(app_state): State<AppState>,
    AuthenticatedUser(usuario): AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let notificaciones = app_state
        .notifications_service
        .list_por_usuario(usuario.id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(notificaciones))))
}

// POST /api/notifications
#[utoipa::path(
    post,
    path = "/api/notifications",
    tag = "Notifications",
    request_body = CreateNotificacionPayload,
    responses(
        (status = 201, description = "Notificación creada; sin usuarioId se envía a todos los activos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create(
    State(app_state): State<AppState>,
    AuthenticatedUser(usuario): AuthenticatedUser,
    Json(payload): Json<CreateNotificacionPayload>,
) -> Result<impl IntoResponse, AppError> {
    requiere_admin(&usuario)?;
    payload.validate()?;

    let enviadas = app_state.notifications_service.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(json!({ "enviadas": enviadas }))),
    ))
}

// PUT /api/notifications/{id}/read
#[utoipa::path(
    put,
    path = "/api/notifications/{id}/read",
    tag = "Notifications",
    params(("id" = Uuid, Path, description = "ID de la notificación")),
    responses(
        (status = 200, description = "Marcada como leída"),
        (status = 404, description = "No existe o pertenece a otro usuario")
    ),
    security(("api_jwt" = []))
)]
pub async fn mark_read(
    State(app_state): State<AppState>,
    AuthenticatedUser(usuario): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .notifications_service
        .marcar_leida(id, usuario.id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(()))))
}

// PUT /api/notifications/read-all
#[utoipa::path(
    put,
    path = "/api/notifications/read-all",
    tag = "Notifications",
    responses((status = 200, description = "Todas las notificaciones quedaron leídas")),
    security(("api_jwt" = []))
)]
pub async fn mark_all_read(
    State(app_state): State<AppState>,
    AuthenticatedUser(usuario): AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let actualizadas = app_state
        .notifications_service
        .marcar_todas_leidas(usuario.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(json!({ "actualizadas": actualizadas }))),
    ))
}

// DELETE /api/notifications/{id}
#[utoipa::path(
    delete,
    path = "/api/notifications/{id}",
    tag = "Notifications",
    params(("id" = Uuid, Path, description = "ID de la notificación")),
    responses(
        (status = 200, description = "Notificación eliminada"),
        (status = 404, description = "No existe o pertenece a otro usuario")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete(
    State(app_state): State<AppState>,
    AuthenticatedUser(usuario): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .notifications_service
        .delete(id, usuario.id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(()))))
}
