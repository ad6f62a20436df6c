// src/handlers/users.rs
// Gestión de clientes y personal desde el panel. Todo el módulo va detrás
// de auth_guard + admin_guard en el router.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::{error::AppError, response::ApiResponse},
    config::AppState,
    models::auth::{CreateUsuarioPayload, EstadoUsuario, Rol, UpdateUsuarioPayload, Usuario},
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct FiltroUsuarios {
    /// Texto libre sobre nombre, email o empresa
    pub buscar: Option<String>,
    pub rol: Option<Rol>,
    pub estado: Option<EstadoUsuario>,
}

// GET /api/users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    params(FiltroUsuarios),
    responses((status = 200, description = "Listado de usuarios", body = Vec<Usuario>)),
    security(("api_jwt" = []))
)]
pub async fn list(
    State(app_state): State<AppState>,
    Query(filtro): Query<FiltroUsuarios>,
) -> Result<impl IntoResponse, AppError> {
    let usuarios = app_state
        .user_repo
        .list(filtro.buscar.as_deref(), filtro.rol, filtro.estado)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(usuarios))))
}

// POST /api/users
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = CreateUsuarioPayload,
    responses(
        (status = 201, description = "Usuario creado", body = Usuario),
        (status = 409, description = "El e-mail ya está registrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn create(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateUsuarioPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let password_hash = app_state.auth_service.hash_password(&payload.password).await?;

    let usuario = app_state
        .user_repo
        .create(
            &payload.nombre,
            &payload.email,
            &password_hash,
            payload.telefono.as_deref(),
            payload.empresa.as_deref(),
            payload.direccion.as_deref(),
            payload.rfc.as_deref(),
            payload.rol,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(usuario))))
}

// GET /api/users/{id}
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = Uuid, Path, description = "ID del usuario")),
    responses(
        (status = 200, description = "Detalle del usuario", body = Usuario),
        (status = 404, description = "No existe")
    ),
    security(("api_jwt" = []))
)]
pub async fn get(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let usuario = app_state
        .user_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NoEncontrado("usuario"))?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(usuario))))
}

// PUT /api/users/{id}
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = Uuid, Path, description = "ID del usuario")),
    request_body = UpdateUsuarioPayload,
    responses(
        (status = 200, description = "Usuario actualizado", body = Usuario),
        (status = 409, description = "El e-mail ya está registrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUsuarioPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    // Primero confirma que existe para responder 404 y no un UPDATE vacío
    app_state
        .user_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NoEncontrado("usuario"))?;

    let usuario = app_state
        .user_repo
        .update(
            id,
            &payload.nombre,
            &payload.email,
            payload.telefono.as_deref(),
            payload.empresa.as_deref(),
            payload.direccion.as_deref(),
            payload.rfc.as_deref(),
            payload.rol,
            payload.estado,
        )
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(usuario))))
}

// DELETE /api/users/{id}
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = Uuid, Path, description = "ID del usuario")),
    responses(
        (status = 200, description = "Usuario eliminado"),
        (status = 404, description = "No existe")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let filas = app_state.user_repo.delete(id).await?;
    if filas == 0 {
        return Err(AppError::NoEncontrado("usuario"));
    }

    Ok((StatusCode::OK, Json(ApiResponse::ok(()))))
}
