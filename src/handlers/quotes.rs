// src/handlers/quotes.rs

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
    models::quotes::{
        Cotizacion, CreateCotizacionPayload, FiltroCotizaciones, UpdateCotizacionPayload,
    },
};

// GET /api/quotes
#[utoipa::path(
    get,
    path = "/api/quotes",
    tag = "Quotes",
    params(FiltroCotizaciones),
    responses((status = 200, description = "Listado de cotizaciones", body = Vec<Cotizacion>)),
    security(("api_jwt" = []))
)]
pub async fn list(
    State(app_state): State<AppState>,
    AuthenticatedUser(usuario): AuthenticatedUser,
    Query(filtro): Query<FiltroCotizaciones>,
) -> Result<Response, AppError> {
    let cotizaciones = if usuario.rol.es_interno() {
        app_state
            .quotes_service
            .list(filtro.buscar.as_deref(), filtro.estado)
            .await?
    } else {
        app_state.quotes_service.list_por_cliente(usuario.id).await?
    };

    Ok((StatusCode::OK, Json(ApiResponse::ok(cotizaciones))).into_response())
}

// GET /api/quotes/export
#[utoipa::path(
    get,
    path = "/api/quotes/export",
    tag = "Quotes",
    params(FiltroCotizaciones),
    responses((status = 200, description = "Descarga JSON del listado filtrado")),
    security(("api_jwt" = []))
)]
pub async fn export(
    State(app_state): State<AppState>,
    AuthenticatedUser(usuario): AuthenticatedUser,
    Query(filtro): Query<FiltroCotizaciones>,
) -> Result<Response, AppError> {
    requiere_interno(&usuario)?;

    let cotizaciones = app_state
        .quotes_service
        .list(filtro.buscar.as_deref(), filtro.estado)
        .await?;

    descarga_json("cotizaciones", &cotizaciones)
}

// POST /api/quotes
#[utoipa::path(
    post,
    path = "/api/quotes",
    tag = "Quotes",
    request_body = CreateCotizacionPayload,
    responses(
        (status = 201, description = "Cotización creada con folio asignado", body = Cotizacion)
    ),
    security(("api_jwt" = []))
)]
pub async fn create(
    State(app_state): State<AppState>,
    AuthenticatedUser(usuario): AuthenticatedUser,
    Json(payload): Json<CreateCotizacionPayload>,
) -> Result<impl IntoResponse, AppError> {
    requiere_admin(&usuario)?;
    payload.validate()?;

    let cotizacion = app_state.quotes_service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(cotizacion))))
}

// GET /api/quotes/{id}
#[utoipa::path(
    get,
    path = "/api/quotes/{id}",
    tag = "Quotes",
    params(("id" = Uuid, Path, description = "ID de la cotización")),
    responses(
        (status = 200, description = "Detalle de la cotización", body = Cotizacion),
        (status = 404, description = "No existe")
    ),
    security(("api_jwt" = []))
)]
pub async fn get(
    State(app_state): State<AppState>,
    AuthenticatedUser(usuario): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let cotizacion = app_state.quotes_service.get(id).await?;

    if !usuario.rol.es_interno() && cotizacion.cliente_id != Some(usuario.id) {
        return Err(AppError::AccesoDenegado);
    }

    Ok((StatusCode::OK, Json(ApiResponse::ok(cotizacion))))
}

// PUT /api/quotes/{id}
#[utoipa::path(
    put,
    path = "/api/quotes/{id}",
    tag = "Quotes",
    params(("id" = Uuid, Path, description = "ID de la cotización")),
    request_body = UpdateCotizacionPayload,
    responses((status = 200, description = "Cotización actualizada", body = Cotizacion)),
    security(("api_jwt" = []))
)]
pub async fn update(
    State(app_state): State<AppState>,
    AuthenticatedUser(usuario): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCotizacionPayload>,
) -> Result<impl IntoResponse, AppError> {
    requiere_admin(&usuario)?;
    payload.validate()?;

    let cotizacion = app_state.quotes_service.update(id, payload).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(cotizacion))))
}

// DELETE /api/quotes/{id}
#[utoipa::path(
    delete,
    path = "/api/quotes/{id}",
    tag = "Quotes",
    params(("id" = Uuid, Path, description = "ID de la cotización")),
    responses(
        (status = 200, description = "Cotización eliminada"),
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

    app_state.quotes_service.delete(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(()))))
}
