// src/handlers/settings.rs
// Configuración del portal: dos documentos JSON ('general' y 'seguridad')
// que el panel lee y reescribe completos.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::{error::AppError, response::ApiResponse},
    config::AppState,
    models::settings::{Configuracion, UpdateConfiguracionPayload},
};

const CLAVES_VALIDAS: [&str; 2] = ["general", "seguridad"];

fn validar_clave(clave: &str) -> Result<(), AppError> {
    if CLAVES_VALIDAS.contains(&clave) {
        Ok(())
    } else {
        Err(AppError::NoEncontrado("configuración"))
    }
}

// GET /api/configuration/{clave}
#[utoipa::path(
    get,
    path = "/api/configuration/{clave}",
    tag = "Configuration",
    params(("clave" = String, Path, description = "Documento: 'general' o 'seguridad'")),
    responses(
        (status = 200, description = "Documento de configuración", body = Configuracion),
        (status = 404, description = "Clave desconocida")
    ),
    security(("api_jwt" = []))
)]
pub async fn get(
    State(app_state): State<AppState>,
    Path(clave): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    validar_clave(&clave)?;

    let configuracion = app_state
        .settings_repo
        .get(&clave)
        .await?
        .ok_or(AppError::NoEncontrado("configuración"))?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(configuracion))))
}

// PUT /api/configuration/{clave}
#[utoipa::path(
    put,
    path = "/api/configuration/{clave}",
    tag = "Configuration",
    params(("clave" = String, Path, description = "Documento: 'general' o 'seguridad'")),
    request_body = UpdateConfiguracionPayload,
    responses(
        (status = 200, description = "Documento actualizado", body = Configuracion),
        (status = 404, description = "Clave desconocida")
    ),
    security(("api_jwt" = []))
)]
pub async fn update(
    State(app_state): State<AppState>,
    Path(clave): Path<String>,
    Json(payload): Json<UpdateConfiguracionPayload>,
) -> Result<impl IntoResponse, AppError> {
    validar_clave(&clave)?;

    let configuracion = app_state
        .settings_repo
        .update(&clave, &payload.valores)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(configuracion))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solo_acepta_los_documentos_sembrados() {
        assert!(validar_clave("general").is_ok());
        assert!(validar_clave("seguridad").is_ok());
        assert!(validar_clave("otro").is_err());
    }
}
