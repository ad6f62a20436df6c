use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nuestro tipo de error, con `thiserror` para mejor ergonomía.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error de validación")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("El e-mail ya existe")]
    EmailYaExiste,

    #[error("Credenciales inválidas")]
    CredencialesInvalidas,

    #[error("Token inválido")]
    TokenInvalido,

    #[error("Acceso denegado")]
    AccesoDenegado,

    #[error("{0} no encontrado")]
    NoEncontrado(&'static str),

    #[error("Transición de estado inválida: {0} -> {1}")]
    TransicionInvalida(String, String),

    #[error("La campaña no puede enviarse en su estado actual")]
    EstadoCampanaInvalido,

    // Variante para errores de base de datos (sqlx)
    #[error("Error de base de datos")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para cualquier otro error inesperado.
    // `anyhow::Error` captura el contexto completo.
    #[error("Error interno del servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Error de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Error de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Devolvemos todos los detalles de la validación, campo por campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "success": false,
                    "error": "Uno o más campos son inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::EmailYaExiste => {
                (StatusCode::CONFLICT, "Este e-mail ya está en uso.".to_string())
            }
            AppError::CredencialesInvalidas => {
                (StatusCode::UNAUTHORIZED, "E-mail o contraseña inválidos.".to_string())
            }
            AppError::TokenInvalido => (
                StatusCode::UNAUTHORIZED,
                "Token de sesión inválido o ausente.".to_string(),
            ),
            AppError::AccesoDenegado => (
                StatusCode::FORBIDDEN,
                "No tienes permiso para realizar esta acción.".to_string(),
            ),
            AppError::NoEncontrado(recurso) => {
                (StatusCode::NOT_FOUND, format!("{} no encontrado.", recurso))
            }
            AppError::TransicionInvalida(de, a) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("No se puede cambiar el estado de '{}' a '{}'.", de, a),
            ),
            AppError::EstadoCampanaInvalido => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Solo se pueden enviar campañas en borrador o programadas.".to_string(),
            ),

            // Todo lo demás (DatabaseError, InternalServerError...) se vuelve 500.
            // `tracing` registra el detalle; el cliente recibe un mensaje opaco.
            ref e => {
                tracing::error!("Error interno del servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ocurrió un error inesperado.".to_string(),
                )
            }
        };

        // Respuesta estándar para errores simples: mismo sobre {success, error}.
        let body = Json(json!({ "success": false, "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transicion_invalida_es_422() {
        let err = AppError::TransicionInvalida("nuevo".into(), "completado".into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn credenciales_invalidas_es_401() {
        let response = AppError::CredencialesInvalidas.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
