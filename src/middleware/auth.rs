// src/middleware/auth.rs

use axum::{
    extract::{FromRequestParts, State},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

use crate::{common::error::AppError, config::AppState, models::auth::Usuario};

// Nombre de la cookie de sesión que el navegador manda en cada petición
pub const SESSION_COOKIE: &str = "session";

// El token puede venir como `Authorization: Bearer ...` (API) o en la cookie
// de sesión (navegador). El Bearer gana si vienen ambos.
fn extraer_token(headers: &HeaderMap) -> Option<String> {
    if let Some(auth_header) = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
    {
        if let Some(token) = auth_header.strip_prefix("Bearer ") {
            return Some(token.to_string());
        }
    }

    CookieJar::from_headers(headers)
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
}

// El middleware de autenticación: valida el token y deja el usuario en los
// "extensions" de la petición. Los tres estados quedan explícitos:
// sin token / token inválido -> 401, rol incorrecto -> 403 (admin_guard),
// válido -> el extractor entrega el usuario.
pub async fn auth_guard(
    State(app_state): State<AppState>,
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = extraer_token(request.headers()).ok_or(AppError::TokenInvalido)?;

    let usuario = app_state.auth_service.validate_token(&token).await?;

    request.extensions_mut().insert(usuario);
    Ok(next.run(request).await)
}

// Se apila después de auth_guard en las rutas del panel.
pub async fn admin_guard(
    request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, AppError> {
    let usuario = request
        .extensions()
        .get::<Usuario>()
        .ok_or(AppError::TokenInvalido)?;

    if !usuario.rol.es_admin() {
        return Err(AppError::AccesoDenegado);
    }

    Ok(next.run(request).await)
}

// Para los endpoints mixtos (cliente ve lo suyo, el panel ve todo) el handler
// decide con estos helpers en lugar de apilar otro middleware.
pub fn requiere_admin(usuario: &Usuario) -> Result<(), AppError> {
    if usuario.rol.es_admin() {
        Ok(())
    } else {
        Err(AppError::AccesoDenegado)
    }
}

pub fn requiere_interno(usuario: &Usuario) -> Result<(), AppError> {
    if usuario.rol.es_interno() {
        Ok(())
    } else {
        Err(AppError::AccesoDenegado)
    }
}

// Extractor para obtener el usuario autenticado directamente en los handlers
pub struct AuthenticatedUser(pub Usuario);

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Usuario>()
            .cloned()
            .map(AuthenticatedUser)
            .ok_or(AppError::TokenInvalido)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_gana_sobre_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer token-api"),
        );
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("session=token-cookie"),
        );

        assert_eq!(extraer_token(&headers).as_deref(), Some("token-api"));
    }

    #[test]
    fn sin_bearer_se_usa_la_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("otra=x; session=token-cookie"),
        );

        assert_eq!(extraer_token(&headers).as_deref(), Some("token-cookie"));
    }

    #[test]
    fn sin_credenciales_no_hay_token() {
        let headers = HeaderMap::new();
        assert_eq!(extraer_token(&headers), None);
    }
}
