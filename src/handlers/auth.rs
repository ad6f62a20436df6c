// src/handlers/auth.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use validator::Validate;

use crate::{
    common::{error::AppError, response::ApiResponse},
    config::AppState,
    middleware::auth::{AuthenticatedUser, SESSION_COOKIE},
    models::auth::{AuthResponse, LoginPayload, RegisterPayload, Usuario},
};

fn cookie_de_sesion(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

// POST /api/auth/register
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Auth",
    request_body = RegisterPayload,
    responses(
        (status = 201, description = "Cuenta de cliente creada y sesión iniciada"),
        (status = 400, description = "Datos inválidos"),
        (status = 409, description = "El e-mail ya está registrado")
    )
)]
pub async fn register(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<RegisterPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let (usuario, token) = app_state
        .auth_service
        .register(
            &payload.nombre,
            &payload.email,
            &payload.password,
            payload.telefono.as_deref(),
            payload.empresa.as_deref(),
        )
        .await?;

    let jar = jar.add(cookie_de_sesion(token.clone()));

    Ok((
        StatusCode::CREATED,
        jar,
        Json(ApiResponse::ok(AuthResponse { usuario, token })),
    ))
}

// POST /api/auth/login
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Sesión iniciada", body = AuthResponse),
        (status = 401, description = "Credenciales inválidas")
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    // Si las credenciales fallan no se toca la cookie: la respuesta es 401
    // con {success:false} y la sesión previa (si la había) queda intacta.
    let (usuario, token) = app_state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    let jar = jar.add(cookie_de_sesion(token.clone()));

    Ok((
        StatusCode::OK,
        jar,
        Json(ApiResponse::ok(AuthResponse { usuario, token })),
    ))
}

// POST /api/auth/logout
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "Auth",
    responses((status = 200, description = "Sesión cerrada"))
)]
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    // Mejor esfuerzo: borra la cookie venga o no una sesión válida. El
    // cliente limpia su estado local aunque esta llamada falle en red.
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/").build());

    (StatusCode::OK, jar, Json(ApiResponse::ok(())))
}

// GET /api/auth/profile
#[utoipa::path(
    get,
    path = "/api/auth/profile",
    tag = "Auth",
    responses(
        (status = 200, description = "Usuario de la sesión actual", body = Usuario),
        (status = 401, description = "Sin sesión")
    ),
    security(("api_jwt" = []))
)]
pub async fn profile(AuthenticatedUser(usuario): AuthenticatedUser) -> impl IntoResponse {
    (StatusCode::OK, Json(ApiResponse::ok(usuario)))
}
