// src/main.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::middleware::auth::{admin_guard, auth_guard};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() está bien aquí: si la configuración falla, la aplicación
    // no debe arrancar.
    let app_state = AppState::new()
        .await
        .expect("Falló la inicialización del estado de la aplicación.");

    // Ejecuta las migraciones de SQLx al arrancar
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Fallaron las migraciones de la base de datos.");

    tracing::info!("✅ Migraciones de la base de datos ejecutadas con éxito");

    // Rutas de autenticación. /profile exige sesión; el resto es público.
    let auth_routes = Router::new()
        .route("/profile", get(handlers::auth::profile))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ))
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .route("/logout", post(handlers::auth::logout));

    // Áreas mixtas: el cliente ve lo suyo, el panel ve todo. El handler
    // decide con el rol; aquí solo se exige sesión.
    let orders_routes = Router::new()
        .route(
            "/",
            get(handlers::orders::list).post(handlers::orders::create),
        )
        .route("/export", get(handlers::orders::export))
        .route(
            "/{id}",
            get(handlers::orders::get)
                .put(handlers::orders::update)
                .delete(handlers::orders::delete),
        )
        .route("/{id}/status", put(handlers::orders::update_status))
        .route("/{id}/priority", put(handlers::orders::update_priority))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let payments_routes = Router::new()
        .route(
            "/",
            get(handlers::payments::list).post(handlers::payments::create),
        )
        .route("/export", get(handlers::payments::export))
        .route(
            "/{id}",
            get(handlers::payments::get).delete(handlers::payments::delete),
        )
        .route("/{id}/status", put(handlers::payments::update_status))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let quotes_routes = Router::new()
        .route(
            "/",
            get(handlers::quotes::list).post(handlers::quotes::create),
        )
        .route("/export", get(handlers::quotes::export))
        .route(
            "/{id}",
            get(handlers::quotes::get)
                .put(handlers::quotes::update)
                .delete(handlers::quotes::delete),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Cada usuario opera solo sobre SUS notificaciones
    let notifications_routes = Router::new()
        .route(
            "/",
            get(handlers::notifications::list).post(handlers::notifications::create),
        )
        .route("/read-all", put(handlers::notifications::mark_all_read))
        .route("/{id}/read", put(handlers::notifications::mark_read))
        .route("/{id}", axum::routing::delete(handlers::notifications::delete))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Áreas exclusivas del panel: primero auth_guard y encima admin_guard.
    // La capa exterior corre primero, por eso auth_guard se agrega al final.
    let users_routes = Router::new()
        .route(
            "/",
            get(handlers::users::list).post(handlers::users::create),
        )
        .route(
            "/{id}",
            get(handlers::users::get)
                .put(handlers::users::update)
                .delete(handlers::users::delete),
        )
        .layer(axum_middleware::from_fn(admin_guard))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let invoices_routes = Router::new()
        .route(
            "/",
            get(handlers::invoices::list).post(handlers::invoices::create),
        )
        .route("/export", get(handlers::invoices::export))
        .route("/{id}", get(handlers::invoices::get))
        .route("/{id}/status", put(handlers::invoices::update_status))
        .layer(axum_middleware::from_fn(admin_guard))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let campaigns_routes = Router::new()
        .route(
            "/",
            get(handlers::campaigns::list).post(handlers::campaigns::create),
        )
        .route("/export", get(handlers::campaigns::export))
        .route(
            "/{id}",
            get(handlers::campaigns::get)
                .put(handlers::campaigns::update)
                .delete(handlers::campaigns::delete),
        )
        .route("/{id}/send", post(handlers::campaigns::send))
        .layer(axum_middleware::from_fn(admin_guard))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // La bandeja es del panel, pero el POST del formulario de contacto es
    // público: se agrega después de las capas para quedar fuera de ellas.
    let messages_routes = Router::new()
        .route("/", get(handlers::messages::list))
        .route("/export", get(handlers::messages::export))
        .route(
            "/{id}",
            get(handlers::messages::get).delete(handlers::messages::delete),
        )
        .route("/{id}/reply", post(handlers::messages::reply))
        .route("/{id}/archive", put(handlers::messages::archive))
        .layer(axum_middleware::from_fn(admin_guard))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ))
        .route("/", post(handlers::messages::create));

    let dashboard_routes = Router::new()
        .route("/summary", get(handlers::dashboard::summary))
        .layer(axum_middleware::from_fn(admin_guard))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let configuration_routes = Router::new()
        .route(
            "/{clave}",
            get(handlers::settings::get).put(handlers::settings::update),
        )
        .layer(axum_middleware::from_fn(admin_guard))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/auth", auth_routes)
        .nest("/api/orders", orders_routes)
        .nest("/api/payments", payments_routes)
        .nest("/api/quotes", quotes_routes)
        .nest("/api/invoices", invoices_routes)
        .nest("/api/users", users_routes)
        .nest("/api/notifications", notifications_routes)
        .nest("/api/messages", messages_routes)
        .nest("/api/campaigns", campaigns_routes)
        .nest("/api/dashboard", dashboard_routes)
        .nest("/api/configuration", configuration_routes)
        .merge(
            SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()),
        )
        .with_state(app_state);

    let puerto = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{}", puerto);
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falló el arranque del listener TCP");
    tracing::info!("🚀 Servidor escuchando en {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Error en el servidor Axum");
}
