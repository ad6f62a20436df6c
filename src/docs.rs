// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::logout,
        handlers::auth::profile,

        // --- Orders ---
        handlers::orders::list,
        handlers::orders::export,
        handlers::orders::create,
        handlers::orders::get,
        handlers::orders::update,
        handlers::orders::update_status,
        handlers::orders::update_priority,
        handlers::orders::delete,

        // --- Payments ---
        handlers::payments::list,
        handlers::payments::export,
        handlers::payments::create,
        handlers::payments::get,
        handlers::payments::update_status,
        handlers::payments::delete,

        // --- Quotes ---
        handlers::quotes::list,
        handlers::quotes::export,
        handlers::quotes::create,
        handlers::quotes::get,
        handlers::quotes::update,
        handlers::quotes::delete,

        // --- Invoices ---
        handlers::invoices::list,
        handlers::invoices::export,
        handlers::invoices::create,
        handlers::invoices::get,
        handlers::invoices::update_status,

        // --- Users ---
        handlers::users::list,
        handlers::users::create,
        handlers::users::get,
        handlers::users::update,
        handlers::users::delete,

        // --- Notifications ---
        handlers::notifications::list,
        handlers::notifications::create,
        handlers::notifications::mark_read,
        handlers::notifications::mark_all_read,
        handlers::notifications::delete,

        // --- Messages ---
        handlers::messages::create,
        handlers::messages::list,
        handlers::messages::export,
        handlers::messages::get,
        handlers::messages::reply,
        handlers::messages::archive,
        handlers::messages::delete,

        // --- Campaigns ---
        handlers::campaigns::list,
        handlers::campaigns::export,
        handlers::campaigns::create,
        handlers::campaigns::get,
        handlers::campaigns::update,
        handlers::campaigns::send,
        handlers::campaigns::delete,

        // --- Dashboard ---
        handlers::dashboard::summary,

        // --- Configuration ---
        handlers::settings::get,
        handlers::settings::update,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::Rol,
            models::auth::EstadoUsuario,
            models::auth::Usuario,
            models::auth::RegisterPayload,
            models::auth::LoginPayload,
            models::auth::CreateUsuarioPayload,
            models::auth::UpdateUsuarioPayload,
            models::auth::AuthResponse,

            // --- Orders ---
            models::orders::EstadoPedido,
            models::orders::Prioridad,
            models::orders::Pedido,
            models::orders::PedidoCliente,
            models::orders::CreatePedidoPayload,
            models::orders::UpdatePedidoPayload,
            models::orders::CambioEstadoPayload,
            models::orders::CambioPrioridadPayload,

            // --- Payments ---
            models::payments::EstadoPago,
            models::payments::MetodoPago,
            models::payments::Pago,
            models::payments::CreatePagoPayload,
            models::payments::CambioEstadoPagoPayload,

            // --- Quotes ---
            models::quotes::EstadoCotizacion,
            models::quotes::Cotizacion,
            models::quotes::CreateCotizacionPayload,
            models::quotes::UpdateCotizacionPayload,

            // --- Invoices ---
            models::invoices::EstadoFactura,
            models::invoices::Factura,
            models::invoices::CreateFacturaPayload,
            handlers::invoices::CambioEstadoFacturaPayload,

            // --- Notifications ---
            models::notifications::TipoNotificacion,
            models::notifications::Notificacion,
            models::notifications::CreateNotificacionPayload,

            // --- Messages ---
            models::messages::EstadoMensaje,
            models::messages::Mensaje,
            models::messages::CreateMensajePayload,
            models::messages::ResponderMensajePayload,

            // --- Campaigns ---
            models::campaigns::EstadoCampana,
            models::campaigns::MetricasCampana,
            models::campaigns::Campana,
            models::campaigns::CreateCampanaPayload,
            models::campaigns::UpdateCampanaPayload,

            // --- Dashboard ---
            models::dashboard::ResumenDashboard,

            // --- Configuration ---
            models::settings::Configuracion,
            models::settings::UpdateConfiguracionPayload,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticación, registro y sesión"),
        (name = "Orders", description = "Gestión de pedidos"),
        (name = "Payments", description = "Registro y seguimiento de pagos"),
        (name = "Quotes", description = "Cotizaciones con folio"),
        (name = "Invoices", description = "Facturación sobre pedidos"),
        (name = "Users", description = "Clientes y personal del panel"),
        (name = "Notifications", description = "Avisos por usuario y broadcast"),
        (name = "Messages", description = "Formulario de contacto y bandeja de entrada"),
        (name = "Campaigns", description = "Campañas de e-mail marketing"),
        (name = "Dashboard", description = "Indicadores del panel"),
        (name = "Configuration", description = "Configuración general y de seguridad")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
