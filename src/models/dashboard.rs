// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

// Contadores del panel de administración. Una sola consulta agregada.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResumenDashboard {
    #[schema(example = 120)]
    pub total_pedidos: i64,
    #[schema(example = 8)]
    pub pedidos_en_proceso: i64,
    #[schema(example = 95)]
    pub pedidos_completados: i64,
    // Suma de pagos en estado 'pagado'
    #[schema(example = "254300.00")]
    pub ingresos: Decimal,
    #[schema(example = 14)]
    pub pagos_pendientes: i64,
    #[schema(example = 42)]
    pub clientes_activos: i64,
    // Cotizaciones enviadas que siguen sin respuesta
    #[schema(example = 6)]
    pub cotizaciones_abiertas: i64,
    #[schema(example = 3)]
    pub mensajes_nuevos: i64,
}
