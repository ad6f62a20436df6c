// src/models/invoices.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "estado_factura", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EstadoFactura {
    Emitida,
    Pagada,
    Cancelada,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Factura {
    pub id: Uuid,
    pub pedido_id: Uuid,
    // Folio FAC-YYYY-NNNN, misma mecánica que el de cotizaciones
    #[schema(example = "FAC-2026-0007")]
    pub numero: String,
    pub rfc_receptor: Option<String>,
    pub subtotal: Decimal,
    pub iva: Decimal,
    pub total: Decimal,
    pub estado: EstadoFactura,
    #[schema(value_type = String, format = Date, example = "2026-01-20")]
    pub fecha_emision: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Una factura se emite siempre a partir de un pedido: los montos salen de él.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFacturaPayload {
    pub pedido_id: Uuid,
    pub rfc_receptor: Option<String>,
}

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct FiltroFacturas {
    pub buscar: Option<String>,
    pub estado: Option<EstadoFactura>,
}
