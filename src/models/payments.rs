// src/models/payments.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// --- ENUMS ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "estado_pago", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EstadoPago {
    Pendiente,
    Procesando,
    // El backend viejo usaba 'aplicado' y 'pagado' indistintamente; aquí hay
    // una sola variante canónica y el alias se acepta en la entrada.
    #[serde(alias = "aplicado")]
    Pagado,
    Rechazado,
    Cancelado,
    Vencido,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "metodo_pago", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MetodoPago {
    Transferencia,
    Tarjeta,
    Efectivo,
    Deposito,
}

// --- PAGO ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pago {
    pub id: Uuid,
    pub pedido_id: Uuid,
    #[schema(example = "Anticipo 30%")]
    pub concepto: String,
    #[schema(example = "3000.00")]
    pub monto: Decimal,
    pub estado: EstadoPago,
    pub metodo: MetodoPago,
    #[schema(example = "SPEI-20260115-0042")]
    pub referencia_transferencia: Option<String>,
    pub fecha_pago: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// --- PAYLOADS ---

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePagoPayload {
    pub pedido_id: Uuid,
    #[validate(length(min = 3, message = "El concepto debe tener al menos 3 caracteres."))]
    pub concepto: String,
    pub monto: Decimal,
    #[serde(default)]
    pub metodo: Option<MetodoPago>,
    pub referencia_transferencia: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CambioEstadoPagoPayload {
    pub estado: EstadoPago,
}

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct FiltroPagos {
    pub buscar: Option<String>,
    pub estado: Option<EstadoPago>,
    pub pedido_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aplicado_es_alias_de_pagado() {
        let estado: EstadoPago = serde_json::from_str("\"aplicado\"").unwrap();
        assert_eq!(estado, EstadoPago::Pagado);
        // pero en la salida siempre es 'pagado'
        assert_eq!(serde_json::to_string(&estado).unwrap(), "\"pagado\"");
    }

    #[test]
    fn estados_en_snake_case() {
        let estado: EstadoPago = serde_json::from_str("\"procesando\"").unwrap();
        assert_eq!(estado, EstadoPago::Procesando);
    }
}
