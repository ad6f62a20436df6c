// src/models/quotes.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "estado_cotizacion", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EstadoCotizacion {
    Borrador,
    Enviada,
    Aceptada,
    Rechazada,
    Vencida,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Cotizacion {
    pub id: Uuid,
    pub cliente_id: Option<Uuid>,
    // Folio COT-YYYY-NNNN, asignado por el servidor al crear
    #[schema(example = "COT-2026-0042")]
    pub numero_consecutivo: String,
    #[schema(example = "Desarrollo web")]
    pub tipo_servicio: String,
    pub descripcion: String,
    pub estado: EstadoCotizacion,
    #[schema(example = "8000.00")]
    pub subtotal: Decimal,
    pub descuento: Decimal,
    pub iva: Decimal,
    pub total: Decimal,
    #[schema(value_type = String, format = Date, example = "2026-01-10")]
    pub fecha_emision: NaiveDate,
    #[schema(value_type = Option<String>, format = Date, example = "2026-02-10")]
    pub fecha_vencimiento: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cotizacion {
    // Una cotización enviada cuya vigencia ya pasó se reporta como vencida,
    // aunque la fila todavía diga 'enviada'.
    pub fn estado_efectivo(&self, hoy: NaiveDate) -> EstadoCotizacion {
        match (self.estado, self.fecha_vencimiento) {
            (EstadoCotizacion::Enviada, Some(vence)) if vence < hoy => EstadoCotizacion::Vencida,
            (estado, _) => estado,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCotizacionPayload {
    pub cliente_id: Option<Uuid>,
    #[validate(length(min = 2, message = "El tipo de servicio es obligatorio."))]
    pub tipo_servicio: String,
    #[validate(length(min = 3, message = "La descripción debe tener al menos 3 caracteres."))]
    pub descripcion: String,
    pub subtotal: Decimal,
    #[serde(default)]
    pub descuento: Decimal,
    pub iva: Decimal,
    pub fecha_vencimiento: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCotizacionPayload {
    #[validate(length(min = 2, message = "El tipo de servicio es obligatorio."))]
    pub tipo_servicio: String,
    #[validate(length(min = 3, message = "La descripción debe tener al menos 3 caracteres."))]
    pub descripcion: String,
    pub estado: EstadoCotizacion,
    pub subtotal: Decimal,
    pub descuento: Decimal,
    pub iva: Decimal,
    pub fecha_vencimiento: Option<NaiveDate>,
}

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct FiltroCotizaciones {
    pub buscar: Option<String>,
    pub estado: Option<EstadoCotizacion>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cotizacion(estado: EstadoCotizacion, vence: Option<NaiveDate>) -> Cotizacion {
        Cotizacion {
            id: Uuid::new_v4(),
            cliente_id: None,
            numero_consecutivo: "COT-2026-0001".into(),
            tipo_servicio: "Desarrollo web".into(),
            descripcion: "Sitio corporativo".into(),
            estado,
            subtotal: Decimal::new(800000, 2),
            descuento: Decimal::ZERO,
            iva: Decimal::new(128000, 2),
            total: Decimal::new(928000, 2),
            fecha_emision: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
            fecha_vencimiento: vence,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn enviada_pasada_de_fecha_se_reporta_vencida() {
        let hoy = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let c = cotizacion(
            EstadoCotizacion::Enviada,
            NaiveDate::from_ymd_opt(2026, 2, 10),
        );
        assert_eq!(c.estado_efectivo(hoy), EstadoCotizacion::Vencida);
    }

    #[test]
    fn enviada_vigente_sigue_enviada() {
        let hoy = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let c = cotizacion(
            EstadoCotizacion::Enviada,
            NaiveDate::from_ymd_opt(2026, 2, 10),
        );
        assert_eq!(c.estado_efectivo(hoy), EstadoCotizacion::Enviada);
    }

    #[test]
    fn aceptada_no_vence() {
        let hoy = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        let c = cotizacion(
            EstadoCotizacion::Aceptada,
            NaiveDate::from_ymd_opt(2026, 2, 10),
        );
        assert_eq!(c.estado_efectivo(hoy), EstadoCotizacion::Aceptada);
    }
}
