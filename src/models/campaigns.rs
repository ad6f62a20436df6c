// src/models/campaigns.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "estado_campana", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EstadoCampana {
    Borrador,
    Programada,
    Enviada,
    Cancelada,
}

impl EstadoCampana {
    // Solo un borrador o una campaña programada pueden salir.
    pub fn puede_enviarse(&self) -> bool {
        matches!(self, EstadoCampana::Borrador | EstadoCampana::Programada)
    }
}

// Métricas acumuladas de la campaña. Viajan como JSONB en una sola columna,
// igual que el objeto `metricas` del API original.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct MetricasCampana {
    pub enviados: i64,
    pub abiertos: i64,
    pub clicks: i64,
    pub conversiones: i64,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Campana {
    pub id: Uuid,
    #[schema(example = "Newsletter enero")]
    pub nombre: String,
    pub asunto: String,
    pub contenido: String,
    #[schema(example = "newsletter")]
    pub tipo: String,
    pub estado: EstadoCampana,
    #[sqlx(json)]
    pub metricas: MetricasCampana,
    pub fecha_envio: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampanaPayload {
    #[validate(length(min = 2, message = "El nombre es obligatorio."))]
    pub nombre: String,
    #[validate(length(min = 2, message = "El asunto es obligatorio."))]
    pub asunto: String,
    #[validate(length(min = 2, message = "El contenido es obligatorio."))]
    pub contenido: String,
    #[serde(default)]
    pub tipo: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCampanaPayload {
    #[validate(length(min = 2, message = "El nombre es obligatorio."))]
    pub nombre: String,
    #[validate(length(min = 2, message = "El asunto es obligatorio."))]
    pub asunto: String,
    #[validate(length(min = 2, message = "El contenido es obligatorio."))]
    pub contenido: String,
    pub tipo: String,
    pub estado: EstadoCampana,
}

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct FiltroCampanas {
    pub buscar: Option<String>,
    pub estado: Option<EstadoCampana>,
    pub tipo: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solo_borrador_o_programada_pueden_enviarse() {
        assert!(EstadoCampana::Borrador.puede_enviarse());
        assert!(EstadoCampana::Programada.puede_enviarse());
        assert!(!EstadoCampana::Enviada.puede_enviarse());
        assert!(!EstadoCampana::Cancelada.puede_enviarse());
    }

    #[test]
    fn metricas_arrancan_en_cero() {
        let m = MetricasCampana::default();
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v["enviados"], 0);
        assert_eq!(v["conversiones"], 0);
    }
}
