// src/models/settings.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;

// Documento singleton de configuración. Hay dos filas: 'general' y
// 'seguridad'; el contenido es un JSON libre que el panel edita completo.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Configuracion {
    #[schema(example = "general")]
    pub clave: String,
    pub valores: Value,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateConfiguracionPayload {
    pub valores: Value,
}
