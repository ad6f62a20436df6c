// src/models/notifications.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::orders::Prioridad;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "tipo_notificacion", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TipoNotificacion {
    Info,
    Exito,
    Advertencia,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notificacion {
    pub id: Uuid,
    pub usuario_id: Uuid,
    #[schema(example = "Pedido confirmado")]
    pub titulo: String,
    pub mensaje: String,
    pub tipo: TipoNotificacion,
    pub prioridad: Prioridad,
    pub leida: bool,
    pub created_at: DateTime<Utc>,
}

// El admin puede notificar a un usuario puntual o a todos (broadcast).
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificacionPayload {
    pub usuario_id: Option<Uuid>,
    #[validate(length(min = 2, message = "El título es obligatorio."))]
    pub titulo: String,
    #[validate(length(min = 2, message = "El mensaje es obligatorio."))]
    pub mensaje: String,
    #[serde(default)]
    pub tipo: Option<TipoNotificacion>,
    #[serde(default)]
    pub prioridad: Option<Prioridad>,
}
