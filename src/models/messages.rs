// src/models/messages.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::orders::Prioridad;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "estado_mensaje", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EstadoMensaje {
    Nuevo,
    Leido,
    Respondido,
    Archivado,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Mensaje {
    pub id: Uuid,
    #[schema(example = "Juan Pérez")]
    pub remitente: String,
    #[schema(example = "juan@correo.mx")]
    pub email_remitente: String,
    pub destinatario: Option<String>,
    #[schema(example = "Solicitud de información")]
    pub asunto: String,
    pub mensaje: String,
    pub estado: EstadoMensaje,
    pub respondido: bool,
    pub respuesta: Option<String>,
    pub prioridad: Prioridad,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Formulario público de contacto de la página de marketing
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMensajePayload {
    #[validate(length(min = 2, message = "El nombre es obligatorio."))]
    pub remitente: String,
    #[validate(email(message = "El e-mail proporcionado es inválido."))]
    pub email_remitente: String,
    #[validate(length(min = 2, message = "El asunto es obligatorio."))]
    pub asunto: String,
    #[validate(length(min = 5, message = "El mensaje debe tener al menos 5 caracteres."))]
    pub mensaje: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ResponderMensajePayload {
    #[validate(length(min = 2, message = "La respuesta no puede estar vacía."))]
    pub respuesta: String,
}

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct FiltroMensajes {
    pub buscar: Option<String>,
    pub estado: Option<EstadoMensaje>,
    pub prioridad: Option<Prioridad>,
}
