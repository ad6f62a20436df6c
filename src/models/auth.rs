// src/models/auth.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;
use utoipa::ToSchema;

// --- ENUMS ---

// Mapea el CREATE TYPE rol_usuario de la base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "rol_usuario", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Rol {
    Admin,
    Cliente,
    Empleado,
}

impl Rol {
    // Admin y empleado comparten el panel interno; sólo admin administra.
    pub fn es_admin(&self) -> bool {
        matches!(self, Rol::Admin)
    }

    pub fn es_interno(&self) -> bool {
        matches!(self, Rol::Admin | Rol::Empleado)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "estado_usuario", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EstadoUsuario {
    Activo,
    Inactivo,
    Suspendido,
}

// --- USUARIO ---

// Representa un usuario que viene de la base de datos
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    pub id: Uuid,
    #[schema(example = "María Torres")]
    pub nombre: String,
    #[schema(example = "maria@empresa.mx")]
    pub email: String,

    #[serde(skip_serializing)] // IMPORTANTE: el hash jamás sale en una respuesta
    #[schema(ignore)]
    pub password_hash: String,

    pub telefono: Option<String>,
    pub empresa: Option<String>,
    pub direccion: Option<String>,
    #[schema(example = "TOMA850101AB1")]
    pub rfc: Option<String>,

    pub rol: Rol,
    pub estado: EstadoUsuario,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// --- PAYLOADS ---

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    #[validate(length(min = 2, message = "El nombre debe tener al menos 2 caracteres."))]
    pub nombre: String,
    #[validate(email(message = "El e-mail proporcionado es inválido."))]
    pub email: String,
    #[validate(length(min = 6, message = "La contraseña debe tener al menos 6 caracteres."))]
    pub password: String,
    pub telefono: Option<String>,
    pub empresa: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginPayload {
    #[validate(email(message = "El e-mail proporcionado es inválido."))]
    pub email: String,
    #[validate(length(min = 6, message = "La contraseña debe tener al menos 6 caracteres."))]
    pub password: String,
}

// Alta/edición de usuarios desde el panel de administración
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUsuarioPayload {
    #[validate(length(min = 2, message = "El nombre debe tener al menos 2 caracteres."))]
    pub nombre: String,
    #[validate(email(message = "El e-mail proporcionado es inválido."))]
    pub email: String,
    #[validate(length(min = 6, message = "La contraseña debe tener al menos 6 caracteres."))]
    pub password: String,
    pub telefono: Option<String>,
    pub empresa: Option<String>,
    pub direccion: Option<String>,
    pub rfc: Option<String>,
    pub rol: Rol,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUsuarioPayload {
    #[validate(length(min = 2, message = "El nombre debe tener al menos 2 caracteres."))]
    pub nombre: String,
    #[validate(email(message = "El e-mail proporcionado es inválido."))]
    pub email: String,
    pub telefono: Option<String>,
    pub empresa: Option<String>,
    pub direccion: Option<String>,
    pub rfc: Option<String>,
    pub rol: Rol,
    pub estado: EstadoUsuario,
}

// Respuesta de autenticación: el usuario viaja en el sobre, el token en la cookie.
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub usuario: Usuario,
    pub token: String,
}

// Estructura de datos ("claims") dentro del JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,  // Subject (ID del usuario)
    pub rol: Rol,   // Evita un viaje a la base para decidir el panel
    pub exp: usize, // Expiration time
    pub iat: usize, // Issued At
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solo_admin_administra() {
        assert!(Rol::Admin.es_admin());
        assert!(!Rol::Empleado.es_admin());
        assert!(!Rol::Cliente.es_admin());
    }

    #[test]
    fn empleado_es_interno_pero_cliente_no() {
        assert!(Rol::Admin.es_interno());
        assert!(Rol::Empleado.es_interno());
        assert!(!Rol::Cliente.es_interno());
    }

    #[test]
    fn rol_serializa_en_snake_case() {
        assert_eq!(serde_json::to_string(&Rol::Empleado).unwrap(), "\"empleado\"");
        let rol: Rol = serde_json::from_str("\"cliente\"").unwrap();
        assert_eq!(rol, Rol::Cliente);
    }
}
