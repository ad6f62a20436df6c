// src/db/settings_repo.rs

use serde_json::Value;
use sqlx::PgPool;

use crate::{common::error::AppError, models::settings::Configuracion};

#[derive(Clone)]
pub struct SettingsRepository {
    pool: PgPool,
}

impl SettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, clave: &str) -> Result<Option<Configuracion>, AppError> {
        let configuracion = sqlx::query_as::<_, Configuracion>(
            "SELECT * FROM configuracion WHERE clave = $1",
        )
        .bind(clave)
        .fetch_optional(&self.pool)
        .await?;

        Ok(configuracion)
    }

    // UPSERT: la migración siembra 'general' y 'seguridad', pero un documento
    // borrado a mano no debe romper el PUT.
    pub async fn update(&self, clave: &str, valores: &Value) -> Result<Configuracion, AppError> {
        let configuracion = sqlx::query_as::<_, Configuracion>(
            r#"
            INSERT INTO configuracion (clave, valores)
            VALUES ($1, $2)
            ON CONFLICT (clave)
            DO UPDATE SET valores = EXCLUDED.valores, updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(clave)
        .bind(valores)
        .fetch_one(&self.pool)
        .await?;

        Ok(configuracion)
    }
}
