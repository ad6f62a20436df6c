// src/db/campaigns_repo.rs

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::campaigns::{Campana, EstadoCampana, MetricasCampana},
};

#[derive(Clone)]
pub struct CampaignsRepository {
    pool: PgPool,
}

impl CampaignsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        nombre: &str,
        asunto: &str,
        contenido: &str,
        tipo: &str,
    ) -> Result<Campana, AppError> {
        let campana = sqlx::query_as::<_, Campana>(
            r#"
            INSERT INTO campanas (nombre, asunto, contenido, tipo)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(nombre)
        .bind(asunto)
        .bind(contenido)
        .bind(tipo)
        .fetch_one(&self.pool)
        .await?;

        Ok(campana)
    }

    pub async fn list(
        &self,
        buscar: Option<&str>,
        estado: Option<EstadoCampana>,
        tipo: Option<&str>,
    ) -> Result<Vec<Campana>, AppError> {
        let patron = buscar.map(|s| format!("%{}%", s));

        let campanas = sqlx::query_as::<_, Campana>(
            r#"
            SELECT * FROM campanas
            WHERE ($1::text IS NULL OR nombre ILIKE $1 OR asunto ILIKE $1)
              AND ($2::estado_campana IS NULL OR estado = $2)
              AND ($3::text IS NULL OR tipo = $3)
            ORDER BY created_at DESC
            "#,
        )
        .bind(patron)
        .bind(estado)
        .bind(tipo)
        .fetch_all(&self.pool)
        .await?;

        Ok(campanas)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Campana>, AppError> {
        let campana = sqlx::query_as::<_, Campana>("SELECT * FROM campanas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(campana)
    }

    pub async fn update(
        &self,
        id: Uuid,
        nombre: &str,
        asunto: &str,
        contenido: &str,
        tipo: &str,
        estado: EstadoCampana,
    ) -> Result<Campana, AppError> {
        let campana = sqlx::query_as::<_, Campana>(
            r#"
            UPDATE campanas SET
                nombre = $2, asunto = $3, contenido = $4, tipo = $5, estado = $6,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nombre)
        .bind(asunto)
        .bind(contenido)
        .bind(tipo)
        .bind(estado)
        .fetch_one(&self.pool)
        .await?;

        Ok(campana)
    }

    // El envío sella estado, métricas y fecha en una sola actualización.
    pub async fn marcar_enviada(
        &self,
        id: Uuid,
        metricas: &MetricasCampana,
        fecha_envio: DateTime<Utc>,
    ) -> Result<Campana, AppError> {
        let metricas_json = serde_json::to_value(metricas)
            .map_err(|e| anyhow::anyhow!("Métricas no serializables: {}", e))?;

        let campana = sqlx::query_as::<_, Campana>(
            r#"
            UPDATE campanas SET
                estado = 'enviada',
                metricas = $2,
                fecha_envio = $3,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(metricas_json)
        .bind(fecha_envio)
        .fetch_one(&self.pool)
        .await?;

        Ok(campana)
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM campanas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    // Tamaño de la audiencia al momento del envío (clientes activos)
    pub async fn contar_destinatarios(&self) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM usuarios WHERE rol = 'cliente' AND estado = 'activo'",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }
}
