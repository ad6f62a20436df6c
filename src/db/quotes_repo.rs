// src/db/quotes_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::quotes::{Cotizacion, EstadoCotizacion},
};

#[derive(Clone)]
pub struct QuotesRepository {
    pool: PgPool,
}

impl QuotesRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  FOLIOS
    // =========================================================================

    // Incrementa y devuelve el consecutivo de la serie/año. El UPSERT es
    // atómico; el servicio lo envuelve en la misma transacción que el INSERT
    // para no quemar folios si la inserción falla.
    pub async fn siguiente_folio<'e, E>(
        &self,
        executor: E,
        serie: &str,
        anio: i32,
    ) -> Result<i32, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let consecutivo = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO folios (serie, anio, consecutivo)
            VALUES ($1, $2, 1)
            ON CONFLICT (serie, anio)
            DO UPDATE SET consecutivo = folios.consecutivo + 1
            RETURNING consecutivo
            "#,
        )
        .bind(serie)
        .bind(anio)
        .fetch_one(executor)
        .await?;

        Ok(consecutivo)
    }

    // =========================================================================
    //  COTIZACIONES
    // =========================================================================

    pub async fn insert<'e, E>(
        &self,
        executor: E,
        cliente_id: Option<Uuid>,
        numero_consecutivo: &str,
        tipo_servicio: &str,
        descripcion: &str,
        subtotal: Decimal,
        descuento: Decimal,
        iva: Decimal,
        total: Decimal,
        fecha_vencimiento: Option<NaiveDate>,
    ) -> Result<Cotizacion, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let cotizacion = sqlx::query_as::<_, Cotizacion>(
            r#"
            INSERT INTO cotizaciones (
                cliente_id, numero_consecutivo, tipo_servicio, descripcion,
                subtotal, descuento, iva, total, fecha_vencimiento
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(cliente_id)
        .bind(numero_consecutivo)
        .bind(tipo_servicio)
        .bind(descripcion)
        .bind(subtotal)
        .bind(descuento)
        .bind(iva)
        .bind(total)
        .bind(fecha_vencimiento)
        .fetch_one(executor)
        .await?;

        Ok(cotizacion)
    }

    // El filtro por estado NO va aquí: el servicio filtra sobre el estado
    // efectivo (una 'enviada' vencida cuenta como 'vencida').
    pub async fn list(&self, buscar: Option<&str>) -> Result<Vec<Cotizacion>, AppError> {
        let patron = buscar.map(|s| format!("%{}%", s));

        let cotizaciones = sqlx::query_as::<_, Cotizacion>(
            r#"
            SELECT * FROM cotizaciones
            WHERE ($1::text IS NULL
                   OR numero_consecutivo ILIKE $1
                   OR tipo_servicio ILIKE $1
                   OR descripcion ILIKE $1)
            ORDER BY created_at DESC
            "#,
        )
        .bind(patron)
        .fetch_all(&self.pool)
        .await?;

        Ok(cotizaciones)
    }

    pub async fn list_por_cliente(&self, cliente_id: Uuid) -> Result<Vec<Cotizacion>, AppError> {
        let cotizaciones = sqlx::query_as::<_, Cotizacion>(
            "SELECT * FROM cotizaciones WHERE cliente_id = $1 ORDER BY created_at DESC",
        )
        .bind(cliente_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(cotizaciones)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Cotizacion>, AppError> {
        let cotizacion = sqlx::query_as::<_, Cotizacion>("SELECT * FROM cotizaciones WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(cotizacion)
    }

    pub async fn update(
        &self,
        id: Uuid,
        tipo_servicio: &str,
        descripcion: &str,
        estado: EstadoCotizacion,
        subtotal: Decimal,
        descuento: Decimal,
        iva: Decimal,
        total: Decimal,
        fecha_vencimiento: Option<NaiveDate>,
    ) -> Result<Cotizacion, AppError> {
        let cotizacion = sqlx::query_as::<_, Cotizacion>(
            r#"
            UPDATE cotizaciones SET
                tipo_servicio = $2, descripcion = $3, estado = $4,
                subtotal = $5, descuento = $6, iva = $7, total = $8,
                fecha_vencimiento = $9,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(tipo_servicio)
        .bind(descripcion)
        .bind(estado)
        .bind(subtotal)
        .bind(descuento)
        .bind(iva)
        .bind(total)
        .bind(fecha_vencimiento)
        .fetch_one(&self.pool)
        .await?;

        Ok(cotizacion)
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM cotizaciones WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
