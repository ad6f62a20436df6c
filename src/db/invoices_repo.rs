// src/db/invoices_repo.rs

use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::invoices::{EstadoFactura, Factura},
};

#[derive(Clone)]
pub struct InvoicesRepository {
    pool: PgPool,
}

impl InvoicesRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // El folio FAC viene de la misma tabla `folios`; el servicio lo pide en
    // la transacción antes de llamar aquí.
    pub async fn insert<'e, E>(
        &self,
        executor: E,
        pedido_id: Uuid,
        numero: &str,
        rfc_receptor: Option<&str>,
        subtotal: Decimal,
        iva: Decimal,
        total: Decimal,
    ) -> Result<Factura, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let factura = sqlx::query_as::<_, Factura>(
            r#"
            INSERT INTO facturas (pedido_id, numero, rfc_receptor, subtotal, iva, total)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(pedido_id)
        .bind(numero)
        .bind(rfc_receptor)
        .bind(subtotal)
        .bind(iva)
        .bind(total)
        .fetch_one(executor)
        .await?;

        Ok(factura)
    }

    pub async fn list(
        &self,
        buscar: Option<&str>,
        estado: Option<EstadoFactura>,
    ) -> Result<Vec<Factura>, AppError> {
        let patron = buscar.map(|s| format!("%{}%", s));

        let facturas = sqlx::query_as::<_, Factura>(
            r#"
            SELECT * FROM facturas
            WHERE ($1::text IS NULL OR numero ILIKE $1 OR rfc_receptor ILIKE $1)
              AND ($2::estado_factura IS NULL OR estado = $2)
            ORDER BY created_at DESC
            "#,
        )
        .bind(patron)
        .bind(estado)
        .fetch_all(&self.pool)
        .await?;

        Ok(facturas)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Factura>, AppError> {
        let factura = sqlx::query_as::<_, Factura>("SELECT * FROM facturas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(factura)
    }

    pub async fn update_estado(&self, id: Uuid, estado: EstadoFactura) -> Result<Factura, AppError> {
        let factura = sqlx::query_as::<_, Factura>(
            "UPDATE facturas SET estado = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(estado)
        .fetch_one(&self.pool)
        .await?;

        Ok(factura)
    }
}
