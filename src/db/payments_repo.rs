// src/db/payments_repo.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::payments::{EstadoPago, MetodoPago, Pago},
};

#[derive(Clone)]
pub struct PaymentsRepository {
    pool: PgPool,
}

impl PaymentsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        pedido_id: Uuid,
        concepto: &str,
        monto: Decimal,
        metodo: MetodoPago,
        referencia_transferencia: Option<&str>,
    ) -> Result<Pago, AppError> {
        let pago = sqlx::query_as::<_, Pago>(
            r#"
            INSERT INTO pagos (pedido_id, concepto, monto, metodo, referencia_transferencia)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(pedido_id)
        .bind(concepto)
        .bind(monto)
        .bind(metodo)
        .bind(referencia_transferencia)
        .fetch_one(&self.pool)
        .await?;

        Ok(pago)
    }

    pub async fn list(
        &self,
        buscar: Option<&str>,
        estado: Option<EstadoPago>,
        pedido_id: Option<Uuid>,
    ) -> Result<Vec<Pago>, AppError> {
        let patron = buscar.map(|s| format!("%{}%", s));

        let pagos = sqlx::query_as::<_, Pago>(
            r#"
            SELECT * FROM pagos
            WHERE ($1::text IS NULL OR concepto ILIKE $1 OR referencia_transferencia ILIKE $1)
              AND ($2::estado_pago IS NULL OR estado = $2)
              AND ($3::uuid IS NULL OR pedido_id = $3)
            ORDER BY created_at DESC
            "#,
        )
        .bind(patron)
        .bind(estado)
        .bind(pedido_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(pagos)
    }

    // Pagos de los pedidos de un cliente (el pago no conoce al cliente,
    // la relación se resuelve por el pedido).
    pub async fn list_por_cliente(&self, cliente_id: Uuid) -> Result<Vec<Pago>, AppError> {
        let pagos = sqlx::query_as::<_, Pago>(
            r#"
            SELECT pg.* FROM pagos pg
            INNER JOIN pedidos p ON p.id = pg.pedido_id
            WHERE p.cliente_id = $1
            ORDER BY pg.created_at DESC
            "#,
        )
        .bind(cliente_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(pagos)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Pago>, AppError> {
        let pago = sqlx::query_as::<_, Pago>("SELECT * FROM pagos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(pago)
    }

    pub async fn update_estado(
        &self,
        id: Uuid,
        estado: EstadoPago,
        fecha_pago: Option<DateTime<Utc>>,
    ) -> Result<Pago, AppError> {
        let pago = sqlx::query_as::<_, Pago>(
            r#"
            UPDATE pagos SET
                estado = $2,
                fecha_pago = COALESCE($3, fecha_pago),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(estado)
        .bind(fecha_pago)
        .fetch_one(&self.pool)
        .await?;

        Ok(pago)
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM pagos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
