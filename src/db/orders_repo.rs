// src/db/orders_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::orders::{EstadoPedido, Pedido, PedidoCliente, Prioridad},
};

#[derive(Clone)]
pub struct OrdersRepository {
    pool: PgPool,
}

impl OrdersRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        cliente_id: Uuid,
        descripcion: &str,
        prioridad: Prioridad,
        subtotal: Decimal,
        descuento: Decimal,
        iva: Decimal,
        anticipo: Decimal,
        total: Decimal,
        fecha_entrega_estimada: Option<NaiveDate>,
    ) -> Result<Pedido, AppError> {
        let pedido = sqlx::query_as::<_, Pedido>(
            r#"
            INSERT INTO pedidos (
                cliente_id, descripcion, prioridad,
                subtotal, descuento, iva, anticipo, total,
                fecha_entrega_estimada
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(cliente_id)
        .bind(descripcion)
        .bind(prioridad)
        .bind(subtotal)
        .bind(descuento)
        .bind(iva)
        .bind(anticipo)
        .bind(total)
        .bind(fecha_entrega_estimada)
        .fetch_one(&self.pool)
        .await?;

        Ok(pedido)
    }

    // Listado del admin con los mismos filtros que usaba la página:
    // texto libre sobre la descripción y estado/prioridad exactos.
    pub async fn list(
        &self,
        buscar: Option<&str>,
        estado: Option<EstadoPedido>,
        prioridad: Option<Prioridad>,
    ) -> Result<Vec<Pedido>, AppError> {
        let patron = buscar.map(|s| format!("%{}%", s));

        let pedidos = sqlx::query_as::<_, Pedido>(
            r#"
            SELECT * FROM pedidos
            WHERE ($1::text IS NULL OR descripcion ILIKE $1)
              AND ($2::estado_pedido IS NULL OR estado = $2)
              AND ($3::prioridad_pedido IS NULL OR prioridad = $3)
            ORDER BY created_at DESC
            "#,
        )
        .bind(patron)
        .bind(estado)
        .bind(prioridad)
        .fetch_all(&self.pool)
        .await?;

        Ok(pedidos)
    }

    // Vista del cliente: cada pedido anotado con `requiere_pago`. La
    // expresión del SELECT es la regla de `models::orders::requiere_pago`
    // (completado y sin ningún pago en 'pagado') resuelta en SQL.
    pub async fn list_por_cliente(&self, cliente_id: Uuid) -> Result<Vec<PedidoCliente>, AppError> {
        let pedidos = sqlx::query_as::<_, PedidoCliente>(
            r#"
            SELECT p.*,
                   (p.estado = 'completado' AND NOT EXISTS (
                       SELECT 1 FROM pagos pg
                       WHERE pg.pedido_id = p.id AND pg.estado = 'pagado'
                   )) AS requiere_pago
            FROM pedidos p
            WHERE p.cliente_id = $1
            ORDER BY p.created_at DESC
            "#,
        )
        .bind(cliente_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(pedidos)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Pedido>, AppError> {
        let pedido = sqlx::query_as::<_, Pedido>("SELECT * FROM pedidos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(pedido)
    }

    pub async fn update(
        &self,
        id: Uuid,
        descripcion: &str,
        estado: EstadoPedido,
        prioridad: Prioridad,
        subtotal: Decimal,
        descuento: Decimal,
        iva: Decimal,
        anticipo: Decimal,
        total: Decimal,
        fecha_entrega_estimada: Option<NaiveDate>,
    ) -> Result<Pedido, AppError> {
        let pedido = sqlx::query_as::<_, Pedido>(
            r#"
            UPDATE pedidos SET
                descripcion = $2, estado = $3, prioridad = $4,
                subtotal = $5, descuento = $6, iva = $7, anticipo = $8, total = $9,
                fecha_entrega_estimada = $10,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(descripcion)
        .bind(estado)
        .bind(prioridad)
        .bind(subtotal)
        .bind(descuento)
        .bind(iva)
        .bind(anticipo)
        .bind(total)
        .bind(fecha_entrega_estimada)
        .fetch_one(&self.pool)
        .await?;

        Ok(pedido)
    }

    pub async fn update_estado(&self, id: Uuid, estado: EstadoPedido) -> Result<Pedido, AppError> {
        let pedido = sqlx::query_as::<_, Pedido>(
            "UPDATE pedidos SET estado = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(estado)
        .fetch_one(&self.pool)
        .await?;

        Ok(pedido)
    }

    pub async fn update_prioridad(&self, id: Uuid, prioridad: Prioridad) -> Result<Pedido, AppError> {
        let pedido = sqlx::query_as::<_, Pedido>(
            "UPDATE pedidos SET prioridad = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(prioridad)
        .fetch_one(&self.pool)
        .await?;

        Ok(pedido)
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM pedidos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
