// src/services/orders_service.rs

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::OrdersRepository,
    models::orders::{
        CreatePedidoPayload, EstadoPedido, Pedido, PedidoCliente, Prioridad, UpdatePedidoPayload,
    },
};

// total = subtotal - descuento + iva. El cliente puede mandar lo que quiera;
// el servidor siempre recalcula y lo que queda en la fila es esto.
pub fn calcular_total(subtotal: Decimal, descuento: Decimal, iva: Decimal) -> Decimal {
    subtotal - descuento + iva
}

#[derive(Clone)]
pub struct OrdersService {
    repo: OrdersRepository,
}

impl OrdersService {
    pub fn new(repo: OrdersRepository) -> Self {
        Self { repo }
    }

    pub async fn create(&self, payload: CreatePedidoPayload) -> Result<Pedido, AppError> {
        let total = calcular_total(payload.subtotal, payload.descuento, payload.iva);

        self.repo
            .create(
                payload.cliente_id,
                &payload.descripcion,
                payload.prioridad.unwrap_or(Prioridad::Media),
                payload.subtotal,
                payload.descuento,
                payload.iva,
                payload.anticipo,
                total,
                payload.fecha_entrega_estimada,
            )
            .await
    }

    pub async fn list(
        &self,
        buscar: Option<&str>,
        estado: Option<EstadoPedido>,
        prioridad: Option<Prioridad>,
    ) -> Result<Vec<Pedido>, AppError> {
        self.repo.list(buscar, estado, prioridad).await
    }

    pub async fn list_por_cliente(&self, cliente_id: Uuid) -> Result<Vec<PedidoCliente>, AppError> {
        self.repo.list_por_cliente(cliente_id).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Pedido, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NoEncontrado("Pedido"))
    }

    // La edición completa pasa por la misma tabla de transiciones que el
    // endpoint de estado: no hay puerta trasera para saltarse el flujo.
    pub async fn update(&self, id: Uuid, payload: UpdatePedidoPayload) -> Result<Pedido, AppError> {
        let actual = self.get(id).await?;
        self.verificar_transicion(actual.estado, payload.estado)?;

        let total = calcular_total(payload.subtotal, payload.descuento, payload.iva);

        self.repo
            .update(
                id,
                &payload.descripcion,
                payload.estado,
                payload.prioridad,
                payload.subtotal,
                payload.descuento,
                payload.iva,
                payload.anticipo,
                total,
                payload.fecha_entrega_estimada,
            )
            .await
    }

    pub async fn cambiar_estado(
        &self,
        id: Uuid,
        destino: EstadoPedido,
    ) -> Result<Pedido, AppError> {
        let actual = self.get(id).await?;
        self.verificar_transicion(actual.estado, destino)?;

        self.repo.update_estado(id, destino).await
    }

    pub async fn cambiar_prioridad(
        &self,
        id: Uuid,
        prioridad: Prioridad,
    ) -> Result<Pedido, AppError> {
        // La prioridad no tiene flujo: cualquier valor es válido en cualquier momento
        self.get(id).await?;
        self.repo.update_prioridad(id, prioridad).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let borrados = self.repo.delete(id).await?;
        if borrados == 0 {
            return Err(AppError::NoEncontrado("Pedido"));
        }
        Ok(())
    }

    fn verificar_transicion(
        &self,
        de: EstadoPedido,
        a: EstadoPedido,
    ) -> Result<(), AppError> {
        if !de.puede_transicionar_a(a) {
            return Err(AppError::TransicionInvalida(
                de.as_str().to_string(),
                a.as_str().to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_es_subtotal_menos_descuento_mas_iva() {
        let total = calcular_total(
            Decimal::new(10_000_00, 2),
            Decimal::new(500_00, 2),
            Decimal::new(1_520_00, 2),
        );
        assert_eq!(total, Decimal::new(11_020_00, 2));
    }

    #[test]
    fn total_sin_descuento_ni_iva() {
        let total = calcular_total(Decimal::new(100, 0), Decimal::ZERO, Decimal::ZERO);
        assert_eq!(total, Decimal::new(100, 0));
    }
}
