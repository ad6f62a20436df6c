// src/services/payments_service.rs

use chrono::Utc;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{OrdersRepository, PaymentsRepository},
    models::payments::{CreatePagoPayload, EstadoPago, MetodoPago, Pago},
};

#[derive(Clone)]
pub struct PaymentsService {
    repo: PaymentsRepository,
    orders_repo: OrdersRepository,
}

impl PaymentsService {
    pub fn new(repo: PaymentsRepository, orders_repo: OrdersRepository) -> Self {
        Self { repo, orders_repo }
    }

    pub async fn create(&self, payload: CreatePagoPayload) -> Result<Pago, AppError> {
        // Un pago siempre cuelga de un pedido existente
        self.orders_repo
            .find_by_id(payload.pedido_id)
            .await?
            .ok_or(AppError::NoEncontrado("Pedido"))?;

        self.repo
            .create(
                payload.pedido_id,
                &payload.concepto,
                payload.monto,
                payload.metodo.unwrap_or(MetodoPago::Transferencia),
                payload.referencia_transferencia.as_deref(),
            )
            .await
    }

    pub async fn list(
        &self,
        buscar: Option<&str>,
        estado: Option<EstadoPago>,
        pedido_id: Option<Uuid>,
    ) -> Result<Vec<Pago>, AppError> {
        self.repo.list(buscar, estado, pedido_id).await
    }

    pub async fn list_por_cliente(&self, cliente_id: Uuid) -> Result<Vec<Pago>, AppError> {
        self.repo.list_por_cliente(cliente_id).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Pago, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NoEncontrado("Pago"))
    }

    // Al marcar 'pagado' se sella fecha_pago si aún no la tenía.
    pub async fn cambiar_estado(&self, id: Uuid, estado: EstadoPago) -> Result<Pago, AppError> {
        self.get(id).await?;

        let fecha_pago = match estado {
            EstadoPago::Pagado => Some(Utc::now()),
            _ => None,
        };

        self.repo.update_estado(id, estado, fecha_pago).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let borrados = self.repo.delete(id).await?;
        if borrados == 0 {
            return Err(AppError::NoEncontrado("Pago"));
        }
        Ok(())
    }
}
