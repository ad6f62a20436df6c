// src/services/invoices_service.rs

use chrono::{Datelike, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{InvoicesRepository, OrdersRepository, QuotesRepository},
    models::invoices::{CreateFacturaPayload, EstadoFactura, Factura},
    services::quotes_service::formato_folio,
};

#[derive(Clone)]
pub struct InvoicesService {
    repo: InvoicesRepository,
    orders_repo: OrdersRepository,
    // Dueño de la tabla `folios`; la serie FAC sale de ahí también
    quotes_repo: QuotesRepository,
    pool: PgPool,
}

impl InvoicesService {
    pub fn new(
        repo: InvoicesRepository,
        orders_repo: OrdersRepository,
        quotes_repo: QuotesRepository,
        pool: PgPool,
    ) -> Self {
        Self { repo, orders_repo, quotes_repo, pool }
    }

    // La factura se emite a partir del pedido: los montos son los del pedido,
    // no los que mande el cliente.
    pub async fn create(&self, payload: CreateFacturaPayload) -> Result<Factura, AppError> {
        let pedido = self
            .orders_repo
            .find_by_id(payload.pedido_id)
            .await?
            .ok_or(AppError::NoEncontrado("Pedido"))?;

        let anio = Utc::now().year();

        let mut tx = self.pool.begin().await?;

        let consecutivo = self.quotes_repo.siguiente_folio(&mut *tx, "FAC", anio).await?;
        let numero = formato_folio("FAC", anio, consecutivo);

        let factura = self
            .repo
            .insert(
                &mut *tx,
                pedido.id,
                &numero,
                payload.rfc_receptor.as_deref(),
                pedido.subtotal,
                pedido.iva,
                pedido.total,
            )
            .await?;

        tx.commit().await?;

        Ok(factura)
    }

    pub async fn list(
        &self,
        buscar: Option<&str>,
        estado: Option<EstadoFactura>,
    ) -> Result<Vec<Factura>, AppError> {
        self.repo.list(buscar, estado).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Factura, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NoEncontrado("Factura"))
    }

    pub async fn cambiar_estado(&self, id: Uuid, estado: EstadoFactura) -> Result<Factura, AppError> {
        self.get(id).await?;
        self.repo.update_estado(id, estado).await
    }
}
