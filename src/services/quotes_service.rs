// src/services/quotes_service.rs

use chrono::{Datelike, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::QuotesRepository,
    models::quotes::{
        Cotizacion, CreateCotizacionPayload, EstadoCotizacion, UpdateCotizacionPayload,
    },
    services::orders_service::calcular_total,
};

pub fn formato_folio(serie: &str, anio: i32, consecutivo: i32) -> String {
    format!("{}-{}-{:04}", serie, anio, consecutivo)
}

// Normaliza al estado efectivo y después filtra. El orden importa: una
// 'enviada' con la vigencia pasada debe salir con ?estado=vencida y NO con
// ?estado=enviada, porque 'vencida' es lo que el cliente ve en la fila.
pub fn filtrar_por_estado_efectivo(
    mut cotizaciones: Vec<Cotizacion>,
    estado: Option<EstadoCotizacion>,
    hoy: NaiveDate,
) -> Vec<Cotizacion> {
    for c in cotizaciones.iter_mut() {
        c.estado = c.estado_efectivo(hoy);
    }

    match estado {
        Some(filtro) => cotizaciones
            .into_iter()
            .filter(|c| c.estado == filtro)
            .collect(),
        None => cotizaciones,
    }
}

#[derive(Clone)]
pub struct QuotesService {
    repo: QuotesRepository,
    pool: PgPool,
}

impl QuotesService {
    pub fn new(repo: QuotesRepository, pool: PgPool) -> Self {
        Self { repo, pool }
    }

    // Folio e inserción van en la misma transacción: si el INSERT falla, el
    // consecutivo no se quema.
    pub async fn create(&self, payload: CreateCotizacionPayload) -> Result<Cotizacion, AppError> {
        let anio = Utc::now().year();
        let total = calcular_total(payload.subtotal, payload.descuento, payload.iva);

        let mut tx = self.pool.begin().await?;

        let consecutivo = self.repo.siguiente_folio(&mut *tx, "COT", anio).await?;
        let numero = formato_folio("COT", anio, consecutivo);

        let cotizacion = self
            .repo
            .insert(
                &mut *tx,
                payload.cliente_id,
                &numero,
                &payload.tipo_servicio,
                &payload.descripcion,
                payload.subtotal,
                payload.descuento,
                payload.iva,
                total,
                payload.fecha_vencimiento,
            )
            .await?;

        tx.commit().await?;

        Ok(cotizacion)
    }

    // El listado reporta el estado efectivo: una 'enviada' con la vigencia
    // pasada sale como 'vencida' sin tocar la fila.
    pub async fn list(
        &self,
        buscar: Option<&str>,
        estado: Option<EstadoCotizacion>,
    ) -> Result<Vec<Cotizacion>, AppError> {
        let hoy = Utc::now().date_naive();
        let cotizaciones = self.repo.list(buscar).await?;
        Ok(filtrar_por_estado_efectivo(cotizaciones, estado, hoy))
    }

    pub async fn list_por_cliente(&self, cliente_id: Uuid) -> Result<Vec<Cotizacion>, AppError> {
        let hoy = Utc::now().date_naive();
        let cotizaciones = self.repo.list_por_cliente(cliente_id).await?;
        Ok(filtrar_por_estado_efectivo(cotizaciones, None, hoy))
    }

    pub async fn get(&self, id: Uuid) -> Result<Cotizacion, AppError> {
        let mut cotizacion = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NoEncontrado("Cotización"))?;

        cotizacion.estado = cotizacion.estado_efectivo(Utc::now().date_naive());
        Ok(cotizacion)
    }

    pub async fn update(
        &self,
        id: Uuid,
        payload: UpdateCotizacionPayload,
    ) -> Result<Cotizacion, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NoEncontrado("Cotización"))?;

        let total = calcular_total(payload.subtotal, payload.descuento, payload.iva);

        self.repo
            .update(
                id,
                &payload.tipo_servicio,
                &payload.descripcion,
                payload.estado,
                payload.subtotal,
                payload.descuento,
                payload.iva,
                total,
                payload.fecha_vencimiento,
            )
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let borrados = self.repo.delete(id).await?;
        if borrados == 0 {
            return Err(AppError::NoEncontrado("Cotización"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn folio_con_padding_de_cuatro() {
        assert_eq!(formato_folio("COT", 2026, 7), "COT-2026-0007");
        assert_eq!(formato_folio("FAC", 2026, 1234), "FAC-2026-1234");
    }

    fn cotizacion(numero: &str, estado: EstadoCotizacion, vence: Option<&str>) -> Cotizacion {
        Cotizacion {
            id: Uuid::new_v4(),
            cliente_id: None,
            numero_consecutivo: numero.into(),
            tipo_servicio: "Desarrollo web".into(),
            descripcion: "Sitio corporativo".into(),
            estado,
            subtotal: Decimal::new(800000, 2),
            descuento: Decimal::ZERO,
            iva: Decimal::new(128000, 2),
            total: Decimal::new(928000, 2),
            fecha_emision: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
            fecha_vencimiento: vence.map(|v| v.parse().unwrap()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn filtro_vencida_incluye_enviadas_con_vigencia_pasada() {
        let hoy = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let filas = vec![
            cotizacion("COT-2026-0001", EstadoCotizacion::Enviada, Some("2026-02-10")),
            cotizacion("COT-2026-0002", EstadoCotizacion::Enviada, Some("2026-04-01")),
            cotizacion("COT-2026-0003", EstadoCotizacion::Borrador, None),
        ];

        let vencidas =
            filtrar_por_estado_efectivo(filas, Some(EstadoCotizacion::Vencida), hoy);

        assert_eq!(vencidas.len(), 1);
        assert_eq!(vencidas[0].numero_consecutivo, "COT-2026-0001");
        assert_eq!(vencidas[0].estado, EstadoCotizacion::Vencida);
    }

    #[test]
    fn filtro_enviada_excluye_las_que_ya_vencieron() {
        let hoy = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let filas = vec![
            cotizacion("COT-2026-0001", EstadoCotizacion::Enviada, Some("2026-02-10")),
            cotizacion("COT-2026-0002", EstadoCotizacion::Enviada, Some("2026-04-01")),
        ];

        let enviadas =
            filtrar_por_estado_efectivo(filas, Some(EstadoCotizacion::Enviada), hoy);

        // Todo lo que sale con el filtro trae exactamente ese estado
        assert_eq!(enviadas.len(), 1);
        assert_eq!(enviadas[0].numero_consecutivo, "COT-2026-0002");
        assert!(enviadas.iter().all(|c| c.estado == EstadoCotizacion::Enviada));
    }

    #[test]
    fn sin_filtro_se_normaliza_el_estado_pero_no_se_descarta_nada() {
        let hoy = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let filas = vec![
            cotizacion("COT-2026-0001", EstadoCotizacion::Enviada, Some("2026-02-10")),
            cotizacion("COT-2026-0002", EstadoCotizacion::Aceptada, Some("2026-02-10")),
        ];

        let todas = filtrar_por_estado_efectivo(filas, None, hoy);

        assert_eq!(todas.len(), 2);
        assert_eq!(todas[0].estado, EstadoCotizacion::Vencida);
        assert_eq!(todas[1].estado, EstadoCotizacion::Aceptada);
    }
}
