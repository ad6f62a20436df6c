// src/services/campaigns_service.rs

use chrono::Utc;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::CampaignsRepository,
    models::campaigns::{
        Campana, CreateCampanaPayload, EstadoCampana, MetricasCampana, UpdateCampanaPayload,
    },
};

#[derive(Clone)]
pub struct CampaignsService {
    repo: CampaignsRepository,
}

impl CampaignsService {
    pub fn new(repo: CampaignsRepository) -> Self {
        Self { repo }
    }

    pub async fn create(&self, payload: CreateCampanaPayload) -> Result<Campana, AppError> {
        self.repo
            .create(
                &payload.nombre,
                &payload.asunto,
                &payload.contenido,
                payload.tipo.as_deref().unwrap_or("newsletter"),
            )
            .await
    }

    pub async fn list(
        &self,
        buscar: Option<&str>,
        estado: Option<EstadoCampana>,
        tipo: Option<&str>,
    ) -> Result<Vec<Campana>, AppError> {
        self.repo.list(buscar, estado, tipo).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Campana, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NoEncontrado("Campaña"))
    }

    pub async fn update(&self, id: Uuid, payload: UpdateCampanaPayload) -> Result<Campana, AppError> {
        self.get(id).await?;

        self.repo
            .update(
                id,
                &payload.nombre,
                &payload.asunto,
                &payload.contenido,
                &payload.tipo,
                payload.estado,
            )
            .await
    }

    // Enviar: solo desde borrador o programada. Sella metricas.enviados con
    // la audiencia actual y conserva los acumulados de aperturas/clicks.
    pub async fn enviar(&self, id: Uuid) -> Result<Campana, AppError> {
        let campana = self.get(id).await?;

        if !campana.estado.puede_enviarse() {
            return Err(AppError::EstadoCampanaInvalido);
        }

        let destinatarios = self.repo.contar_destinatarios().await?;
        let metricas = MetricasCampana {
            enviados: destinatarios,
            ..campana.metricas
        };

        self.repo.marcar_enviada(id, &metricas, Utc::now()).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let borrados = self.repo.delete(id).await?;
        if borrados == 0 {
            return Err(AppError::NoEncontrado("Campaña"));
        }
        Ok(())
    }
}
