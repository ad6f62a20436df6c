// src/services/messages_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::MessagesRepository,
    models::{
        messages::{CreateMensajePayload, EstadoMensaje, Mensaje},
        orders::Prioridad,
    },
};

#[derive(Clone)]
pub struct MessagesService {
    repo: MessagesRepository,
}

impl MessagesService {
    pub fn new(repo: MessagesRepository) -> Self {
        Self { repo }
    }

    // Formulario público de contacto
    pub async fn create(&self, payload: CreateMensajePayload) -> Result<Mensaje, AppError> {
        self.repo
            .create(
                &payload.remitente,
                &payload.email_remitente,
                &payload.asunto,
                &payload.mensaje,
            )
            .await
    }

    pub async fn list(
        &self,
        buscar: Option<&str>,
        estado: Option<EstadoMensaje>,
        prioridad: Option<Prioridad>,
    ) -> Result<Vec<Mensaje>, AppError> {
        self.repo.list(buscar, estado, prioridad).await
    }

    // Abrir un mensaje 'nuevo' lo deja en 'leido'; los demás estados no cambian.
    pub async fn get(&self, id: Uuid) -> Result<Mensaje, AppError> {
        let mensaje = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NoEncontrado("Mensaje"))?;

        if mensaje.estado == EstadoMensaje::Nuevo {
            return self.repo.update_estado(id, EstadoMensaje::Leido).await;
        }

        Ok(mensaje)
    }

    pub async fn responder(&self, id: Uuid, respuesta: &str) -> Result<Mensaje, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NoEncontrado("Mensaje"))?;

        self.repo.responder(id, respuesta).await
    }

    pub async fn archivar(&self, id: Uuid) -> Result<Mensaje, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::NoEncontrado("Mensaje"))?;

        self.repo.update_estado(id, EstadoMensaje::Archivado).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let borrados = self.repo.delete(id).await?;
        if borrados == 0 {
            return Err(AppError::NoEncontrado("Mensaje"));
        }
        Ok(())
    }
}
