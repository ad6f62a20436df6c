// src/services/notifications_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{NotificationsRepository, UserRepository},
    models::{
        notifications::{CreateNotificacionPayload, Notificacion, TipoNotificacion},
        orders::Prioridad,
    },
};

#[derive(Clone)]
pub struct NotificationsService {
    repo: NotificationsRepository,
    user_repo: UserRepository,
}

impl NotificationsService {
    pub fn new(repo: NotificationsRepository, user_repo: UserRepository) -> Self {
        Self { repo, user_repo }
    }

    // Sin usuario_id el aviso es un broadcast a todos los usuarios activos.
    pub async fn create(&self, payload: CreateNotificacionPayload) -> Result<u64, AppError> {
        let tipo = payload.tipo.unwrap_or(TipoNotificacion::Info);
        let prioridad = payload.prioridad.unwrap_or(Prioridad::Media);

        match payload.usuario_id {
            Some(usuario_id) => {
                self.user_repo
                    .find_by_id(usuario_id)
                    .await?
                    .ok_or(AppError::NoEncontrado("Usuario"))?;

                self.repo
                    .create(usuario_id, &payload.titulo, &payload.mensaje, tipo, prioridad)
                    .await?;
                Ok(1)
            }
            None => {
                let destinatarios = self.user_repo.list_ids_activos().await?;
                self.repo
                    .create_para_todos(
                        &destinatarios,
                        &payload.titulo,
                        &payload.mensaje,
                        tipo,
                        prioridad,
                    )
                    .await
            }
        }
    }

    pub async fn list_por_usuario(&self, usuario_id: Uuid) -> Result<Vec<Notificacion>, AppError> {
        self.repo.list_por_usuario(usuario_id).await
    }

    pub async fn marcar_leida(&self, id: Uuid, usuario_id: Uuid) -> Result<(), AppError> {
        let afectadas = self.repo.marcar_leida(id, usuario_id).await?;
        if afectadas == 0 {
            return Err(AppError::NoEncontrado("Notificación"));
        }
        Ok(())
    }

    pub async fn marcar_todas_leidas(&self, usuario_id: Uuid) -> Result<u64, AppError> {
        self.repo.marcar_todas_leidas(usuario_id).await
    }

    pub async fn delete(&self, id: Uuid, usuario_id: Uuid) -> Result<(), AppError> {
        let borradas = self.repo.delete(id, usuario_id).await?;
        if borradas == 0 {
            return Err(AppError::NoEncontrado("Notificación"));
        }
        Ok(())
    }
}
