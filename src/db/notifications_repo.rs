// src/db/notifications_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        notifications::{Notificacion, TipoNotificacion},
        orders::Prioridad,
    },
};

#[derive(Clone)]
pub struct NotificationsRepository {
    pool: PgPool,
}

impl NotificationsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        usuario_id: Uuid,
        titulo: &str,
        mensaje: &str,
        tipo: TipoNotificacion,
        prioridad: Prioridad,
    ) -> Result<Notificacion, AppError> {
        let notificacion = sqlx::query_as::<_, Notificacion>(
            r#"
            INSERT INTO notificaciones (usuario_id, titulo, mensaje, tipo, prioridad)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(usuario_id)
        .bind(titulo)
        .bind(mensaje)
        .bind(tipo)
        .bind(prioridad)
        .fetch_one(&self.pool)
        .await?;

        Ok(notificacion)
    }

    // Broadcast: una fila por destinatario, en una sola sentencia.
    pub async fn create_para_todos(
        &self,
        usuario_ids: &[Uuid],
        titulo: &str,
        mensaje: &str,
        tipo: TipoNotificacion,
        prioridad: Prioridad,
    ) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO notificaciones (usuario_id, titulo, mensaje, tipo, prioridad)
            SELECT destinatario, $2, $3, $4, $5 FROM UNNEST($1::uuid[]) AS destinatario
            "#,
        )
        .bind(usuario_ids)
        .bind(titulo)
        .bind(mensaje)
        .bind(tipo)
        .bind(prioridad)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn list_por_usuario(&self, usuario_id: Uuid) -> Result<Vec<Notificacion>, AppError> {
        let notificaciones = sqlx::query_as::<_, Notificacion>(
            "SELECT * FROM notificaciones WHERE usuario_id = $1 ORDER BY created_at DESC",
        )
        .bind(usuario_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(notificaciones)
    }

    // Marca como leída solo si pertenece al usuario; 0 filas = no era suya o no existe.
    pub async fn marcar_leida(&self, id: Uuid, usuario_id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query(
            "UPDATE notificaciones SET leida = TRUE WHERE id = $1 AND usuario_id = $2",
        )
        .bind(id)
        .bind(usuario_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn marcar_todas_leidas(&self, usuario_id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query(
            "UPDATE notificaciones SET leida = TRUE WHERE usuario_id = $1 AND leida = FALSE",
        )
        .bind(usuario_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: Uuid, usuario_id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM notificaciones WHERE id = $1 AND usuario_id = $2")
            .bind(id)
            .bind(usuario_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
