// src/db/messages_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        messages::{EstadoMensaje, Mensaje},
        orders::Prioridad,
    },
};

#[derive(Clone)]
pub struct MessagesRepository {
    pool: PgPool,
}

impl MessagesRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        remitente: &str,
        email_remitente: &str,
        asunto: &str,
        mensaje: &str,
    ) -> Result<Mensaje, AppError> {
        let fila = sqlx::query_as::<_, Mensaje>(
            r#"
            INSERT INTO mensajes (remitente, email_remitente, asunto, mensaje)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(remitente)
        .bind(email_remitente)
        .bind(asunto)
        .bind(mensaje)
        .fetch_one(&self.pool)
        .await?;

        Ok(fila)
    }

    pub async fn list(
        &self,
        buscar: Option<&str>,
        estado: Option<EstadoMensaje>,
        prioridad: Option<Prioridad>,
    ) -> Result<Vec<Mensaje>, AppError> {
        let patron = buscar.map(|s| format!("%{}%", s));

        let mensajes = sqlx::query_as::<_, Mensaje>(
            r#"
            SELECT * FROM mensajes
            WHERE ($1::text IS NULL
                   OR remitente ILIKE $1
                   OR email_remitente ILIKE $1
                   OR asunto ILIKE $1)
              AND ($2::estado_mensaje IS NULL OR estado = $2)
              AND ($3::prioridad_pedido IS NULL OR prioridad = $3)
            ORDER BY created_at DESC
            "#,
        )
        .bind(patron)
        .bind(estado)
        .bind(prioridad)
        .fetch_all(&self.pool)
        .await?;

        Ok(mensajes)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Mensaje>, AppError> {
        let mensaje = sqlx::query_as::<_, Mensaje>("SELECT * FROM mensajes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(mensaje)
    }

    pub async fn update_estado(&self, id: Uuid, estado: EstadoMensaje) -> Result<Mensaje, AppError> {
        let mensaje = sqlx::query_as::<_, Mensaje>(
            "UPDATE mensajes SET estado = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(estado)
        .fetch_one(&self.pool)
        .await?;

        Ok(mensaje)
    }

    pub async fn responder(&self, id: Uuid, respuesta: &str) -> Result<Mensaje, AppError> {
        let mensaje = sqlx::query_as::<_, Mensaje>(
            r#"
            UPDATE mensajes SET
                respuesta = $2,
                respondido = TRUE,
                estado = 'respondido',
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(respuesta)
        .fetch_one(&self.pool)
        .await?;

        Ok(mensaje)
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM mensajes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
