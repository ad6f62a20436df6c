// src/db/user_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::auth::{EstadoUsuario, Rol, Usuario},
};

// El repositorio de usuarios, responsable de toda interacción con 'usuarios'
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Usuario>, AppError> {
        let usuario = sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(usuario)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Usuario>, AppError> {
        let usuario = sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(usuario)
    }

    pub async fn create(
        &self,
        nombre: &str,
        email: &str,
        password_hash: &str,
        telefono: Option<&str>,
        empresa: Option<&str>,
        direccion: Option<&str>,
        rfc: Option<&str>,
        rol: Rol,
    ) -> Result<Usuario, AppError> {
        sqlx::query_as::<_, Usuario>(
            r#"
            INSERT INTO usuarios (nombre, email, password_hash, telefono, empresa, direccion, rfc, rol)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(nombre)
        .bind(email)
        .bind(password_hash)
        .bind(telefono)
        .bind(empresa)
        .bind(direccion)
        .bind(rfc)
        .bind(rol)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // Convierte la violación de unicidad en un error más amable
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AppError::EmailYaExiste;
                }
            }
            e.into()
        })
    }

    // Listado del panel: texto libre sobre nombre/email/empresa + rol exacto.
    pub async fn list(
        &self,
        buscar: Option<&str>,
        rol: Option<Rol>,
        estado: Option<EstadoUsuario>,
    ) -> Result<Vec<Usuario>, AppError> {
        let patron = buscar.map(|s| format!("%{}%", s));

        let usuarios = sqlx::query_as::<_, Usuario>(
            r#"
            SELECT * FROM usuarios
            WHERE ($1::text IS NULL OR nombre ILIKE $1 OR email ILIKE $1 OR empresa ILIKE $1)
              AND ($2::rol_usuario IS NULL OR rol = $2)
              AND ($3::estado_usuario IS NULL OR estado = $3)
            ORDER BY nombre ASC
            "#,
        )
        .bind(patron)
        .bind(rol)
        .bind(estado)
        .fetch_all(&self.pool)
        .await?;

        Ok(usuarios)
    }

    pub async fn update(
        &self,
        id: Uuid,
        nombre: &str,
        email: &str,
        telefono: Option<&str>,
        empresa: Option<&str>,
        direccion: Option<&str>,
        rfc: Option<&str>,
        rol: Rol,
        estado: EstadoUsuario,
    ) -> Result<Usuario, AppError> {
        sqlx::query_as::<_, Usuario>(
            r#"
            UPDATE usuarios SET
                nombre = $2, email = $3, telefono = $4, empresa = $5,
                direccion = $6, rfc = $7, rol = $8, estado = $9,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nombre)
        .bind(email)
        .bind(telefono)
        .bind(empresa)
        .bind(direccion)
        .bind(rfc)
        .bind(rol)
        .bind(estado)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AppError::EmailYaExiste;
                }
            }
            e.into()
        })
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM usuarios WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    // Destinatarios de un broadcast de notificaciones
    pub async fn list_ids_activos(&self) -> Result<Vec<Uuid>, AppError> {
        let ids = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM usuarios WHERE estado = 'activo'",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }
}
