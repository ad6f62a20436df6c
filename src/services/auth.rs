// src/services/auth.rs

use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::UserRepository,
    models::auth::{Claims, Rol, Usuario},
};

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    jwt_secret: String,
}

impl AuthService {
    pub fn new(user_repo: UserRepository, jwt_secret: String) -> Self {
        Self { user_repo, jwt_secret }
    }

    // bcrypt es intencionalmente lento: siempre fuera del hilo del runtime.
    pub async fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let password = password.to_owned();
        let hashed = tokio::task::spawn_blocking(move || hash(&password, bcrypt::DEFAULT_COST))
            .await
            .map_err(|e| anyhow::anyhow!("Falló la task de hashing: {}", e))??;

        Ok(hashed)
    }

    // El registro público siempre crea un cliente; los empleados y admins
    // se dan de alta desde el panel.
    pub async fn register(
        &self,
        nombre: &str,
        email: &str,
        password: &str,
        telefono: Option<&str>,
        empresa: Option<&str>,
    ) -> Result<(Usuario, String), AppError> {
        let password_hash = self.hash_password(password).await?;

        let usuario = self
            .user_repo
            .create(
                nombre,
                email,
                &password_hash,
                telefono,
                empresa,
                None,
                None,
                Rol::Cliente,
            )
            .await?;

        let token = self.create_token(usuario.id, usuario.rol)?;
        Ok((usuario, token))
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<(Usuario, String), AppError> {
        let usuario = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or(AppError::CredencialesInvalidas)?;

        let password = password.to_owned();
        let password_hash = usuario.password_hash.clone();

        // La verificación también se ejecuta en un hilo aparte
        let es_valida = tokio::task::spawn_blocking(move || verify(&password, &password_hash))
            .await
            .map_err(|e| anyhow::anyhow!("Falló la task de verificación: {}", e))??;

        if !es_valida {
            return Err(AppError::CredencialesInvalidas);
        }

        let token = self.create_token(usuario.id, usuario.rol)?;
        Ok((usuario, token))
    }

    pub async fn validate_token(&self, token: &str) -> Result<Usuario, AppError> {
        let validation = Validation::default();
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &validation,
        )
        .map_err(|_| AppError::TokenInvalido)?;

        self.user_repo
            .find_by_id(token_data.claims.sub)
            .await?
            .ok_or(AppError::TokenInvalido)
    }

    pub fn create_token(&self, user_id: Uuid, rol: Rol) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::days(7);

        let claims = Claims {
            sub: user_id,
            rol,
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claims_llevan_rol_y_vigencia_de_siete_dias() {
        let now = Utc::now();
        let claims = Claims {
            sub: Uuid::new_v4(),
            rol: Rol::Cliente,
            exp: (now + chrono::Duration::days(7)).timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let dias = (claims.exp - claims.iat) / 86_400;
        assert_eq!(dias, 7);

        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["rol"], "cliente");
    }
}
