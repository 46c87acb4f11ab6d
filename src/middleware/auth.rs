//! Middleware de autenticación JWT
//!
//! Protege las rutas administrativas: extrae el bearer token, lo valida
//! y verifica que el administrador siga existiendo en la base de datos.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::repositories::admin_repository::AdminRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{verify_token, JwtConfig};

/// Administrador autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedAdmin {
    pub admin_id: Uuid,
    pub username: String,
}

/// Middleware de autenticación para rutas administrativas
pub async fn admin_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_str| auth_str.to_str().ok())
        .and_then(|auth_str| auth_str.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Token de autorización requerido".to_string()))?;

    let claims = verify_token(auth_header, &JwtConfig::from(&state.config))?;

    let admin_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("ID de administrador inválido".to_string()))?;

    let admin = AdminRepository::new(state.pool.clone())
        .find_by_id(admin_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Administrador no encontrado".to_string()))?;

    request.extensions_mut().insert(AuthenticatedAdmin {
        admin_id: admin.id,
        username: admin.username,
    });

    Ok(next.run(request).await)
}
