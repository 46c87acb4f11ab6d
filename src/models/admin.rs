//! Modelo de Admin
//!
//! Administradores del sistema y sus tokens de reset de contraseña.
//! Los administradores se crean con la herramienta de aprovisionamiento
//! `create_admin`, nunca desde la API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Admin principal - mapea exactamente a la tabla admins
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Admin {
    pub id: Uuid,
    pub username: String,
    pub email: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Token de reset de contraseña - mapea a la tabla password_resets
#[derive(Debug, Clone, FromRow)]
pub struct PasswordReset {
    pub id: Uuid,
    pub admin_id: Uuid,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub used: bool,
    pub created_at: DateTime<Utc>,
}

impl PasswordReset {
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_reset_expiry() {
        let reset = PasswordReset {
            id: Uuid::new_v4(),
            admin_id: Uuid::new_v4(),
            token: "abc".to_string(),
            expires_at: Utc::now() - chrono::Duration::minutes(1),
            used: false,
            created_at: Utc::now() - chrono::Duration::hours(1),
        };
        assert!(reset.is_expired());

        let reset = PasswordReset {
            expires_at: Utc::now() + chrono::Duration::hours(1),
            ..reset
        };
        assert!(!reset.is_expired());
    }
}
