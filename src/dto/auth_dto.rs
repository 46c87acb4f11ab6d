use serde::{Deserialize, Serialize};
use validator::Validate;

// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: String,

    #[validate(length(min = 6, max = 100))]
    pub password: String,
}

// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: Option<String>,
    pub message: Option<String>,
    pub username: Option<String>,
    pub expires_in: Option<u64>,
}

impl LoginResponse {
    pub fn success(token: String, username: String, expires_in: u64) -> Self {
        Self {
            success: true,
            token: Some(token),
            message: None,
            username: Some(username),
            expires_in: Some(expires_in),
        }
    }
}

// Solicitud de reset de contraseña por email
#[derive(Debug, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[validate(email)]
    pub email: String,
}

// Confirmación de reset con el token recibido por email
#[derive(Debug, Deserialize, Validate)]
pub struct ConfirmResetRequest {
    #[validate(length(min = 8, max = 100))]
    pub new_password: String,
}
