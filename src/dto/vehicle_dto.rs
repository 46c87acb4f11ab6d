use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::registration::Registration;

/// Request para registrar un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterVehicleRequest {
    #[validate(length(min = 2, max = 20))]
    pub plate: String,

    #[validate(length(min = 2, max = 100))]
    pub owner: String,

    #[validate(length(min = 2, max = 100))]
    pub institution: String,

    #[validate(length(min = 2, max = 20))]
    pub pj_number: Option<String>,
}

/// Request para eliminar un vehículo (requiere confirmación de contraseña)
#[derive(Debug, Deserialize)]
pub struct DeleteVehicleRequest {
    pub admin_password: String,
}

/// Response de vehículo para la API
#[derive(Debug, Serialize)]
pub struct RegistrationResponse {
    pub id: Uuid,
    pub pj_number: Option<String>,
    pub plate: String,
    pub owner: String,
    pub institution: String,
    pub qr_path: Option<String>,
    pub created_at: String,
    /// Timestamp en la zona horaria configurada (para mostrar)
    pub created_at_local: String,
}

impl RegistrationResponse {
    pub fn from_model(registration: Registration, tz: &Tz) -> Self {
        let local = registration
            .created_at
            .with_timezone(tz)
            .format("%Y-%m-%d %H:%M:%S %Z")
            .to_string();

        Self {
            id: registration.id,
            pj_number: registration.pj_number,
            plate: registration.plate,
            owner: registration.owner,
            institution: registration.institution,
            qr_path: registration.qr_path,
            created_at: registration.created_at.to_rfc3339(),
            created_at_local: local,
        }
    }
}

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn message_only(message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_response_renders_local_timezone() {
        let registration = Registration {
            id: Uuid::new_v4(),
            pj_number: Some("PJ-001".to_string()),
            plate: "KDA 123B".to_string(),
            owner: "Jane Wanjiru".to_string(),
            institution: "Judiciary".to_string(),
            qr_path: None,
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        };

        let response =
            RegistrationResponse::from_model(registration, &chrono_tz::Africa::Nairobi);

        // Nairobi = UTC+3, sin horario de verano
        assert_eq!(response.created_at_local, "2024-06-01 15:00:00 EAT");
        assert!(response.created_at.starts_with("2024-06-01T12:00:00"));
    }
}
