use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::movement::Movement;

/// Query string del endpoint de tracking
#[derive(Debug, Deserialize)]
pub struct TrackQuery {
    pub token: Option<String>,
}

/// Query string del endpoint de verificación de escaneo
#[derive(Debug, Deserialize)]
pub struct ScanQuery {
    pub plate: Option<String>,
    pub token: Option<String>,
}

/// Resultado de un tracking exitoso
#[derive(Debug, Serialize)]
pub struct TrackResult {
    pub status: String,
    pub plate: String,
    pub action: String,
}

/// Resultado de la verificación de un escaneo
#[derive(Debug, Serialize)]
pub struct ScanResult {
    pub plate: String,
    pub owner: String,
    pub institution: String,
    pub pj_number: Option<String>,
}

/// Response de un evento de movimiento
#[derive(Debug, Serialize)]
pub struct MovementResponse {
    pub id: Uuid,
    pub plate: String,
    pub action: String,
    pub created_at: String,
    /// Timestamp en la zona horaria configurada (para mostrar)
    pub created_at_local: String,
}

impl MovementResponse {
    pub fn from_model(movement: Movement, tz: &Tz) -> Self {
        let local = movement
            .created_at
            .with_timezone(tz)
            .format("%Y-%m-%d %H:%M:%S %Z")
            .to_string();

        Self {
            id: movement.id,
            plate: movement.plate,
            action: movement.action,
            created_at: movement.created_at.to_rfc3339(),
            created_at_local: local,
        }
    }
}

/// Request para limpiar el log de movimientos
#[derive(Debug, Deserialize)]
pub struct ClearLogsRequest {
    pub password: String,
}

/// Response de la limpieza del log
#[derive(Debug, Serialize)]
pub struct ClearLogsResponse {
    pub success: bool,
    pub message: String,
    pub deleted: u64,
}
