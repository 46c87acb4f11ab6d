//! Modelo de Registration
//!
//! Registro de vehículos autorizados. La matrícula se guarda siempre en
//! mayúsculas; el número PJ es opcional pero único cuando existe.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Registration principal - mapea exactamente a la tabla registrations
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Registration {
    pub id: Uuid,
    pub pj_number: Option<String>,
    pub plate: String,
    pub owner: String,
    pub institution: String,
    pub qr_path: Option<String>,
    pub created_at: DateTime<Utc>,
}
