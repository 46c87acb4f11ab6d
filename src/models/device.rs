//! Modelo de AuthorizedDevice
//!
//! Dispositivos de escaneo autorizados. La dirección MAC es el ancla de
//! confianza; el bearer token asociado autoriza los requests de scan y
//! tracking. El token no se rota automáticamente.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// AuthorizedDevice principal - mapea exactamente a la tabla authorized_devices
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuthorizedDevice {
    pub id: Uuid,
    pub mac_address: String,
    pub token: String,
    pub created_at: DateTime<Utc>,
}
