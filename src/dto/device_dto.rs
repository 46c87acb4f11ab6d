use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::device::AuthorizedDevice;

/// Request para autorizar un dispositivo de escaneo
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterDeviceRequest {
    #[validate(length(min = 17, max = 17))]
    pub mac_address: String,
}

/// Response de dispositivo autorizado
///
/// Incluye el token: el flujo original lo muestra al administrador en el
/// momento del alta para que lo configure en el dispositivo.
#[derive(Debug, Serialize)]
pub struct DeviceResponse {
    pub id: Uuid,
    pub mac_address: String,
    pub token: String,
    pub created_at: String,
}

impl From<AuthorizedDevice> for DeviceResponse {
    fn from(device: AuthorizedDevice) -> Self {
        Self {
            id: device.id,
            mac_address: device.mac_address,
            token: device.token,
            created_at: device.created_at.to_rfc3339(),
        }
    }
}
