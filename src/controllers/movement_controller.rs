use chrono_tz::Tz;
use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;
use crate::dto::movement_dto::{MovementResponse, ScanResult, TrackResult};
use crate::models::movement::MovementAction;
use crate::repositories::device_repository::DeviceRepository;
use crate::repositories::movement_repository::MovementRepository;
use crate::repositories::registration_repository::RegistrationRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::normalize_plate;

pub struct MovementController {
    movements: MovementRepository,
    registrations: RegistrationRepository,
    devices: DeviceRepository,
    tz: Tz,
}

impl MovementController {
    pub fn new(pool: PgPool, config: &EnvironmentConfig) -> Self {
        Self {
            movements: MovementRepository::new(pool.clone()),
            registrations: RegistrationRepository::new(pool.clone()),
            devices: DeviceRepository::new(pool),
            tz: config.display_tz(),
        }
    }

    /// Registrar un evento de entrada/salida escaneado por un dispositivo.
    /// La acción se valida antes de tocar la base de datos.
    pub async fn track(
        &self,
        plate: &str,
        action: &str,
        token: Option<String>,
    ) -> Result<TrackResult, AppError> {
        let token = token.filter(|t| !t.is_empty()).ok_or_else(|| {
            AppError::Forbidden("Acceso denegado: token no proporcionado".to_string())
        })?;

        let action = MovementAction::parse(action)
            .ok_or_else(|| AppError::BadRequest("Acción inválida".to_string()))?;

        self.devices
            .find_by_token(&token)
            .await?
            .ok_or_else(|| AppError::Forbidden("Acceso denegado: token inválido".to_string()))?;

        let plate = normalize_plate(plate);
        if !self.registrations.plate_exists(&plate).await? {
            return Err(AppError::NotFound("Vehículo no registrado".to_string()));
        }

        let movement = self.movements.insert(&plate, action).await?;

        log::info!("Movimiento registrado: {} {}", movement.plate, movement.action);

        Ok(TrackResult {
            status: "success".to_string(),
            plate: movement.plate,
            action: movement.action,
        })
    }

    /// Verificar un escaneo de QR: valida token y matrícula registrada
    pub async fn scan(
        &self,
        plate: Option<String>,
        token: Option<String>,
    ) -> Result<ScanResult, AppError> {
        let (plate, token) = match (plate, token) {
            (Some(p), Some(t)) if !p.is_empty() && !t.is_empty() => (p, t),
            _ => {
                return Err(AppError::BadRequest(
                    "Faltan los parámetros plate o token".to_string(),
                ))
            }
        };

        self.devices
            .find_by_token(&token)
            .await?
            .ok_or_else(|| AppError::Forbidden("Acceso denegado: token inválido".to_string()))?;

        let plate = normalize_plate(&plate);
        let registration = self
            .registrations
            .find_by_plate(&plate)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no registrado".to_string()))?;

        Ok(ScanResult {
            plate: registration.plate,
            owner: registration.owner,
            institution: registration.institution,
            pj_number: registration.pj_number,
        })
    }

    pub async fn list(&self) -> Result<Vec<MovementResponse>, AppError> {
        let movements = self.movements.list_all().await?;

        Ok(movements
            .into_iter()
            .map(|m| MovementResponse::from_model(m, &self.tz))
            .collect())
    }

    /// Vaciar el log; la contraseña ya fue verificada por el handler
    pub async fn clear(&self) -> Result<u64, AppError> {
        let deleted = self.movements.clear_all().await?;
        log::info!("Log de movimientos limpiado ({} filas)", deleted);
        Ok(deleted)
    }
}
