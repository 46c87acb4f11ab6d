use chrono_tz::Tz;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::config::environment::EnvironmentConfig;
use crate::dto::vehicle_dto::{ApiResponse, RegisterVehicleRequest, RegistrationResponse};
use crate::repositories::device_repository::DeviceRepository;
use crate::repositories::registration_repository::RegistrationRepository;
use crate::services::QrService;
use crate::utils::errors::AppError;
use crate::utils::validation::{normalize_plate, validate_plate};

pub struct VehicleController {
    repository: RegistrationRepository,
    devices: DeviceRepository,
    qr: QrService,
    tz: Tz,
}

impl VehicleController {
    pub fn new(pool: PgPool, config: &EnvironmentConfig) -> Self {
        Self {
            repository: RegistrationRepository::new(pool.clone()),
            devices: DeviceRepository::new(pool),
            qr: QrService::from_config(config),
            tz: config.display_tz(),
        }
    }

    pub async fn register(
        &self,
        request: RegisterVehicleRequest,
    ) -> Result<ApiResponse<RegistrationResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let plate = normalize_plate(&request.plate);
        validate_plate(&plate)
            .map_err(|_| AppError::Validation("Formato de matrícula inválido".to_string()))?;

        // Unicidad de matrícula verificada en la aplicación, no por constraint
        if self.repository.plate_exists(&plate).await? {
            return Err(AppError::Conflict(
                "La matrícula ya está registrada".to_string(),
            ));
        }

        let pj_number = request
            .pj_number
            .map(|pj| pj.trim().to_string())
            .filter(|pj| !pj.is_empty());
        if let Some(ref pj) = pj_number {
            if self.repository.pj_number_exists(pj).await? {
                return Err(AppError::Conflict(format!(
                    "El número PJ {} ya está registrado",
                    pj
                )));
            }
        }

        let mut registration = self
            .repository
            .create(pj_number, plate.clone(), request.owner, request.institution)
            .await?;

        // El QR embebe el token del primer dispositivo autorizado;
        // sin dispositivos el token va vacío (comportamiento heredado)
        let token = self
            .devices
            .first()
            .await?
            .map(|d| d.token)
            .unwrap_or_default();
        let scan_url = self.qr.scan_url(&plate, &token);
        let qr_path = self.qr.save_png(&plate, &scan_url)?;
        self.repository.set_qr_path(registration.id, &qr_path).await?;

        log::info!("Vehículo {} registrado, QR generado en {}", plate, qr_path);

        registration.qr_path = Some(qr_path);

        Ok(ApiResponse::success_with_message(
            RegistrationResponse::from_model(registration, &self.tz),
            "Vehículo registrado exitosamente. Código QR generado".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<RegistrationResponse, AppError> {
        let registration = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(RegistrationResponse::from_model(registration, &self.tz))
    }

    pub async fn list(&self) -> Result<Vec<RegistrationResponse>, AppError> {
        let registrations = self.repository.list_all().await?;

        Ok(registrations
            .into_iter()
            .map(|r| RegistrationResponse::from_model(r, &self.tz))
            .collect())
    }

    /// Borrado definitivo; la contraseña ya fue verificada por el handler
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        log::info!("Vehículo {} eliminado", id);
        Ok(())
    }

    /// Regenerar el PNG del QR de una matrícula registrada
    pub async fn qr_png(&self, plate: &str) -> Result<Vec<u8>, AppError> {
        let plate = normalize_plate(plate);
        let registration = self
            .repository
            .find_by_plate(&plate)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no registrado".to_string()))?;

        let token = self
            .devices
            .first()
            .await?
            .map(|d| d.token)
            .unwrap_or_default();
        let scan_url = self.qr.scan_url(&registration.plate, &token);
        self.qr.render_png(&scan_url)
    }
}
