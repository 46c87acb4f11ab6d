use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::device::AuthorizedDevice;
use crate::utils::errors::AppError;

pub struct DeviceRepository {
    pool: PgPool,
}

impl DeviceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        mac_address: &str,
        token: &str,
    ) -> Result<AuthorizedDevice, AppError> {
        let device = sqlx::query_as::<_, AuthorizedDevice>(
            r#"
            INSERT INTO authorized_devices (id, mac_address, token, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(mac_address)
        .bind(token)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(device)
    }

    pub async fn mac_exists(&self, mac_address: &str) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM authorized_devices WHERE mac_address = $1)",
        )
        .bind(mac_address)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn find_by_token(&self, token: &str) -> Result<Option<AuthorizedDevice>, AppError> {
        let device = sqlx::query_as::<_, AuthorizedDevice>(
            "SELECT * FROM authorized_devices WHERE token = $1",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(device)
    }

    /// Primer dispositivo autorizado; su token se embebe en los QR generados
    pub async fn first(&self) -> Result<Option<AuthorizedDevice>, AppError> {
        let device = sqlx::query_as::<_, AuthorizedDevice>(
            "SELECT * FROM authorized_devices ORDER BY created_at ASC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(device)
    }

    pub async fn list_all(&self) -> Result<Vec<AuthorizedDevice>, AppError> {
        let devices = sqlx::query_as::<_, AuthorizedDevice>(
            "SELECT * FROM authorized_devices ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(devices)
    }
}
