use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::registration::Registration;
use crate::utils::errors::AppError;

pub struct RegistrationRepository {
    pool: PgPool,
}

impl RegistrationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        pj_number: Option<String>,
        plate: String,
        owner: String,
        institution: String,
    ) -> Result<Registration, AppError> {
        let registration = sqlx::query_as::<_, Registration>(
            r#"
            INSERT INTO registrations (id, pj_number, plate, owner, institution, qr_path, created_at)
            VALUES ($1, $2, $3, $4, $5, NULL, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(pj_number)
        .bind(plate)
        .bind(owner)
        .bind(institution)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(registration)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Registration>, AppError> {
        let registration =
            sqlx::query_as::<_, Registration>("SELECT * FROM registrations WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(registration)
    }

    pub async fn find_by_plate(&self, plate: &str) -> Result<Option<Registration>, AppError> {
        let registration =
            sqlx::query_as::<_, Registration>("SELECT * FROM registrations WHERE plate = $1")
                .bind(plate)
                .fetch_optional(&self.pool)
                .await?;

        Ok(registration)
    }

    pub async fn list_all(&self) -> Result<Vec<Registration>, AppError> {
        let registrations = sqlx::query_as::<_, Registration>(
            "SELECT * FROM registrations ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(registrations)
    }

    pub async fn plate_exists(&self, plate: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM registrations WHERE plate = $1)")
                .bind(plate)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn pj_number_exists(&self, pj_number: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM registrations WHERE pj_number = $1)")
                .bind(pj_number)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn set_qr_path(&self, id: Uuid, qr_path: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE registrations SET qr_path = $2 WHERE id = $1")
            .bind(id)
            .bind(qr_path)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM registrations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
        }

        Ok(())
    }
}
