use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::movement::{Movement, MovementAction};
use crate::utils::errors::AppError;

pub struct MovementRepository {
    pool: PgPool,
}

impl MovementRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(
        &self,
        plate: &str,
        action: MovementAction,
    ) -> Result<Movement, AppError> {
        let movement = sqlx::query_as::<_, Movement>(
            r#"
            INSERT INTO movements (id, plate, action, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(plate)
        .bind(action.as_str())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(movement)
    }

    pub async fn list_all(&self) -> Result<Vec<Movement>, AppError> {
        let movements =
            sqlx::query_as::<_, Movement>("SELECT * FROM movements ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(movements)
    }

    /// Borrar todo el log; devuelve el número de filas eliminadas
    pub async fn clear_all(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM movements")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
