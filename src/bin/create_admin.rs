//! Herramienta de aprovisionamiento de administradores
//!
//! Los administradores no se crean desde la API: este binario inserta
//! (o actualiza, si el username ya existe) un administrador con su
//! contraseña hasheada.
//!
//! Uso: create_admin <username> <password> [email]

use anyhow::Result;
use bcrypt::{hash, DEFAULT_COST};
use dotenvy::dotenv;
use uuid::Uuid;

use vehicle_gate::database::{migrations, DatabaseConnection};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("Uso: create_admin <username> <password> [email]");
        std::process::exit(1);
    }

    let username = &args[1];
    let password = &args[2];
    let email: Option<String> = args.get(3).cloned();

    let db = DatabaseConnection::new_default().await?;
    let pool = db.pool().clone();
    migrations::run_migrations(&pool).await?;

    let password_hash = hash(password, DEFAULT_COST)?;

    let result = sqlx::query(
        r#"
        INSERT INTO admins (id, username, email, password_hash, created_at)
        VALUES ($1, $2, $3, $4, now())
        ON CONFLICT (username)
        DO UPDATE SET password_hash = EXCLUDED.password_hash,
                      email = COALESCE(EXCLUDED.email, admins.email)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(username)
    .bind(email)
    .bind(&password_hash)
    .execute(&pool)
    .await?;

    if result.rows_affected() > 0 {
        println!("Administrador '{}' aprovisionado", username);
    } else {
        println!("No se realizaron cambios para '{}'", username);
    }

    Ok(())
}
