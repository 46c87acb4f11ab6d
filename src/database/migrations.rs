//! Migraciones del schema
//!
//! DDL idempotente que se ejecuta al arrancar el servidor. La matrícula
//! NO lleva constraint UNIQUE: su unicidad se verifica en la capa de
//! aplicación antes de cada insert (schema heredado del sistema original).

use sqlx::PgPool;

const CREATE_ADMINS: &str = r#"
CREATE TABLE IF NOT EXISTS admins (
    id UUID PRIMARY KEY,
    username VARCHAR(50) UNIQUE NOT NULL,
    email VARCHAR(120) UNIQUE,
    password_hash TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

const CREATE_REGISTRATIONS: &str = r#"
CREATE TABLE IF NOT EXISTS registrations (
    id UUID PRIMARY KEY,
    pj_number VARCHAR(20) UNIQUE,
    plate VARCHAR(20) NOT NULL,
    owner VARCHAR(100) NOT NULL,
    institution VARCHAR(100) NOT NULL,
    qr_path VARCHAR(255),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

const CREATE_MOVEMENTS: &str = r#"
CREATE TABLE IF NOT EXISTS movements (
    id UUID PRIMARY KEY,
    plate VARCHAR(20) NOT NULL,
    action VARCHAR(10) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

const CREATE_AUTHORIZED_DEVICES: &str = r#"
CREATE TABLE IF NOT EXISTS authorized_devices (
    id UUID PRIMARY KEY,
    mac_address VARCHAR(17) UNIQUE NOT NULL,
    token VARCHAR(64) UNIQUE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

const CREATE_PASSWORD_RESETS: &str = r#"
CREATE TABLE IF NOT EXISTS password_resets (
    id UUID PRIMARY KEY,
    admin_id UUID NOT NULL REFERENCES admins(id),
    token VARCHAR(64) UNIQUE NOT NULL,
    expires_at TIMESTAMPTZ NOT NULL,
    used BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

/// Ejecutar todas las migraciones del schema
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    for ddl in [
        CREATE_ADMINS,
        CREATE_REGISTRATIONS,
        CREATE_MOVEMENTS,
        CREATE_AUTHORIZED_DEVICES,
        CREATE_PASSWORD_RESETS,
    ] {
        sqlx::query(ddl).execute(pool).await?;
    }

    log::info!("Schema de base de datos verificado");
    Ok(())
}
