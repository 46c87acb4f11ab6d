//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;

use chrono_tz::Tz;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    /// URL base pública usada dentro de los códigos QR
    pub base_url: String,
    /// Zona horaria para mostrar timestamps (los datos se guardan en UTC)
    pub display_timezone: String,
    /// Directorio donde se guardan las imágenes QR generadas
    pub qr_output_dir: String,
    pub smtp_host: String,
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
    pub mail_from: String,
    pub cors_origins: Vec<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .expect("PORT must be a valid number");

        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            jwt_expiration: env::var("JWT_EXPIRATION")
                .unwrap_or_else(|_| "28800".to_string())
                .parse()
                .expect("JWT_EXPIRATION must be a valid number"),
            base_url: env::var("BASE_URL")
                .unwrap_or_else(|_| format!("http://{}:{}", host, port)),
            display_timezone: env::var("DISPLAY_TIMEZONE")
                .unwrap_or_else(|_| "Africa/Nairobi".to_string()),
            qr_output_dir: env::var("QR_OUTPUT_DIR").unwrap_or_else(|_| "static".to_string()),
            smtp_host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            smtp_username: env::var("EMAIL_USER").ok(),
            smtp_password: env::var("EMAIL_PASS").ok(),
            mail_from: env::var("MAIL_FROM")
                .unwrap_or_else(|_| "noreply@judiciary.go.ke".to_string()),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_default(),
            host,
            port,
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la dirección del servidor
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Zona horaria de visualización; cae a Africa/Nairobi si es inválida
    pub fn display_tz(&self) -> Tz {
        self.display_timezone
            .parse()
            .unwrap_or(chrono_tz::Africa::Nairobi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> EnvironmentConfig {
        EnvironmentConfig {
            environment: "test".to_string(),
            port: 3000,
            host: "127.0.0.1".to_string(),
            jwt_secret: "secret".to_string(),
            jwt_expiration: 3600,
            base_url: "http://localhost:3000".to_string(),
            display_timezone: "Africa/Nairobi".to_string(),
            qr_output_dir: "static".to_string(),
            smtp_host: "smtp.example.com".to_string(),
            smtp_username: None,
            smtp_password: None,
            mail_from: "noreply@example.com".to_string(),
            cors_origins: vec![],
        }
    }

    #[test]
    fn test_display_tz_parses_known_zone() {
        let config = test_config();
        assert_eq!(config.display_tz(), chrono_tz::Africa::Nairobi);
    }

    #[test]
    fn test_display_tz_falls_back_on_invalid_zone() {
        let mut config = test_config();
        config.display_timezone = "No/Existe".to_string();
        assert_eq!(config.display_tz(), chrono_tz::Africa::Nairobi);
    }

    #[test]
    fn test_server_addr() {
        let config = test_config();
        assert_eq!(config.server_addr(), "127.0.0.1:3000");
    }
}
