//! Servicio de envío de emails
//!
//! Envía el email de reset de contraseña por SMTP con STARTTLS.

use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::environment::EnvironmentConfig;
use crate::utils::errors::AppError;

pub struct MailerService {
    config: EnvironmentConfig,
}

impl MailerService {
    pub fn new(config: EnvironmentConfig) -> Self {
        Self { config }
    }

    /// Link de reset que recibe el administrador
    pub fn reset_link(&self, token: &str) -> String {
        format!(
            "{}/reset-password/{}",
            self.config.base_url.trim_end_matches('/'),
            token
        )
    }

    pub async fn send_reset_email(&self, to: &str, token: &str) -> Result<(), AppError> {
        let (username, password) = match (&self.config.smtp_username, &self.config.smtp_password) {
            (Some(u), Some(p)) => (u.clone(), p.clone()),
            _ => {
                return Err(AppError::Mail(
                    "SMTP no configurado (EMAIL_USER / EMAIL_PASS)".to_string(),
                ))
            }
        };

        let from: Mailbox = self
            .config
            .mail_from
            .parse()
            .map_err(|e| AppError::Mail(format!("Remitente inválido: {}", e)))?;
        let to: Mailbox = to
            .parse()
            .map_err(|e| AppError::Mail(format!("Destinatario inválido: {}", e)))?;

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject("Password Reset")
            .body(format!(
                "Click the link to reset your password: {}",
                self.reset_link(token)
            ))
            .map_err(|e| AppError::Mail(format!("Error construyendo el email: {}", e)))?;

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)
            .map_err(|e| AppError::Mail(format!("Error configurando SMTP: {}", e)))?
            .credentials(Credentials::new(username, password))
            .build();

        mailer
            .send(message)
            .await
            .map_err(|e| AppError::Mail(format!("Error enviando email: {}", e)))?;

        log::info!("Email de reset enviado");
        Ok(())
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
            base_url: "http://gate.example.com/".to_string(),
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
    fn test_reset_link_trims_trailing_slash() {
        let mailer = MailerService::new(test_config());
        assert_eq!(
            mailer.reset_link("tok123"),
            "http://gate.example.com/reset-password/tok123"
        );
    }

    #[tokio::test]
    async fn test_send_fails_without_smtp_credentials() {
        let mailer = MailerService::new(test_config());
        let result = mailer.send_reset_email("admin@example.com", "tok123").await;
        assert!(matches!(result, Err(AppError::Mail(_))));
    }
}
