//! Services module
//!
//! Este módulo contiene servicios que encapsulan integraciones externas:
//! generación de códigos QR y envío de emails.

pub mod mailer_service;
pub mod qr_service;

pub use mailer_service::MailerService;
pub use qr_service::QrService;
