//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean exactamente
//! al schema PostgreSQL.

pub mod admin;
pub mod device;
pub mod movement;
pub mod registration;
