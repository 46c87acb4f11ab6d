//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación,
//! JWT, tokens y otras funcionalidades comunes.

pub mod errors;
pub mod jwt;
pub mod token;
pub mod validation;
