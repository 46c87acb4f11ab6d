//! Repositorios de acceso a datos
//!
//! Una struct por tabla; queries de una sola fila sobre el pool compartido.

pub mod admin_repository;
pub mod device_repository;
pub mod movement_repository;
pub mod registration_repository;
