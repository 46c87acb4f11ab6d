//! Controllers de la aplicación
//!
//! Lógica de negocio de cada recurso; los handlers de las rutas delegan aquí.

pub mod auth_controller;
pub mod device_controller;
pub mod movement_controller;
pub mod vehicle_controller;
