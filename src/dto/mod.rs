//! DTOs de la API
//!
//! Requests y responses serializables de cada recurso.

pub mod auth_dto;
pub mod device_dto;
pub mod movement_dto;
pub mod vehicle_dto;
