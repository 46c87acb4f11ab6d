//! Sistema de registro de vehículos y control de acceso vehicular
//!
//! Backend HTTP para registrar vehículos, generar códigos QR escaneables
//! y registrar eventos de entrada/salida desde dispositivos autorizados.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
