//! Rutas de la API
//!
//! Construcción del router completo: superficie pública de escaneo
//! y rutas administrativas protegidas por JWT.

pub mod auth_routes;
pub mod device_routes;
pub mod movement_routes;
pub mod vehicle_routes;

use axum::{middleware::from_fn_with_state, response::Json, routing::get, Router};
use serde_json::json;

use crate::middleware::auth::admin_auth_middleware;
use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Crear el router completo de la aplicación
pub fn create_app_router(state: AppState) -> Router {
    let admin_guard = from_fn_with_state(state.clone(), admin_auth_middleware);

    Router::new()
        .route("/health", get(health_check))
        // Superficie pública de escaneo (token de dispositivo)
        .merge(movement_routes::create_scan_router())
        // Login y reset de contraseña
        .nest("/api/auth", auth_routes::create_auth_router())
        // Rutas administrativas (JWT)
        .nest(
            "/api/vehicle",
            vehicle_routes::create_vehicle_router().route_layer(admin_guard.clone()),
        )
        .nest(
            "/api/device",
            device_routes::create_device_router().route_layer(admin_guard.clone()),
        )
        .nest(
            "/api/logs",
            movement_routes::create_logs_router().route_layer(admin_guard),
        )
        .layer(cors_middleware(&state.config.cors_origins))
        .with_state(state)
}

/// Health check simple
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "vehicle-gate",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
