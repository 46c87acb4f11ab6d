use axum::{
    extract::{Extension, Path, Query, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::auth_controller::AuthController;
use crate::controllers::movement_controller::MovementController;
use crate::dto::movement_dto::{
    ClearLogsRequest, ClearLogsResponse, MovementResponse, ScanQuery, ScanResult, TrackQuery,
    TrackResult,
};
use crate::middleware::auth::AuthenticatedAdmin;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas públicas de escaneo: autorizadas por token de dispositivo, no por JWT
pub fn create_scan_router() -> Router<AppState> {
    Router::new()
        .route("/scan-qr", get(scan_qr))
        .route("/track/:plate/:action", get(track_movement))
}

/// Rutas administrativas del log de movimientos
pub fn create_logs_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_logs))
        .route("/clear", post(clear_logs))
}

async fn scan_qr(
    State(state): State<AppState>,
    Query(query): Query<ScanQuery>,
) -> Result<Json<ScanResult>, AppError> {
    let controller = MovementController::new(state.pool.clone(), &state.config);
    let response = controller.scan(query.plate, query.token).await?;
    Ok(Json(response))
}

async fn track_movement(
    State(state): State<AppState>,
    Path((plate, action)): Path<(String, String)>,
    Query(query): Query<TrackQuery>,
) -> Result<Json<TrackResult>, AppError> {
    let controller = MovementController::new(state.pool.clone(), &state.config);
    let response = controller.track(&plate, &action, query.token).await?;
    Ok(Json(response))
}

async fn list_logs(
    State(state): State<AppState>,
) -> Result<Json<Vec<MovementResponse>>, AppError> {
    let controller = MovementController::new(state.pool.clone(), &state.config);
    let response = controller.list().await?;
    Ok(Json(response))
}

/// Limpiar el log exige re-confirmar la contraseña del administrador
async fn clear_logs(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthenticatedAdmin>,
    Json(request): Json<ClearLogsRequest>,
) -> Result<Json<ClearLogsResponse>, AppError> {
    let auth = AuthController::new(state.pool.clone(), state.config.clone());
    auth.verify_admin_password(admin.admin_id, &request.password)
        .await?;

    let controller = MovementController::new(state.pool.clone(), &state.config);
    let deleted = controller.clear().await?;

    Ok(Json(ClearLogsResponse {
        success: true,
        message: format!("Log limpiado ({} entradas eliminadas)", deleted),
        deleted,
    }))
}
