use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use serde_json::json;

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{ConfirmResetRequest, LoginRequest, LoginResponse, ResetPasswordRequest};
use crate::dto::vehicle_dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/reset-password", post(request_reset))
        .route("/reset-password/:token", post(confirm_reset))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let controller = AuthController::new(state.pool.clone(), state.config.clone());
    let response = controller.login(request).await?;
    Ok(Json(response))
}

// Con JWT no hay sesión que invalidar en el servidor; el cliente descarta el token
async fn logout() -> Json<serde_json::Value> {
    Json(json!({
        "success": true,
        "message": "Sesión cerrada exitosamente"
    }))
}

async fn request_reset(
    State(state): State<AppState>,
    Json(request): Json<ResetPasswordRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = AuthController::new(state.pool.clone(), state.config.clone());
    let response = controller.request_password_reset(request).await?;
    Ok(Json(response))
}

async fn confirm_reset(
    State(state): State<AppState>,
    Path(token): Path<String>,
    Json(request): Json<ConfirmResetRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = AuthController::new(state.pool.clone(), state.config.clone());
    let response = controller.confirm_password_reset(&token, request).await?;
    Ok(Json(response))
}
