use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::device_controller::DeviceController;
use crate::dto::device_dto::{DeviceResponse, RegisterDeviceRequest};
use crate::dto::vehicle_dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_device_router() -> Router<AppState> {
    Router::new()
        .route("/", post(register_device))
        .route("/", get(list_devices))
}

async fn register_device(
    State(state): State<AppState>,
    Json(request): Json<RegisterDeviceRequest>,
) -> Result<Json<ApiResponse<DeviceResponse>>, AppError> {
    let controller = DeviceController::new(state.pool.clone());
    let response = controller.register(request).await?;
    Ok(Json(response))
}

async fn list_devices(
    State(state): State<AppState>,
) -> Result<Json<Vec<DeviceResponse>>, AppError> {
    let controller = DeviceController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}
