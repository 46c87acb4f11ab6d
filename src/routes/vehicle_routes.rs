use axum::{
    extract::{Extension, Path, State},
    http::header,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::json;
use uuid::Uuid;

use crate::controllers::auth_controller::AuthController;
use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{
    ApiResponse, DeleteVehicleRequest, RegisterVehicleRequest, RegistrationResponse,
};
use crate::middleware::auth::AuthenticatedAdmin;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", post(register_vehicle))
        .route("/", get(list_vehicles))
        .route("/:id", get(get_vehicle))
        .route("/:id", delete(delete_vehicle))
        .route("/qr/:plate", get(vehicle_qr))
}

async fn register_vehicle(
    State(state): State<AppState>,
    Json(request): Json<RegisterVehicleRequest>,
) -> Result<Json<ApiResponse<RegistrationResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone(), &state.config);
    let response = controller.register(request).await?;
    Ok(Json(response))
}

async fn list_vehicles(
    State(state): State<AppState>,
) -> Result<Json<Vec<RegistrationResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone(), &state.config);
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RegistrationResponse>, AppError> {
    let controller = VehicleController::new(state.pool.clone(), &state.config);
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

/// El borrado exige re-confirmar la contraseña del administrador autenticado
async fn delete_vehicle(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthenticatedAdmin>,
    Path(id): Path<Uuid>,
    Json(request): Json<DeleteVehicleRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let auth = AuthController::new(state.pool.clone(), state.config.clone());
    auth.verify_admin_password(admin.admin_id, &request.admin_password)
        .await?;

    let controller = VehicleController::new(state.pool.clone(), &state.config);
    controller.delete(id).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Vehículo eliminado exitosamente"
    })))
}

async fn vehicle_qr(
    State(state): State<AppState>,
    Path(plate): Path<String>,
) -> Result<Response, AppError> {
    let controller = VehicleController::new(state.pool.clone(), &state.config);
    let png = controller.qr_png(&plate).await?;

    Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
}
