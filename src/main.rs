use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use vehicle_gate::config::environment::EnvironmentConfig;
use vehicle_gate::database::{migrations, DatabaseConnection};
use vehicle_gate::routes::create_app_router;
use vehicle_gate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::default();

    // Configurar logging
    let max_level = if config.is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(max_level).init();

    info!("🚗 Vehicle Gate - Registro y control de acceso vehicular");
    info!("========================================================");

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };
    let pool = db_connection.pool().clone();

    migrations::run_migrations(&pool).await?;
    info!("✅ Schema de base de datos listo");

    // Crear router de la API
    let app_state = AppState::new(pool, config.clone());
    let app = create_app_router(app_state);

    let addr: SocketAddr = config.server_addr().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔑 Autenticación:");
    info!("   POST /api/auth/login - Login de administrador");
    info!("   POST /api/auth/logout - Logout");
    info!("   POST /api/auth/reset-password - Solicitar reset por email");
    info!("   POST /api/auth/reset-password/:token - Confirmar reset");
    info!("🚗 Vehículos (JWT):");
    info!("   POST /api/vehicle - Registrar vehículo (genera QR)");
    info!("   GET  /api/vehicle - Listar vehículos");
    info!("   GET  /api/vehicle/:id - Obtener vehículo");
    info!("   DELETE /api/vehicle/:id - Eliminar vehículo (requiere contraseña)");
    info!("   GET  /api/vehicle/qr/:plate - PNG del código QR");
    info!("📱 Dispositivos (JWT):");
    info!("   POST /api/device - Autorizar dispositivo (genera token)");
    info!("   GET  /api/device - Listar dispositivos");
    info!("📋 Log de movimientos (JWT):");
    info!("   GET  /api/logs - Ver log de entradas/salidas");
    info!("   POST /api/logs/clear - Limpiar log (requiere contraseña)");
    info!("📡 Superficie pública de escaneo (token de dispositivo):");
    info!("   GET  /scan-qr?plate=..&token=.. - Verificar escaneo");
    info!("   GET  /track/:plate/:action?token=.. - Registrar entrada/salida");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
