mod advice;
mod api;
mod config;
mod storage;

use crate::api::AppState;
use crate::config::AppConfig;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("🚀 Starting MedIntel API Server");
    info!("📋 Configuration loaded");
    info!("   - Server: {}:{}", config.server.host, config.server.port);
    info!("   - CORS origins: {:?}", config.cors.allowed_origins);
    info!("   - Record chat transcripts: {}", config.chat.record_conversations);

    if config.cors.allows_any_origin() {
        info!("⚠️  CORS allows every origin; restrict [cors] allowed_origins for production");
    }

    // In-memory stores live for the whole process
    let state = AppState::new(config.chat);
    info!("💾 In-memory stores ready");

    let app = api::router(state, &config.cors);

    // Start server
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📡 Available endpoints:");
    info!("   GET  /                    - Welcome message");
    info!("   GET  /health              - Health check");
    info!("   POST /users/register      - Register a user");
    info!("   GET  /users/{{user_id}}     - Fetch a user");
    info!("   POST /assessments/        - Submit a health assessment");
    info!("   GET  /assessments/        - List assessments");
    info!("   POST /conversations/      - Log a conversation");
    info!("   GET  /conversations/      - List conversations");
    info!("   POST /conversations/chat  - Ask for health advice");
    info!("   GET  /news/               - Health tips");
    info!("");
    info!("✨ Server is ready to accept requests!");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutting down gracefully");

    Ok(())
}

/// Graceful shutdown handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("🛑 Shutdown signal received");
}
