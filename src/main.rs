use portal_api::{app::app, config, handlers::health, state::AppState};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up SESSION_SECRET, service URLs, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!(
        "Starting {} API in {:?} mode",
        config.project_name,
        config.environment
    );

    health::init_uptime();

    let state = AppState::from_config(config)
        .unwrap_or_else(|e| panic!("invalid backend service configuration: {}", e));

    let app = app(state);

    // Allow tests or deployments to override port via env
    let port = std::env::var("PORTAL_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("portal API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
