use axum::{routing::get, routing::post, Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{cycles, flags, health, provider, schedule};
use crate::middleware::{maintenance_redirect, require_session};
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(page_routes())
        .merge(public_api_routes())
        .merge(gated_routes(state))
        // Global middleware
        .layer(axum::middleware::from_fn(maintenance_redirect))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Session-gated surface: every route here answers the fixed 401 envelope
/// when no session resolves.
fn gated_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/cycles/:id", get(cycles::cycle_get))
        .route("/api/schedule/unblock/:id", post(schedule::unblock_post))
        .route("/api/schedule/slots", get(schedule::slots_get))
        .route(
            "/api/session/flags",
            get(flags::flags_get).put(flags::flags_put),
        )
        .route("/schedule", get(schedule::schedule_entry))
        .route_layer(axum::middleware::from_fn(require_session))
        .with_state(state)
}

fn public_api_routes() -> Router {
    Router::new()
        .route("/api/health", get(health::health_get))
        .route("/api/liveness", get(health::liveness_get))
        .route("/api/readiness", get(health::readiness_get))
        .route("/api/:provider/config", get(provider::config_get))
}

fn page_routes() -> Router {
    Router::new().route("/maintenance", get(maintenance_page))
}

async fn maintenance_page() -> Json<Value> {
    Json(json!({
        "status": "maintenance",
        "message": "Estamos em manutenção. Tente novamente em instantes.",
    }))
}
