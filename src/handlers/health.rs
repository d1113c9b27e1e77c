use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use std::time::Instant;
use sysinfo::{ProcessesToUpdate, System};

use crate::config;

static STARTED: Lazy<Instant> = Lazy::new(Instant::now);

/// Pin the process start instant; called once from main before serving.
pub fn init_uptime() {
    Lazy::force(&STARTED);
}

fn uptime_seconds() -> u64 {
    STARTED.elapsed().as_secs()
}

/// GET /api/health - full health document with a process memory probe
pub async fn health_get() -> impl IntoResponse {
    let now = Utc::now();
    let config = config::config();

    match memory_probe() {
        Ok(memory) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "timestamp": now,
                "uptime": uptime_seconds(),
                "version": config.version,
                "memory": memory,
                "env": config.environment.as_str(),
            })),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "status": "unhealthy",
                "timestamp": now,
                "error": e,
            })),
        ),
    }
}

/// GET /api/liveness
pub async fn liveness_get() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now(),
    }))
}

/// GET /api/readiness
pub async fn readiness_get() -> impl IntoResponse {
    let now = Utc::now();

    if config::config().is_ready() {
        (
            StatusCode::OK,
            Json(json!({ "status": "ready", "timestamp": now })),
        )
    } else {
        tracing::warn!("readiness probe failed: session secret not configured");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "not_ready", "timestamp": now })),
        )
    }
}

fn memory_probe() -> Result<Value, String> {
    let pid = sysinfo::get_current_pid().map_err(|e| e.to_string())?;

    let mut sys = System::new();
    sys.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);

    let process = sys
        .process(pid)
        .ok_or_else(|| "own process not visible to the system probe".to_string())?;

    Ok(json!({
        "rss_bytes": process.memory(),
        "virtual_bytes": process.virtual_memory(),
    }))
}
