use axum::{
    extract::{Extension, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use std::collections::HashMap;

use crate::auth::Session;
use crate::state::AppState;

/// GET /api/session/flags - the caller's UI flag map
pub async fn flags_get(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Json<HashMap<String, Value>> {
    Json(state.flags.read(&session.user_id))
}

/// PUT /api/session/flags - replace the caller's UI flag map
pub async fn flags_put(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(flags): Json<HashMap<String, Value>>,
) -> StatusCode {
    state.flags.write(&session.user_id, flags);
    StatusCode::NO_CONTENT
}
