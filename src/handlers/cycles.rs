use axum::extract::{Extension, Path, State};

use crate::auth::Session;
use crate::error::ApiError;
use crate::middleware::response::ProxyResponse;
use crate::state::AppState;

/// GET /api/cycles/:id - class lookup for one cycle
///
/// Reports a fixed 200 on success regardless of the upstream status; the
/// unblock route echoes its upstream status instead. Inherited contract,
/// preserved as-is.
pub async fn cycle_get(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
) -> Result<ProxyResponse, ApiError> {
    let reply = state.classes.class_by_cycle(&id, &session.token).await?;

    Ok(ProxyResponse::ok(reply.payload))
}
