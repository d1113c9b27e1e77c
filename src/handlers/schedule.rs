use axum::{
    extract::{Extension, Path, Query, State},
    response::{Json, Redirect},
};
use serde::Deserialize;

use crate::auth::{AccessLevel, Session};
use crate::booking::{available_slots, is_date_within_limit, DayAvailability};
use crate::error::ApiError;
use crate::middleware::response::ProxyResponse;
use crate::state::AppState;

/// Where GET /schedule sends each capability.
pub const MANAGE_VIEW: &str = "/schedule/manage";
pub const BOOK_VIEW: &str = "/schedule/book";

/// POST /api/schedule/unblock/:id - release a blocked schedule entry
///
/// The upstream status is echoed to the caller, payload untouched.
pub async fn unblock_post(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
) -> Result<ProxyResponse, ApiError> {
    let reply = state.schedule.unblock(&id, &session.token).await?;

    Ok(ProxyResponse::passthrough(reply.status, reply.payload))
}

#[derive(Debug, Deserialize)]
pub struct SlotsQuery {
    pub date: String,
    pub class_id: Option<String>,
}

/// GET /api/schedule/slots?date=dd/mm/yyyy[&class_id=...]
///
/// `null` means nothing available; out-of-limit dates short-circuit without a
/// backend call.
pub async fn slots_get(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Query(query): Query<SlotsQuery>,
) -> Json<Option<DayAvailability>> {
    if !is_date_within_limit(&query.date) {
        return Json(None);
    }

    Json(
        available_slots(
            state.schedule.as_ref(),
            &query.date,
            query.class_id.as_deref(),
            &session.token,
        )
        .await,
    )
}

/// GET /schedule - capability branch, not an authorization error: admins land
/// on schedule management, everyone else on self-booking.
pub async fn schedule_entry(Extension(session): Extension<Session>) -> Redirect {
    match session.access {
        AccessLevel::Admin => Redirect::to(MANAGE_VIEW),
        AccessLevel::Participant => Redirect::to(BOOK_VIEW),
    }
}
