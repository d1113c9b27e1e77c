use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::Value;

/// Success-path response for proxied backend calls: the payload passes through
/// untouched, with either a fixed 200 or the status the service itself
/// reported, depending on the route's contract.
#[derive(Debug)]
pub struct ProxyResponse {
    pub status: StatusCode,
    pub payload: Value,
}

impl ProxyResponse {
    /// Fixed 200 regardless of what the upstream reported.
    pub fn ok(payload: Value) -> Self {
        Self {
            status: StatusCode::OK,
            payload,
        }
    }

    /// Echo the service-reported status. An upstream status outside the valid
    /// range is reported as a bad gateway.
    pub fn passthrough(status: u16, payload: Value) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
            payload,
        }
    }
}

impl IntoResponse for ProxyResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.payload)).into_response()
    }
}
