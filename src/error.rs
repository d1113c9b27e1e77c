// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

/// Message shown for both missing-session and backend-failure envelopes.
/// Clients match on this string; keep it byte-for-byte stable.
pub const USER_DATA_ERROR: &str = "Erro ao obter os dados do Usuário.";

pub const LOGIN_REQUIRED: &str = "You must be logged in.";

/// HTTP API error with appropriate status codes and client-facing bodies
#[derive(Debug)]
pub enum ApiError {
    // 401 Unauthorized - no usable session on a gated route
    Unauthenticated,

    // 404 Not Found - unknown config provider
    UnknownProvider(String),

    // 500 Internal Server Error - backend service call failed
    ServiceFailure(String),

    // 500 Internal Server Error - required environment variable absent
    MissingConfig(&'static str),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Unauthenticated => 401,
            ApiError::UnknownProvider(_) => 404,
            ApiError::ServiceFailure(_) => 500,
            ApiError::MissingConfig(_) => 500,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> String {
        match self {
            ApiError::Unauthenticated => LOGIN_REQUIRED.to_string(),
            ApiError::UnknownProvider(provider) => format!("Unknown provider: {}", provider),
            ApiError::ServiceFailure(msg) => msg.clone(),
            ApiError::MissingConfig(var) => format!("{} is not set", var),
        }
    }

    /// Convert to JSON response body.
    ///
    /// Session and proxy failures use the portal's `{message, error, status}`
    /// envelope; config failures use the bare `{error}` body the client
    /// integrations expect.
    pub fn to_json(&self) -> Value {
        match self {
            ApiError::Unauthenticated | ApiError::ServiceFailure(_) => json!({
                "message": USER_DATA_ERROR,
                "error": self.message(),
                "status": self.status_code(),
            }),
            ApiError::UnknownProvider(_) | ApiError::MissingConfig(_) => json!({
                "error": self.message(),
            }),
        }
    }
}

impl From<crate::services::ServiceError> for ApiError {
    fn from(err: crate::services::ServiceError) -> Self {
        // The failure envelope carries the underlying error text verbatim
        ApiError::ServiceFailure(err.to_string())
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthenticated_envelope_shape() {
        let body = ApiError::Unauthenticated.to_json();
        assert_eq!(body["message"], "Erro ao obter os dados do Usuário.");
        assert_eq!(body["error"], "You must be logged in.");
        assert_eq!(body["status"], 401);
    }

    #[test]
    fn service_failure_embeds_error_text() {
        let body = ApiError::ServiceFailure("connection refused".to_string()).to_json();
        assert_eq!(body["message"], "Erro ao obter os dados do Usuário.");
        assert_eq!(body["error"], "connection refused");
        assert_eq!(body["status"], 500);
    }

    #[test]
    fn missing_config_names_the_variable() {
        let err = ApiError::MissingConfig("BLIP_APP_KEY");
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.to_json(), json!({ "error": "BLIP_APP_KEY is not set" }));
    }
}
