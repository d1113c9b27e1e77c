use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::auth::{decode_token, Session};
use crate::config;
use crate::error::ApiError;

/// Session middleware for gated routes: resolves the caller's session from the
/// bearer token and injects it as an extension. Absence of a session answers
/// with the fixed 401 envelope and nothing else runs.
pub async fn require_session(
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let session = resolve_session(&headers).ok_or(ApiError::Unauthenticated)?;

    request.extensions_mut().insert(session);

    Ok(next.run(request).await)
}

/// Purely a read: decode the presented token into a Session, or nothing.
fn resolve_session(headers: &HeaderMap) -> Option<Session> {
    let token = extract_bearer(headers)?;
    let secret = &config::config().security.session_secret;

    let claims = match decode_token(&token, secret) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!("session resolution failed: {}", e);
            return None;
        }
    };

    // Authenticated sessions always carry at least one role; a token without
    // any is not a session this layer accepts
    if claims.roles.is_empty() {
        tracing::warn!("rejected session token with empty role set for {}", claims.sub);
        return None;
    }

    Some(Session::from_claims(claims, token))
}

/// Extract the bearer token from the Authorization header
fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let auth_str = headers.get("authorization")?.to_str().ok()?;

    let token = auth_str.strip_prefix("Bearer ")?;
    if token.trim().is_empty() {
        return None;
    }

    Some(token.to_string())
}
