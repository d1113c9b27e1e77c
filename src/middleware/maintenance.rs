use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

pub const MAINTENANCE_PATH: &str = "/maintenance";

/// Paths that keep their original response even when it is a 5xx.
const EXEMPT_PATHS: [&str; 6] = [
    "/maintenance",
    "/fonts",
    "/images",
    "/layout",
    "/loading",
    "/not-found",
];

/// Outermost layer: any 5xx response is replaced with a redirect to the
/// maintenance page, unless the requested path is exempt.
pub async fn maintenance_redirect(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let response = next.run(request).await;

    if response.status().is_server_error() && !is_exempt(&path) {
        tracing::warn!("{} answered {}; redirecting to maintenance", path, response.status());
        return Redirect::temporary(MAINTENANCE_PATH).into_response();
    }

    response
}

fn is_exempt(path: &str) -> bool {
    EXEMPT_PATHS
        .iter()
        .any(|prefix| path == *prefix || path.starts_with(&format!("{}/", prefix)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, routing::get, Router};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/broken", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
            .route("/fonts/inter", get(|| async { StatusCode::BAD_GATEWAY }))
            .route("/fine", get(|| async { "ok" }))
            .layer(axum::middleware::from_fn(maintenance_redirect))
    }

    #[test]
    fn exemptions_match_segment_or_prefix() {
        assert!(is_exempt("/maintenance"));
        assert!(is_exempt("/images/logo.png"));
        assert!(is_exempt("/not-found"));
        assert!(!is_exempt("/imagesque"));
        assert!(!is_exempt("/api/cycles/1"));
    }

    #[tokio::test]
    async fn server_error_redirects_to_maintenance() {
        let request = axum::http::Request::builder()
            .uri("/broken")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()["location"], "/maintenance");
    }

    #[tokio::test]
    async fn exempt_path_keeps_its_response() {
        let request = axum::http::Request::builder()
            .uri("/fonts/inter")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn healthy_responses_pass_through() {
        let request = axum::http::Request::builder()
            .uri("/fine")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
