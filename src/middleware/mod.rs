use axum::{
    body::{Body, to_bytes},
    http::Request,
    middleware::Next,
    response::Response,
};
use tracing::error;

const LOGGED_BODY_LIMIT: usize = 1024;

/// Logs method, path, and body of every 5xx response before handing it back.
pub async fn log_errors(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let response = next.run(req).await;

    if !response.status().is_server_error() {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    match to_bytes(body, LOGGED_BODY_LIMIT).await {
        Ok(bytes) => {
            error!(
                %method,
                path,
                status = %parts.status,
                body = %String::from_utf8_lossy(&bytes),
                "server error"
            );
            // The body was consumed up to the limit; rebuild the response.
            parts.headers.remove(axum::http::header::CONTENT_LENGTH);
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(e) => {
            error!(%method, path, status = %parts.status, "server error (unreadable body: {})", e);
            Response::from_parts(parts, Body::empty())
        }
    }
}
