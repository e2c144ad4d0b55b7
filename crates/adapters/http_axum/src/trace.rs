//! Trace-context extraction middleware.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use clima_domain::trace::{TRACEPARENT_HEADER, TraceContext};

/// Parse the inbound `traceparent` header, or start a new root when it is
/// absent or malformed, and expose the context as a request extension.
///
/// Handlers pick it up via `Extension<TraceContext>`; a malformed header
/// never fails the request.
pub async fn propagate(mut request: Request, next: Next) -> Response {
    let ctx = request
        .headers()
        .get(TRACEPARENT_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<TraceContext>().ok())
        .unwrap_or_else(TraceContext::new_root);
    request.extensions_mut().insert(ctx);
    next.run(request).await
}
