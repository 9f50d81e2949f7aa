//! API layer - HTTP entry points and middleware.

pub mod http;

use std::any::Any;
use std::sync::Arc;

use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use storyloom_shared::ErrorResponse;

use crate::app::App;

/// Build the full router: routes, tracing, panic guard and optional CORS.
pub fn router(app: Arc<App>, cors_allowed_origins: Option<&str>) -> Router {
    let mut router = http::routes()
        .with_state(app)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = cors_allowed_origins.and_then(build_cors_layer) {
        router = router.layer(cors);
    }

    router
}

/// Last-resort handler for a panicking request.
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    log_panic(err.as_ref());
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("Server error")),
    )
        .into_response()
}

/// Panic handler for narration routes: same status, plus fallback text.
pub(crate) fn narration_panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    log_panic(err.as_ref());
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::narration("Server error")),
    )
        .into_response()
}

fn log_panic(err: &(dyn Any + Send)) {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = %detail, "Request handler panicked");
}

/// `*` allows any origin; otherwise a comma-separated list.
/// Returns `None` when no usable origin is given.
fn build_cors_layer(allowed_origins: &str) -> Option<CorsLayer> {
    let allowed_origins = allowed_origins.trim();
    if allowed_origins.is_empty() {
        return None;
    }

    let mut cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    if allowed_origins == "*" {
        cors = cors.allow_origin(AnyOrigin);
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        if origins.is_empty() {
            return None;
        }

        cors = cors.allow_origin(origins);
    }

    Some(cors)
}
