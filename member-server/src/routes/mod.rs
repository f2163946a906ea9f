use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::api;
use crate::core::{Config, ServerState};
use crate::middleware;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Member API
        .merge(api::members::router())
        // Health API
        .merge(api::health::router())
}

/// Wrap a stateful router with the full middleware stack
pub fn with_middleware(router: Router, config: &Config) -> Router {
    router
        // Panic -> 500 通用错误体 (最内层, 外层日志能看到 500)
        .layer(CatchPanicLayer::custom(middleware::handle_panic))
        // Timeout - 超时返回 408
        .layer(TimeoutLayer::new(config.request_timeout()))
        // Request logging
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // Trace - Request tracing spans
        .layer(TraceLayer::new_for_http())
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Request ID - set before everything above runs
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
}

/// Build a fully configured application with all middleware and state
pub fn build_app(state: ServerState, config: &Config) -> Router {
    with_middleware(build_router().with_state(state), config)
}
