use axum::http::Method;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Cross-origin access from any origin, for the read-only API.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
}
