use http::Method;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Origins a local board UI is usually served from.
pub const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost,https://localhost,http://127.0.0.1,https://127.0.0.1";

/// Whether `origin` matches one of the configured prefixes. `*` allows all.
#[must_use]
pub fn is_origin_allowed(origin: &str, allowed: &[String]) -> bool {
    allowed
        .iter()
        .any(|prefix| prefix == "*" || origin.starts_with(prefix.as_str()))
}

/// CORS layer for gRPC-Web clients running in a browser.
#[must_use]
pub fn build_cors_layer(cors_origins: Vec<String>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin, _| {
            origin
                .to_str()
                .is_ok_and(|origin| is_origin_allowed(origin, &cors_origins))
        }))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .expose_headers(Any)
}
