use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::settings::CORS_ALLOWED_ORIGINS;

pub fn mk_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_methods([Method::GET, Method::HEAD])
        .allow_origin(AllowOrigin::list(
            CORS_ALLOWED_ORIGINS
                .iter()
                .filter_map(|origin| origin.parse::<HeaderValue>().ok()),
        ))
}
