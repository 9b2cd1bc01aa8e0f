use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::get,
    Extension, Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers;
use crate::AppState;

/// Origine ammessa dal CORS, letta da CORS_ORIGIN (default: il frontend in
/// locale). Un valore non rappresentabile come header ricade sul default.
fn cors_origin() -> HeaderValue {
    std::env::var("CORS_ORIGIN")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_else(|| HeaderValue::from_static("http://localhost:3000"))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(cors_origin())
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/", get(controllers::root_info))
        .route("/health", get(controllers::health))
        .route(
            "/api/products",
            get(controllers::list_products).post(controllers::create_product),
        )
        .route("/api/products/:id", get(controllers::get_product))
        .route(
            "/api/users",
            get(controllers::list_users).post(controllers::create_user),
        )
        .route("/api/users/:id", get(controllers::get_user))
        .fallback(controllers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}
