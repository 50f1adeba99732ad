use axum::{
    Router,
    http::{HeaderValue, Method},
    response::Json,
    routing::get,
};
use serde_json::{Value, json};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{AppState, handlers::products};

/// Create the full application router: health probe, `/api` routes, CORS,
/// and request tracing.
pub fn create_app_router(state: AppState) -> Router {
    let cors_layer = build_cors_layer(&state);

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", create_api_router())
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Catalog routes under `/api`. Static segments win over captures, so
/// `/products/featured` never collides with `/products/{id}`.
fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::list_products_handler))
        .route("/products/featured", get(products::list_featured_handler))
        .route("/products/{id}", get(products::get_product_handler))
        .route(
            "/products/category/{category}",
            get(products::list_by_category_handler),
        )
}

// Build CORS layer (permissive in dev, allow-list otherwise)
fn build_cors_layer(state: &AppState) -> CorsLayer {
    if state.config().dev_mode {
        return CorsLayer::permissive();
    }

    // Malformed entries are dropped, never widened: an empty list allows
    // no cross-origin caller.
    let origins: Vec<HeaderValue> = state
        .config()
        .cors
        .allowed_origins
        .iter()
        .filter_map(|s| match HeaderValue::from_str(s) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("ignoring invalid CORS origin: {s:?}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET])
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
