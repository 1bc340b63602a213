use crate::domain::Product;
use crate::transport::http::handlers::{health, products};
use crate::transport::http::types::{AppState, ErrorBody, HealthResponse, ProductPayload};
use axum::routing::{get, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        products::create_product_handler,
        products::list_products_handler,
        products::update_product_handler,
        products::delete_product_handler
    ),
    components(schemas(Product, ProductPayload, ErrorBody, HealthResponse))
)]
pub struct ApiDoc;

/// Cross-origin requests are allowed from anywhere.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/produto",
            get(products::list_products_handler).post(products::create_product_handler),
        )
        .route(
            "/produto/:id",
            put(products::update_product_handler)
                .delete(products::delete_product_handler),
        )
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
