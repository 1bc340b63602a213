use crate::domain::{Product, ProductId};
use crate::transport::http::handlers::common::{product_error_response, required_fields};
use crate::transport::http::types::{AppState, ErrorBody, ProductPayload, PRODUCT_REMOVED};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    post,
    path = "/produto",
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Product created", body = Product),
        (status = 400, description = "Missing or empty nome/descricao", body = ErrorBody)
    )
)]
pub async fn create_product_handler(
    State(state): State<AppState>,
    request: Result<Json<ProductPayload>, JsonRejection>,
) -> impl IntoResponse {
    let (nome, descricao) = match required_fields(request) {
        Ok(fields) => fields,
        Err(resp) => return resp.into_response(),
    };

    match state.repository.create(nome, descricao).await {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => product_error_response(&e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/produto",
    responses(
        (status = 200, description = "All products in insertion order", body = Vec<Product>)
    )
)]
pub async fn list_products_handler(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.repository.list().await))
}

#[utoipa::path(
    put,
    path = "/produto/{id}",
    params(
        ("id" = String, Path, description = "Product id")
    ),
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, description = "Missing or empty nome/descricao", body = ErrorBody),
        (status = 404, description = "No product with this id", body = ErrorBody)
    )
)]
pub async fn update_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Result<Json<ProductPayload>, JsonRejection>,
) -> impl IntoResponse {
    let (nome, descricao) = match required_fields(request) {
        Ok(fields) => fields,
        Err(resp) => return resp.into_response(),
    };

    let id = ProductId::from(id);
    match state.repository.update(&id, nome, descricao).await {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => product_error_response(&e).into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/produto/{id}",
    params(
        ("id" = String, Path, description = "Product id")
    ),
    responses(
        (status = 201, description = "Product removed (plain text confirmation)", body = String),
        (status = 404, description = "No product with this id", body = ErrorBody)
    )
)]
pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = ProductId::from(id);
    match state.repository.delete(&id).await {
        Ok(()) => (StatusCode::CREATED, PRODUCT_REMOVED).into_response(),
        Err(e) => product_error_response(&e).into_response(),
    }
}
