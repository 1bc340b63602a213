use crate::domain::ProductError;
use crate::transport::http::types::{ErrorBody, ProductPayload, INVALID_FIELDS, PRODUCT_NOT_FOUND};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;

pub type ErrorResponse = (StatusCode, Json<ErrorBody>);

pub fn invalid_fields() -> ErrorResponse {
    (StatusCode::BAD_REQUEST, Json(ErrorBody::new(INVALID_FIELDS)))
}

pub fn not_found() -> ErrorResponse {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new(PRODUCT_NOT_FOUND)))
}

pub fn product_error_response(err: &ProductError) -> ErrorResponse {
    match err {
        ProductError::Validation { .. } => invalid_fields(),
        ProductError::NotFound(_) => not_found(),
    }
}

/// Extracts `(nome, descricao)` from a request body, rejecting missing,
/// empty, wrongly typed or unparseable input before the repository is called.
pub fn required_fields(
    request: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<(String, String), ErrorResponse> {
    let Json(payload) = request.map_err(|e| {
        tracing::debug!(error = %e, "unreadable product body");
        invalid_fields()
    })?;
    match (payload.nome, payload.descricao) {
        (Some(nome), Some(descricao)) if !nome.is_empty() && !descricao.is_empty() => {
            Ok((nome, descricao))
        }
        _ => Err(invalid_fields()),
    }
}
