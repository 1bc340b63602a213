use crate::app::product_repository::ProductRepository;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<ProductRepository>,
}

impl AppState {
    pub fn new(repository: Arc<ProductRepository>) -> Self {
        Self { repository }
    }
}

/// Body of `POST /produto` and `PUT /produto/{id}`.
///
/// Both fields are optional at the framing level so that a missing field is
/// reported as an invalid field rather than as a JSON rejection.
#[derive(Deserialize, Serialize, Debug, Default, ToSchema)]
pub struct ProductPayload {
    #[serde(default)]
    #[schema(example = "Caneta")]
    pub nome: Option<String>,
    #[serde(default)]
    #[schema(example = "Azul")]
    pub descricao: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// Number of products currently held in memory.
    pub products: usize,
}

pub const INVALID_FIELDS: &str = "Campos Inválidos";
pub const PRODUCT_NOT_FOUND: &str = "Produto não encontrado";
pub const PRODUCT_REMOVED: &str = "Produto removido com sucesso";
