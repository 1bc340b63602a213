use crate::domain::error::ProductError;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

/// Opaque product identifier. Assigned once by the repository, never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Generates a fresh random (v4) identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stock item as it travels over the wire: `{id, nome, descricao}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    #[schema(value_type = String, example = "3f2b8c1e-6f5e-4d0b-9a3c-2b7d9e1f4a60")]
    pub id: ProductId,
    #[serde(rename = "nome")]
    #[schema(example = "Caneta")]
    pub name: String,
    #[serde(rename = "descricao")]
    #[schema(example = "Azul")]
    pub description: String,
}

impl Product {
    pub(crate) fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
        }
    }
}

/// A validated name/description pair. The only way to build one is through
/// [`ProductDraft::new`], so holding a draft means both fields are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    name: String,
    description: String,
}

impl ProductDraft {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ProductError> {
        let name = name.into();
        let description = description.into();
        if name.is_empty() {
            return Err(ProductError::Validation { field: "nome" });
        }
        if description.is_empty() {
            return Err(ProductError::Validation { field: "descricao" });
        }
        Ok(Self { name, description })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn draft_rejects_empty_fields() {
        assert_eq!(
            ProductDraft::new("", "Azul"),
            Err(ProductError::Validation { field: "nome" })
        );
        assert_eq!(
            ProductDraft::new("Caneta", ""),
            Err(ProductError::Validation { field: "descricao" })
        );
        assert!(ProductDraft::new(" ", " ").is_ok());
    }

    #[test]
    fn generated_ids_are_distinct() {
        let a = ProductId::generate();
        let b = ProductId::generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn product_uses_portuguese_field_names_on_the_wire() {
        let product = Product {
            id: ProductId::from("abc"),
            name: "Caneta".to_string(),
            description: "Azul".to_string(),
        };
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value, json!({"id": "abc", "nome": "Caneta", "descricao": "Azul"}));
        let back: Product = serde_json::from_value(value).unwrap();
        assert_eq!(back, product);
    }
}
