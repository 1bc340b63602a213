//! Domain types for the stock service: the product entity and its error taxonomy.

pub mod error;
pub mod product;

pub use error::ProductError;
pub use product::{Product, ProductDraft, ProductId};
