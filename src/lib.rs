pub mod app;
pub mod client;
pub mod domain;
pub mod infra;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::product_repository::ProductRepository;
pub use client::{HttpProductApi, Synchronizer};
pub use domain::{Product, ProductDraft, ProductError, ProductId};
