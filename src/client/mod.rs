//! Client side of the stock service: an HTTP binding to the product routes and
//! a local, eventually consistent mirror of the server collection.

pub mod api;
pub mod synchronizer;
pub mod view;

pub use api::{ClientError, HttpProductApi, ProductApi};
pub use synchronizer::{ConfirmDelete, StockEntry, SyncError, Synchronizer};
pub use view::StockSnapshot;
