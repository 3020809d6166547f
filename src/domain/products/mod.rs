//! Products

mod errors;
pub mod models;
pub mod service;
pub mod store;

pub use errors::ProductsServiceError;
pub use service::{CatalogProductsService, ProductsService};
pub use store::ProductStore;
