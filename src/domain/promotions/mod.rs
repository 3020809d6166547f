//! Promotions

mod errors;
pub mod models;
pub mod service;
pub mod store;

pub use errors::PromotionsServiceError;
pub use service::{CatalogPromotionsService, PromotionsService};
pub use store::PromotionStore;
