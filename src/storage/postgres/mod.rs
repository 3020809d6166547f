//! PostgreSQL store backends.

mod products;
mod promotions;

pub use products::PgProductStore;
pub use promotions::PgPromotionStore;
