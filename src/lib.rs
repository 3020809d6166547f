//! Restaurant catalog and time-scoped menu resolution.
//!
//! Products and promotions are plain CRUD; the interesting part lives in
//! [`domain::menu`], which projects "now" into an IANA timezone and decides
//! which promotions are active for the menu a caller sees.

pub mod context;
pub mod database;
pub mod domain;
pub mod storage;

mod uuids;
