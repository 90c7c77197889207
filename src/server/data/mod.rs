//! Database repository layer.
//!
//! This module contains repository structs that handle database operations for the
//! broadcast engine. Repositories use SeaORM entity models internally and return domain
//! models to maintain separation between the data layer and business logic layer.

pub mod audience;
pub mod notification;
