//! SeaORM entity models for the club database.

pub mod prelude;

pub mod client;
pub mod notification;
pub mod subscription;
pub mod tariff;
pub mod visit;
