//! API data transfer objects shared by the HTTP layer.
//!
//! These types define the JSON shapes accepted and returned by the admin API. Server-side
//! domain models convert into and out of them at the controller boundary.

pub mod api;
pub mod notification;
