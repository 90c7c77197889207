//! HTTP request handlers.
//!
//! Controllers check the admin token, convert DTOs into domain parameters, call a service
//! and convert the result back into a DTO.

pub mod notification;
