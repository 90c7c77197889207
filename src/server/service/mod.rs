//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Broadcast flow, campaign lifecycle and dispatch pacing
//! - **Orchestration**: Coordinating repository calls with the messaging transport
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod broadcast;
pub mod campaign;
pub mod dispatch;
pub mod notification;
