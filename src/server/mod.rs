//! Server-side API backend and business logic.
//!
//! This module contains the broadcast engine and the admin API around it. The backend uses
//! Axum as the web framework, SeaORM for database operations, and the Telegram Bot API
//! (over reqwest) as the messaging transport.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Broadcast orchestration, dispatch pacing, campaign lifecycle
//! - **Data Layer** (`data/`) - Audience queries, campaign records, entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Admin token guard
//! - **Transport** (`transport/`) - Messaging transport trait and Telegram implementation
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, transport, dispatch settings)
//! - **Startup** (`startup`) - Initialization of database, HTTP client and transport
//! - **Router** (`router`) - Axum route configuration
//! - **Scheduler** (`scheduler/`) - Cron job for subscription reminders
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** checks the admin token, converts DTOs to params, calls service
//! 3. **Service** resolves audiences, opens and finalizes campaign records, dispatches
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod transport;
