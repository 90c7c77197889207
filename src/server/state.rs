//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Messaging transport used for broadcasts
//! - Dispatch pacing settings
//! - Admin token guarding the API

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{model::broadcast::DispatchConfig, transport::MessageTransport};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: the database handle is a pool, the transport sits
/// behind an `Arc`, and the dispatch config is `Copy`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Messaging transport shared by every broadcast.
    pub transport: Arc<dyn MessageTransport>,

    /// Per-send delay and batch size for broadcasts.
    pub dispatch_config: DispatchConfig,

    /// Bearer token required on every API request.
    pub admin_token: Arc<str>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `transport` - Messaging transport
    /// - `dispatch_config` - Broadcast pacing settings
    /// - `admin_token` - Admin API token
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        transport: Arc<dyn MessageTransport>,
        dispatch_config: DispatchConfig,
        admin_token: String,
    ) -> Self {
        Self {
            db,
            transport,
            dispatch_config,
            admin_token: admin_token.into(),
        }
    }
}
