//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with a `Factory`
//! struct for customization and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let client = factory::create_client(&db).await?;
//!     let tariff = factory::create_tariff(&db).await?;
//!     let subscription = factory::create_subscription(&db, client.id, tariff.id).await?;
//!
//!     // Or everything at once
//!     let (client, tariff, subscription) =
//!         factory::helpers::create_subscribed_client(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let client = factory::client::ClientFactory::new(&db)
//!     .telegram_id(None)
//!     .created_at(Utc::now() - Duration::days(40))
//!     .build()
//!     .await?;
//!
//! let frozen = factory::subscription::SubscriptionFactory::new(&db, client.id, tariff.id)
//!     .status("frozen")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `client` - Create club client entities
//! - `tariff` - Create tariff entities
//! - `subscription` - Create subscription entities
//! - `visit` - Create visit entities
//! - `notification` - Create campaign record entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod client;
pub mod helpers;
pub mod notification;
pub mod subscription;
pub mod tariff;
pub mod visit;

// Re-export commonly used factory functions for concise usage
pub use client::create_client;
pub use notification::create_notification;
pub use subscription::create_subscription;
pub use tariff::create_tariff;
pub use visit::create_visit;
