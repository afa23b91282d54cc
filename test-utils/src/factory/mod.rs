//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting view records with sensible
//! defaults, reducing boilerplate in tests.
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
//!     // Create with defaults
//!     let view = factory::view::create_view(&db, 42, "rank").await?;
//!
//!     // Customize through the builder
//!     let view = factory::view::ViewFactory::new(&db)
//!         .guild_id(42)
//!         .channel_id(7)
//!         .view_type("ping")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `view` - Create persisted view records
//! - `helpers` - Unique id generation shared by factories

pub mod helpers;
pub mod view;

pub use view::create_view;
