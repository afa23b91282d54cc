//! Rolebot Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the role
//! bot. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases migrated like production, factories and fixtures for view records,
//! and factories for the Serenity objects the bot converts from.
//!
//! # Overview
//!
//! The test utilities consist of these main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory / fixture**: View records with and without database insertion
//! - **serenity**: Deserialized Serenity `Guild` and `Role` objects
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_view_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_view_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
pub mod serenity;
