//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them to test
//! entity-to-domain conversions and other logic that only needs an in-memory model.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let view = fixture::view::entity();
//!
//! let ping = fixture::view::entity_builder()
//!     .view_type("ping")
//!     .build();
//! ```

pub mod view;

pub use view::{entity as view_entity, entity_builder as view_entity_builder};
