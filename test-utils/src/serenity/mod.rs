//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating what
//! Discord's API would return, so conversion code can be tested without a gateway
//! connection.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_guild, create_test_role};
//!
//! let na = create_test_role(111111111, "NA XP 2500", 3);
//! let rank = create_test_role(222222222, "Rank S", 1);
//! let guild = create_test_guild(123456789, "Test Guild", vec![na, rank]);
//! ```
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` - Create Serenity Guild objects
//! - `role::create_test_role` - Create Serenity Role objects

pub mod guild;
pub mod role;

pub use guild::create_test_guild;
pub use role::create_test_role;
