//! View lifecycle service for publishing, restoring and cleaning up role views.
//!
//! This module provides the `ViewLifecycleService`, which keeps three things in agreement:
//! the view records in the database, the view messages in Discord, and the live
//! components in the `ViewRegistry`. At most one view of each kind exists per guild.
//!
//! The service is organized into separate modules by concern:
//! - `publish` - Replacing a guild's view of a kind with a new message
//! - `restore` - Re-attaching persisted views to their messages after a restart
//! - `cleanup` - Forgetting views whose message, channel or guild is gone
//! - `select` - Routing dropdown interactions to the live component

pub mod cleanup;
pub mod publish;
pub mod restore;
pub mod select;

use sea_orm::DatabaseConnection;

use crate::service::{registry::ViewRegistry, transport::Collaborators};

/// Service providing the lifecycle operations of role views.
///
/// The service layer contains business logic and coordinates between the view repository
/// (data layer), the Discord collaborators and the registry of live components. It does
/// not perform direct database queries or talk to serenity itself.
pub struct ViewLifecycleService<'a> {
    /// Database connection for accessing view records via the repository
    db: &'a DatabaseConnection,
    /// Discord collaborators for messages, guild lookups and member roles
    discord: &'a Collaborators,
    /// Live components by message
    registry: &'a ViewRegistry,
}

impl<'a> ViewLifecycleService<'a> {
    /// Creates a new ViewLifecycleService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `discord` - Discord collaborators
    /// - `registry` - Registry of live view components
    ///
    /// # Returns
    /// - `ViewLifecycleService` - New service instance
    pub fn new(
        db: &'a DatabaseConnection,
        discord: &'a Collaborators,
        registry: &'a ViewRegistry,
    ) -> Self {
        Self {
            db,
            discord,
            registry,
        }
    }
}
