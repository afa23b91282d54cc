//! Service layer for view business logic and orchestration.
//!
//! This module sits between the bot (Discord event) layer and the data (repository)
//! layer:
//!
//! - **Role filtering**: deriving a view's candidate roles from live guild roles
//! - **Selection**: applying dropdown submissions to member roles
//! - **Lifecycle**: publishing, restoring and cleaning up views
//! - **Transport**: the Discord collaborators the services depend on

pub mod lifecycle;
pub mod registry;
pub mod role_filter;
pub mod selection;
pub mod transport;

#[cfg(test)]
mod test;
