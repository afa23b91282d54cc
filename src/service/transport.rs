//! Discord collaborators consumed by the view services.
//!
//! The services never talk to serenity directly. They receive these traits so the
//! lifecycle and selection logic can run against in-memory fakes in tests, while the
//! bot wires in `bot::discord::SerenityDiscord`.

use serenity::async_trait;
use std::sync::Arc;

use crate::{
    error::transport::TransportError,
    model::{role::GuildRole, selection::ViewMenu, view::ViewEmbed},
};

/// Posts, edits and deletes view messages.
#[async_trait]
pub trait MessageTransport: Send + Sync {
    /// Sends a message carrying the embed and returns its id.
    async fn send_embed(&self, channel_id: u64, embed: &ViewEmbed) -> Result<u64, TransportError>;

    /// Confirms the message still exists and is readable.
    async fn fetch_message(&self, channel_id: u64, message_id: u64) -> Result<(), TransportError>;

    /// Replaces the message's components with the select menu.
    async fn attach_menu(
        &self,
        channel_id: u64,
        message_id: u64,
        menu: &ViewMenu,
    ) -> Result<(), TransportError>;

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), TransportError>;
}

/// Read access to guilds, their channels and their roles.
#[async_trait]
pub trait GuildDirectory: Send + Sync {
    async fn guild_exists(&self, guild_id: u64) -> Result<bool, TransportError>;

    async fn channel_exists(&self, guild_id: u64, channel_id: u64) -> Result<bool, TransportError>;

    /// Lists the guild's roles ordered by `(position, id)` ascending.
    async fn list_roles(&self, guild_id: u64) -> Result<Vec<GuildRole>, TransportError>;
}

/// Adds and removes roles on guild members.
#[async_trait]
pub trait MemberRoles: Send + Sync {
    async fn add_roles(
        &self,
        guild_id: u64,
        member_id: u64,
        role_ids: &[u64],
    ) -> Result<(), TransportError>;

    async fn remove_roles(
        &self,
        guild_id: u64,
        member_id: u64,
        role_ids: &[u64],
    ) -> Result<(), TransportError>;
}

/// The set of Discord collaborators handed to the view services.
#[derive(Clone)]
pub struct Collaborators {
    pub messages: Arc<dyn MessageTransport>,
    pub guilds: Arc<dyn GuildDirectory>,
    pub members: Arc<dyn MemberRoles>,
}
