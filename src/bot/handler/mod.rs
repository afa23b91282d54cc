use sea_orm::DatabaseConnection;
use serenity::all::{
    ChannelId, Context, EventHandler, Guild, GuildChannel, GuildId, Interaction, Message,
    MessageId, Ready, UnavailableGuild,
};
use serenity::async_trait;
use std::sync::atomic::AtomicBool;

use crate::{config::Config, service::registry::ViewRegistry};

pub mod channel;
pub mod guild;
pub mod interaction;
pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub config: Config,
    /// Live view components by message
    pub registry: ViewRegistry,
    /// Set once the restore pass has run, so reconnects do not repeat it.
    pub restored: AtomicBool,
}

impl Handler {
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        Self {
            db,
            config,
            registry: ViewRegistry::new(),
            restored: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.config, ctx, ready).await;
    }

    /// Called once every guild from the ready payload has been cached
    async fn cache_ready(&self, ctx: Context, guilds: Vec<GuildId>) {
        ready::handle_cache_ready(self, ctx, guilds).await;
    }

    /// Called for slash commands and component interactions
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(self, ctx, interaction).await;
    }

    /// Called when a message is deleted
    async fn message_delete(
        &self,
        ctx: Context,
        channel_id: ChannelId,
        deleted_message_id: MessageId,
        guild_id: Option<GuildId>,
    ) {
        message::handle_message_delete(self, ctx, channel_id, deleted_message_id, guild_id).await;
    }

    /// Called when messages are deleted in bulk
    async fn message_delete_bulk(
        &self,
        ctx: Context,
        channel_id: ChannelId,
        multiple_deleted_messages_ids: Vec<MessageId>,
        guild_id: Option<GuildId>,
    ) {
        message::handle_message_delete_bulk(
            self,
            ctx,
            channel_id,
            multiple_deleted_messages_ids,
            guild_id,
        )
        .await;
    }

    /// Called when the bot leaves a guild or a guild becomes unavailable
    async fn guild_delete(&self, ctx: Context, incomplete: UnavailableGuild, full: Option<Guild>) {
        guild::handle_guild_delete(self, ctx, incomplete, full).await;
    }

    /// Called when a channel is deleted from a guild
    async fn channel_delete(
        &self,
        ctx: Context,
        channel: GuildChannel,
        messages: Option<Vec<Message>>,
    ) {
        channel::handle_channel_delete(self, ctx, channel, messages).await;
    }
}
