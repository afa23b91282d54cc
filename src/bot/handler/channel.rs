use serenity::all::{Context, GuildChannel, Message};

use crate::{
    bot::{discord::SerenityDiscord, handler::Handler},
    service::lifecycle::ViewLifecycleService,
};

/// Handles the channel_delete event by forgetting the channel's views.
///
/// # Arguments
/// - `handler` - Event handler holding the database and view registry
/// - `ctx` - Discord context
/// - `channel` - The deleted guild channel from Discord
/// - `_messages` - Messages that were in the channel if available (unused)
pub async fn handle_channel_delete(
    handler: &Handler,
    ctx: Context,
    channel: GuildChannel,
    _messages: Option<Vec<Message>>,
) {
    let discord = SerenityDiscord::collaborators(&ctx);
    let service = ViewLifecycleService::new(&handler.db, &discord, &handler.registry);

    if let Err(e) = service.handle_channel_deleted(channel.id.get()).await {
        tracing::error!(
            "Failed to remove views of deleted channel {} in guild {}: {}",
            channel.id,
            channel.guild_id,
            e
        );
    }
}
