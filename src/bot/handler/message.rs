use serenity::all::{ChannelId, Context, GuildId, MessageId};

use crate::{
    bot::{discord::SerenityDiscord, handler::Handler},
    service::lifecycle::ViewLifecycleService,
};

/// Forgets the view attached to a deleted guild message, if any.
pub async fn handle_message_delete(
    handler: &Handler,
    ctx: Context,
    _channel_id: ChannelId,
    deleted_message_id: MessageId,
    guild_id: Option<GuildId>,
) {
    let Some(guild_id) = guild_id else {
        return;
    };

    let discord = SerenityDiscord::collaborators(&ctx);
    let service = ViewLifecycleService::new(&handler.db, &discord, &handler.registry);

    if let Err(e) = service
        .handle_message_deleted(guild_id.get(), deleted_message_id.get())
        .await
    {
        tracing::error!(
            "Failed to remove view for deleted message {}: {}",
            deleted_message_id,
            e
        );
    }
}

/// Forgets the views attached to bulk-deleted guild messages.
pub async fn handle_message_delete_bulk(
    handler: &Handler,
    ctx: Context,
    _channel_id: ChannelId,
    deleted_message_ids: Vec<MessageId>,
    guild_id: Option<GuildId>,
) {
    let Some(guild_id) = guild_id else {
        return;
    };

    let discord = SerenityDiscord::collaborators(&ctx);
    let service = ViewLifecycleService::new(&handler.db, &discord, &handler.registry);

    for message_id in deleted_message_ids {
        if let Err(e) = service
            .handle_message_deleted(guild_id.get(), message_id.get())
            .await
        {
            tracing::error!(
                "Failed to remove view for deleted message {}: {}",
                message_id,
                e
            );
        }
    }
}
