use serenity::all::{Context, Guild, UnavailableGuild};

use crate::{
    bot::{discord::SerenityDiscord, handler::Handler},
    service::lifecycle::ViewLifecycleService,
};

/// Handles the guild_delete event.
///
/// Discord sends the same event when a guild goes down in an outage, flagged as
/// unavailable. Only a real removal (bot kicked, guild deleted) forgets the guild's views.
///
/// # Arguments
/// - `handler` - Event handler holding the database and view registry
/// - `ctx` - Discord context
/// - `incomplete` - Id and availability of the guild
/// - `_full` - Cached guild data if available (unused)
pub async fn handle_guild_delete(
    handler: &Handler,
    ctx: Context,
    incomplete: UnavailableGuild,
    _full: Option<Guild>,
) {
    if incomplete.unavailable {
        tracing::warn!("Guild {} became unavailable", incomplete.id);
        return;
    }

    let discord = SerenityDiscord::collaborators(&ctx);
    let service = ViewLifecycleService::new(&handler.db, &discord, &handler.registry);

    if let Err(e) = service.handle_guild_removed(incomplete.id.get()).await {
        tracing::error!(
            "Failed to remove views of guild {}: {}",
            incomplete.id,
            e
        );
    }
}
