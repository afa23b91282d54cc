//! Ready event handlers for bot initialization.
//!
//! `ready` fires on every gateway (re)connection and registers the slash commands.
//! `cache_ready` fires once the guilds from the ready payload are cached; the first one
//! runs the restore pass that re-attaches persisted views to their messages.

use serenity::all::{ActivityData, Context, GuildId, Ready};
use std::sync::atomic::Ordering;

use crate::{
    bot::{command, discord::SerenityDiscord, handler::Handler},
    config::Config,
    service::lifecycle::ViewLifecycleService,
};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `config` - Application configuration, for the command registration scope
/// - `ctx` - Discord context for registering commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(config: &Config, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    command::register_commands(&ctx, config.discord_guild_id).await;
}

/// Handles the cache_ready event by restoring persisted views.
///
/// Runs the restore pass only the first time the cache becomes ready. A failure to read
/// the view store is logged; views are still cleaned up and created on demand.
///
/// # Arguments
/// - `handler` - Event handler holding the database and view registry
/// - `ctx` - Discord context for the collaborators and presence
/// - `guilds` - Guilds the bot is in
pub async fn handle_cache_ready(handler: &Handler, ctx: Context, guilds: Vec<GuildId>) {
    ctx.set_activity(Some(ActivityData::playing(format!(
        "in {} servers",
        guilds.len()
    ))));

    if handler.restored.swap(true, Ordering::SeqCst) {
        tracing::debug!("Cache ready again, views already restored");
        return;
    }

    let discord = SerenityDiscord::collaborators(&ctx);
    let service = ViewLifecycleService::new(&handler.db, &discord, &handler.registry);

    if let Err(e) = service.restore_all().await {
        tracing::error!("Failed to restore persisted views: {}", e);
    }
}
