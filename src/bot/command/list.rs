use sea_orm::DatabaseConnection;
use serenity::all::{CommandInteraction, Context, CreateCommand};

use crate::{
    bot::{discord::SerenityDiscord, render},
    service::{lifecycle::ViewLifecycleService, registry::ViewRegistry},
};

use super::respond_ephemeral;

pub const NAME: &str = "role-views";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("List the role dropdowns posted in this server")
        .dm_permission(false)
}

/// Handles `/role-views` by listing the guild's views with message links.
pub async fn handle_list(
    db: &DatabaseConnection,
    registry: &ViewRegistry,
    ctx: &Context,
    command: &CommandInteraction,
) {
    let Some(guild_id) = command.guild_id else {
        respond_ephemeral(ctx, command, "This command can only be used in a server.").await;
        return;
    };

    let discord = SerenityDiscord::collaborators(ctx);
    let service = ViewLifecycleService::new(db, &discord, registry);

    let content = match service.list_guild_views(guild_id.get()).await {
        Ok(records) => render::view_list_message(&records),
        Err(e) => {
            tracing::error!("Failed to list views of guild {}: {}", guild_id, e);
            "❌ Failed to load the role menus.".to_string()
        }
    };

    respond_ephemeral(ctx, command, &content).await;
}
