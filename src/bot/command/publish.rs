use sea_orm::DatabaseConnection;
use serenity::all::{CommandInteraction, Context, CreateCommand, EditInteractionResponse};

use crate::{
    bot::{discord::SerenityDiscord, render},
    model::view::ViewKind,
    service::{lifecycle::ViewLifecycleService, registry::ViewRegistry},
};

use super::respond_ephemeral;

pub fn register(kind: ViewKind) -> CreateCommand {
    CreateCommand::new(kind.command_name())
        .description(format!("Post the {} dropdown in this channel", kind.default_embed().title))
        .dm_permission(false)
}

/// Handles the publish command of a view kind.
///
/// Posts the kind's view in the invoking channel, replacing the guild's previous one,
/// and reports the result to the invoking user only.
pub async fn handle_publish(
    db: &DatabaseConnection,
    registry: &ViewRegistry,
    ctx: &Context,
    command: &CommandInteraction,
    kind: ViewKind,
) {
    let Some(guild_id) = command.guild_id else {
        respond_ephemeral(ctx, command, "This command can only be used in a server.").await;
        return;
    };

    if command
        .app_permissions
        .is_some_and(|permissions| !permissions.manage_roles())
    {
        respond_ephemeral(ctx, command, "❌ I don't have the `Manage Roles` permission!").await;
        return;
    }

    if let Err(e) = command.defer_ephemeral(&ctx.http).await {
        tracing::error!("Failed to defer /{}: {}", kind.command_name(), e);
        return;
    }

    let discord = SerenityDiscord::collaborators(ctx);
    let service = ViewLifecycleService::new(db, &discord, registry);

    let content = match service
        .publish(
            kind,
            guild_id.get(),
            command.channel_id.get(),
            kind.default_embed(),
        )
        .await
    {
        Ok(receipt) => render::publish_message(kind, &receipt),
        Err(e) => {
            tracing::error!(
                "Failed to publish {} view in guild {}: {}",
                kind.discriminator(),
                guild_id,
                e
            );
            format!("❌ Failed to post the menu: {}", e)
        }
    };

    if let Err(e) = command
        .edit_response(&ctx.http, EditInteractionResponse::new().content(content))
        .await
    {
        tracing::error!("Failed to respond to /{}: {}", kind.command_name(), e);
    }
}
