//! Slash commands for publishing and listing role views.
//!
//! Every command is restricted to whitelisted users; anyone else gets an ephemeral
//! refusal.

pub mod list;
pub mod publish;

use sea_orm::DatabaseConnection;
use serenity::all::{
    Command, CommandInteraction, Context, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseMessage, GuildId,
};

use crate::{config::Config, model::view::ViewKind, service::registry::ViewRegistry};

/// Command definitions, one publish command per view kind plus the listing command.
pub fn definitions() -> Vec<CreateCommand> {
    let mut commands: Vec<CreateCommand> = ViewKind::ALL.into_iter().map(publish::register).collect();
    commands.push(list::register());
    commands
}

/// Registers all slash commands with Discord.
///
/// Commands are registered to a single guild when one is configured, which applies
/// immediately, and globally otherwise.
pub async fn register_commands(ctx: &Context, guild_id: Option<u64>) {
    let commands = definitions();

    if let Some(guild_id) = guild_id {
        match GuildId::new(guild_id).set_commands(&ctx.http, commands).await {
            Ok(commands) => tracing::info!(
                "Registered {} commands in guild {}",
                commands.len(),
                guild_id
            ),
            Err(e) => tracing::error!("Failed to register guild commands: {}", e),
        }
    } else {
        match Command::set_global_commands(&ctx.http, commands).await {
            Ok(commands) => tracing::info!("Registered {} global commands", commands.len()),
            Err(e) => tracing::error!("Failed to register global commands: {}", e),
        }
    }
}

/// Routes a slash command to its handler.
pub async fn handle_command(
    db: &DatabaseConnection,
    config: &Config,
    registry: &ViewRegistry,
    ctx: &Context,
    command: &CommandInteraction,
) {
    let name = command.data.name.as_str();

    if !config.is_whitelisted(command.user.id.get()) {
        tracing::info!(
            "Refused /{} from non-whitelisted user {}",
            name,
            command.user.id
        );
        respond_ephemeral(ctx, command, "You are not allowed to use this command.").await;
        return;
    }

    if let Some(kind) = ViewKind::from_command_name(name) {
        publish::handle_publish(db, registry, ctx, command, kind).await;
    } else if name == list::NAME {
        list::handle_list(db, registry, ctx, command).await;
    } else {
        tracing::warn!("Unknown command: {}", name);
    }
}

/// Sends an ephemeral reply as the initial interaction response.
async fn respond_ephemeral(ctx: &Context, command: &CommandInteraction, content: &str) {
    let response = CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(true);

    if let Err(e) = command
        .create_response(&ctx.http, CreateInteractionResponse::Message(response))
        .await
    {
        tracing::error!("Failed to respond to /{}: {}", command.data.name, e);
    }
}
