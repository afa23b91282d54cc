use serenity::all::{
    ComponentInteraction, ComponentInteractionDataKind, Context, EditInteractionResponse,
    Interaction,
};

use crate::{
    bot::{command, discord::SerenityDiscord, handler::Handler, render},
    model::view::ViewKind,
    service::lifecycle::{select::SelectRequest, ViewLifecycleService},
};

/// Handles slash commands and view dropdown submissions.
pub async fn handle_interaction(handler: &Handler, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) => {
            tracing::debug!("Received command: {}", command.data.name);

            command::handle_command(
                &handler.db,
                &handler.config,
                &handler.registry,
                &ctx,
                &command,
            )
            .await;
        }
        Interaction::Component(component) => {
            handle_component(handler, &ctx, &component).await;
        }
        _ => {}
    }
}

/// Applies a view dropdown submission and replies to the member privately.
async fn handle_component(handler: &Handler, ctx: &Context, component: &ComponentInteraction) {
    let Some(kind) = ViewKind::from_custom_id(&component.data.custom_id) else {
        return;
    };

    let ComponentInteractionDataKind::StringSelect { values } = &component.data.kind else {
        return;
    };

    let (Some(guild_id), Some(member)) = (component.guild_id, component.member.as_ref()) else {
        return;
    };

    if let Err(e) = component.defer_ephemeral(&ctx.http).await {
        tracing::error!("Failed to defer role selection: {}", e);
        return;
    }

    let member_role_ids: Vec<u64> = member.roles.iter().map(|role| role.get()).collect();

    let discord = SerenityDiscord::collaborators(ctx);
    let service = ViewLifecycleService::new(&handler.db, &discord, &handler.registry);

    let content = match service
        .select(SelectRequest {
            kind,
            guild_id: guild_id.get(),
            channel_id: component.channel_id.get(),
            message_id: component.message.id.get(),
            member_id: member.user.id.get(),
            member_role_ids: &member_role_ids,
            values,
        })
        .await
    {
        Ok(outcome) => render::outcome_message(&outcome),
        Err(e) => {
            tracing::debug!(
                "Rejected selection on message {} by member {}: {}",
                component.message.id,
                member.user.id,
                e
            );
            render::selection_error_message(&e)
        }
    };

    if let Err(e) = component
        .edit_response(&ctx.http, EditInteractionResponse::new().content(content))
        .await
    {
        tracing::error!("Failed to respond to role selection: {}", e);
    }
}
