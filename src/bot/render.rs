//! Rendering of view models into Discord builders and user-facing text.

use serenity::all::{
    Colour, CreateActionRow, CreateEmbed, CreateSelectMenu, CreateSelectMenuKind,
    CreateSelectMenuOption,
};

use crate::{
    error::selection::SelectionError,
    model::{
        lifecycle::{PublishReceipt, RetiredMessage},
        role::GuildRole,
        selection::{ViewMenu, SelectionOutcome},
        view::{ViewEmbed, ViewKind, ViewRecord},
    },
};

const VIEW_EMBED_COLOUR: Colour = Colour::new(0x5865F2);

pub fn view_embed(embed: &ViewEmbed) -> CreateEmbed {
    CreateEmbed::new()
        .title(&embed.title)
        .description(&embed.description)
        .colour(VIEW_EMBED_COLOUR)
}

/// Builds the action row carrying a view's string select menu.
pub fn select_menu_row(menu: &ViewMenu) -> CreateActionRow {
    let options = menu
        .options
        .iter()
        .map(|option| CreateSelectMenuOption::new(&option.label, &option.value))
        .collect();

    let select_menu = CreateSelectMenu::new(&menu.custom_id, CreateSelectMenuKind::String { options })
        .placeholder(&menu.placeholder)
        .min_values(menu.min_values)
        .max_values(menu.max_values)
        .disabled(menu.disabled);

    CreateActionRow::SelectMenu(select_menu)
}

fn role_names(roles: &[GuildRole]) -> String {
    roles
        .iter()
        .map(|role| role.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Summarizes a selection for the member who made it.
pub fn outcome_message(outcome: &SelectionOutcome) -> String {
    if let Some(role) = &outcome.already_held {
        return format!("You already have the {} role.", role.name);
    }

    let mut parts = Vec::new();

    if !outcome.added.is_empty() {
        let label = if outcome.added.len() == 1 { "role" } else { "roles" };
        parts.push(format!("✅ **Added {}:** {}", label, role_names(&outcome.added)));
    }

    if !outcome.removed.is_empty() {
        let label = if outcome.removed.len() == 1 { "role" } else { "roles" };
        parts.push(format!("❌ **Removed {}:** {}", label, role_names(&outcome.removed)));
    }

    if !outcome.errors.is_empty() {
        let errors = outcome
            .errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        parts.push(format!("⚠️ **Errors:** {}", errors));
    }

    if parts.is_empty() {
        return "No changes were made.".to_string();
    }

    parts.join("\n")
}

pub fn selection_error_message(err: &SelectionError) -> String {
    match err {
        SelectionError::NoValidSelection => "❌ No valid roles available.".to_string(),
        SelectionError::RefreshUnavailable | SelectionError::RefreshFailed(_) => {
            "❌ Couldn't load the roles for this menu. Please try again later.".to_string()
        }
    }
}

/// Confirmation shown to the user who published a view.
pub fn publish_message(kind: ViewKind, receipt: &PublishReceipt) -> String {
    let mut message = format!(
        "Posted the **{}** menu with {} role{}.",
        kind.default_embed().title,
        receipt.candidate_count,
        if receipt.candidate_count == 1 { "" } else { "s" }
    );

    if let Some(replaced) = &receipt.replaced {
        message.push_str(match replaced.message {
            RetiredMessage::Deleted => "\nThe previous menu was removed.",
            RetiredMessage::AlreadyGone => "\nThe previous menu had already been deleted.",
            RetiredMessage::DeleteFailed => {
                "\nThe previous menu could not be deleted; remove it manually."
            }
        });
    }

    message
}

/// Lists a guild's views with links to their messages.
pub fn view_list_message(records: &[ViewRecord]) -> String {
    if records.is_empty() {
        return "No role menus are posted in this server.".to_string();
    }

    records
        .iter()
        .map(|record| match record.kind() {
            Some(kind) => format!(
                "**{}** (`/{}`): {}",
                kind.default_embed().title,
                kind.command_name(),
                record.message_link()
            ),
            None => format!(
                "Unknown menu type `{}`: {}",
                record.view_type,
                record.message_link()
            ),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{lifecycle::ReplacedView, selection::MutationError};
    use test_utils::fixture;

    fn role(id: u64, name: &str) -> GuildRole {
        GuildRole {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn reports_swap() {
        let outcome = SelectionOutcome {
            added: vec![role(2, "Rank B")],
            removed: vec![role(1, "Rank C")],
            ..Default::default()
        };

        assert_eq!(
            outcome_message(&outcome),
            "✅ **Added role:** Rank B\n❌ **Removed role:** Rank C"
        );
    }

    #[test]
    fn reports_already_held_role() {
        let outcome = SelectionOutcome {
            already_held: Some(role(1, "Rank C")),
            ..Default::default()
        };

        assert_eq!(outcome_message(&outcome), "You already have the Rank C role.");
    }

    #[test]
    fn reports_errors_and_noop() {
        let outcome = SelectionOutcome {
            errors: vec![MutationError::PermissionDenied],
            ..Default::default()
        };

        assert_eq!(
            outcome_message(&outcome),
            "⚠️ **Errors:** I don't have permission to manage roles."
        );
        assert_eq!(
            outcome_message(&SelectionOutcome::default()),
            "No changes were made."
        );
    }

    #[test]
    fn lists_views_with_links() {
        let known = ViewRecord::from_entity(fixture::view::entity());
        let unknown = ViewRecord::from_entity(
            fixture::view::entity_builder()
                .id(2)
                .message_id(1)
                .view_type("eu")
                .build(),
        );

        let message = view_list_message(&[known, unknown]);

        assert_eq!(
            message,
            "**Ranked Roles** (`/ranked-roles`): https://discord.com/channels/987654321/123456789/555555555\n\
             Unknown menu type `eu`: https://discord.com/channels/987654321/123456789/1"
        );
    }

    fn receipt_replacing(message: RetiredMessage) -> PublishReceipt {
        PublishReceipt {
            message_id: 1,
            candidate_count: 1,
            replaced: Some(ReplacedView {
                record: ViewRecord::from_entity(fixture::view::entity()),
                message,
            }),
        }
    }

    #[test]
    fn publish_message_mentions_undeleted_previous_menu() {
        let message = publish_message(
            ViewKind::Rank,
            &receipt_replacing(RetiredMessage::DeleteFailed),
        );

        assert!(message.starts_with("Posted the **Ranked Roles** menu with 1 role."));
        assert!(message.contains("could not be deleted"));
    }

    #[test]
    fn publish_message_does_not_blame_already_deleted_menu() {
        let message = publish_message(
            ViewKind::Rank,
            &receipt_replacing(RetiredMessage::AlreadyGone),
        );

        assert!(message.ends_with("The previous menu had already been deleted."));
        assert!(!message.contains("remove it manually"));
    }

    #[test]
    fn publish_message_without_previous_menu() {
        let receipt = PublishReceipt {
            message_id: 1,
            candidate_count: 2,
            replaced: None,
        };

        assert_eq!(
            publish_message(ViewKind::Ping, &receipt),
            "Posted the **Pingable Roles** menu with 2 roles."
        );
    }
}
