use crate::{
    error::selection::SelectionError,
    model::{selection::SelectionOutcome, view::ViewKind},
    service::selection::RoleSelection,
};

use super::ViewLifecycleService;

/// A member's submission on a view dropdown.
pub struct SelectRequest<'r> {
    pub kind: ViewKind,
    pub guild_id: u64,
    pub channel_id: u64,
    pub message_id: u64,
    pub member_id: u64,
    /// Roles the member held when the interaction was created.
    pub member_role_ids: &'r [u64],
    pub values: &'r [String],
}

impl<'a> ViewLifecycleService<'a> {
    /// Applies a dropdown submission through the message's live component.
    ///
    /// A message without a registered component (for example one that was not restored)
    /// gets an unbound component that loads its roles on this first use. Submissions on
    /// the same message are applied one at a time.
    ///
    /// # Returns
    /// - `Ok(SelectionOutcome)` - Roles added, removed or already held, and any failures
    /// - `Err(SelectionError)` - No valid selection, or candidates could not be loaded
    pub async fn select(
        &self,
        request: SelectRequest<'_>,
    ) -> Result<SelectionOutcome, SelectionError> {
        let guilds = self.discord.guilds.clone();
        let selection = self
            .registry
            .get_or_register(request.channel_id, request.message_id, || {
                tracing::debug!(
                    "No live component for message {}, creating one on demand",
                    request.message_id
                );
                RoleSelection::new(
                    request.kind,
                    request.guild_id,
                    request.message_id,
                    Some(guilds),
                )
            })
            .await;

        let mut selection = selection.lock().await;
        selection
            .on_select(
                self.discord.members.as_ref(),
                request.member_id,
                request.member_role_ids,
                request.values,
            )
            .await
    }
}
