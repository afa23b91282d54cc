use crate::{
    data::view::ViewRepository,
    error::{transport::TransportError, AppError},
    model::{
        lifecycle::{PublishReceipt, ReplacedView, RetiredMessage},
        view::{UpsertViewParam, ViewEmbed, ViewKind, ViewRecord},
    },
    service::selection::RoleSelection,
};

use super::ViewLifecycleService;

impl<'a> ViewLifecycleService<'a> {
    /// Publishes the guild's view of a kind in a channel, replacing any previous one.
    ///
    /// The previous view's component is unbound and its message deleted on a best-effort
    /// basis before the new message is sent. The new message gets a component seeded from
    /// the guild's current roles, and the view record is then pointed at it. Callers are
    /// responsible for authorization.
    ///
    /// Two concurrent publishes for the same guild and kind may both post a message; the
    /// record ends up pointing at one of them and the other stays until it is deleted.
    ///
    /// # Arguments
    /// - `kind` - View kind to publish
    /// - `guild_id` - Guild to publish the view for
    /// - `channel_id` - Channel to post the view message in
    /// - `embed` - Content of the view message
    ///
    /// # Returns
    /// - `Ok(PublishReceipt)` - New message id, candidate count and the replaced view
    /// - `Err(AppError::TransportErr)` - Sending the message or attaching the dropdown failed
    /// - `Err(AppError::DbErr)` - Reading or writing the view record failed
    pub async fn publish(
        &self,
        kind: ViewKind,
        guild_id: u64,
        channel_id: u64,
        embed: ViewEmbed,
    ) -> Result<PublishReceipt, AppError> {
        let repo = ViewRepository::new(self.db);

        let replaced = match repo.fetch(kind, guild_id).await? {
            Some(record) => {
                let message = self.retire_previous(&record).await;
                Some(ReplacedView { record, message })
            }
            None => None,
        };

        let message_id = self.discord.messages.send_embed(channel_id, &embed).await?;

        let candidate_count = match self.bind_new(kind, guild_id, channel_id, message_id).await {
            Ok(count) => count,
            Err(err) => {
                // Without a dropdown the message is useless and has no record yet.
                if let Err(delete_err) = self
                    .discord
                    .messages
                    .delete_message(channel_id, message_id)
                    .await
                {
                    tracing::warn!(
                        "Failed to delete unbound view message {} in channel {}: {}",
                        message_id,
                        channel_id,
                        delete_err
                    );
                }
                return Err(err.into());
            }
        };

        let param = UpsertViewParam {
            guild_id,
            channel_id,
            message_id,
            kind,
        };

        if let Err(err) = repo.upsert(param).await {
            tracing::warn!(
                "View message {} in channel {} is orphaned: failed to store {} view for guild {}: {}",
                message_id,
                channel_id,
                kind.discriminator(),
                guild_id,
                err
            );
            return Err(err.into());
        }

        tracing::info!(
            "Published {} view in guild {} as message {} with {} candidate roles",
            kind.discriminator(),
            guild_id,
            message_id,
            candidate_count
        );

        Ok(PublishReceipt {
            message_id,
            candidate_count,
            replaced,
        })
    }

    /// Unbinds and deletes the message of a view being replaced.
    ///
    async fn retire_previous(&self, previous: &ViewRecord) -> RetiredMessage {
        self.registry.unbind(previous.message_id).await;

        match self
            .discord
            .messages
            .delete_message(previous.channel_id, previous.message_id)
            .await
        {
            Ok(()) => RetiredMessage::Deleted,
            Err(TransportError::NotFound) => {
                tracing::debug!(
                    "Previous view message {} in channel {} was already deleted",
                    previous.message_id,
                    previous.channel_id
                );
                RetiredMessage::AlreadyGone
            }
            Err(err) => {
                tracing::warn!(
                    "Failed to delete previous view message {} in channel {}: {}",
                    previous.message_id,
                    previous.channel_id,
                    err
                );
                RetiredMessage::DeleteFailed
            }
        }
    }

    /// Seeds a component for the new message, attaches it and registers it.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of candidate roles
    /// - `Err(TransportError)` - Listing roles or editing the message failed
    async fn bind_new(
        &self,
        kind: ViewKind,
        guild_id: u64,
        channel_id: u64,
        message_id: u64,
    ) -> Result<usize, TransportError> {
        let roles = self.discord.guilds.list_roles(guild_id).await?;

        let selection = RoleSelection::seeded(
            kind,
            guild_id,
            message_id,
            &roles,
            Some(self.discord.guilds.clone()),
        );

        self.discord
            .messages
            .attach_menu(channel_id, message_id, selection.menu())
            .await?;

        let candidate_count = selection.candidates().len();
        self.registry.register(channel_id, selection).await;

        Ok(candidate_count)
    }
}
