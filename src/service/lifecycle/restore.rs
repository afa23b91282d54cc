use crate::{
    data::view::ViewRepository,
    error::{transport::TransportError, AppError},
    model::{
        lifecycle::RestoreSummary,
        view::{ViewKind, ViewRecord},
    },
    service::selection::RoleSelection,
};

use super::ViewLifecycleService;

/// What happened to a single record during the restore pass.
enum RestoreStep {
    Restored,
    Removed,
    Skipped,
}

impl<'a> ViewLifecycleService<'a> {
    /// Re-attaches every persisted view to its message.
    ///
    /// Each record is handled on its own: a failure is logged and the pass moves on to the
    /// next record. Records whose guild, channel or message is gone are deleted. Records
    /// that cannot be restored for other reasons (unknown kind, missing permissions,
    /// Discord errors) are kept for the next start.
    ///
    /// # Returns
    /// - `Ok(RestoreSummary)` - Counts of restored, removed and skipped records
    /// - `Err(AppError::DbErr)` - The view records could not be read
    pub async fn restore_all(&self) -> Result<RestoreSummary, AppError> {
        let repo = ViewRepository::new(self.db);
        let records = repo.fetch_all().await?;

        tracing::info!("Restoring {} persisted views", records.len());

        let mut summary = RestoreSummary::default();
        for record in records {
            match self.restore_record(&repo, &record).await {
                RestoreStep::Restored => summary.restored += 1,
                RestoreStep::Removed => summary.removed += 1,
                RestoreStep::Skipped => summary.skipped += 1,
            }
        }

        tracing::info!(
            "Restore finished: {} restored, {} removed, {} skipped",
            summary.restored,
            summary.removed,
            summary.skipped
        );

        Ok(summary)
    }

    async fn restore_record(&self, repo: &ViewRepository<'_>, record: &ViewRecord) -> RestoreStep {
        let Some(kind) = record.kind() else {
            tracing::warn!(
                "Skipping view {} in guild {}: unknown view type '{}'",
                record.id,
                record.guild_id,
                record.view_type
            );
            return RestoreStep::Skipped;
        };

        match self.discord.guilds.guild_exists(record.guild_id).await {
            Ok(true) => {}
            Ok(false) => return self.remove_record(repo, record, "guild is gone").await,
            Err(err) => return skip(record, "guild lookup failed", &err),
        }

        match self
            .discord
            .guilds
            .channel_exists(record.guild_id, record.channel_id)
            .await
        {
            Ok(true) => {}
            Ok(false) => return self.remove_record(repo, record, "channel is gone").await,
            Err(err) => return skip(record, "channel lookup failed", &err),
        }

        match self
            .discord
            .messages
            .fetch_message(record.channel_id, record.message_id)
            .await
        {
            Ok(()) => {}
            Err(TransportError::NotFound) => {
                return self.remove_record(repo, record, "message is gone").await
            }
            Err(err) => return skip(record, "message fetch failed", &err),
        }

        self.rebind(repo, record, kind).await
    }

    async fn rebind(
        &self,
        repo: &ViewRepository<'_>,
        record: &ViewRecord,
        kind: ViewKind,
    ) -> RestoreStep {
        let roles = match self.discord.guilds.list_roles(record.guild_id).await {
            Ok(roles) => roles,
            Err(err) => return skip(record, "role lookup failed", &err),
        };

        let selection = RoleSelection::seeded(
            kind,
            record.guild_id,
            record.message_id,
            &roles,
            Some(self.discord.guilds.clone()),
        );

        match self
            .discord
            .messages
            .attach_menu(record.channel_id, record.message_id, selection.menu())
            .await
        {
            Ok(()) => {}
            Err(TransportError::NotFound) => {
                return self.remove_record(repo, record, "message is gone").await
            }
            Err(err) => return skip(record, "attaching dropdown failed", &err),
        }

        tracing::debug!(
            "Restored {} view on message {} in guild {} with {} candidate roles",
            kind.discriminator(),
            record.message_id,
            record.guild_id,
            selection.candidates().len()
        );

        self.registry.register(record.channel_id, selection).await;

        RestoreStep::Restored
    }

    async fn remove_record(
        &self,
        repo: &ViewRepository<'_>,
        record: &ViewRecord,
        reason: &str,
    ) -> RestoreStep {
        match repo.delete(record.guild_id, record.message_id).await {
            Ok(_) => {
                tracing::info!(
                    "Removed {} view on message {} in guild {}: {}",
                    record.view_type,
                    record.message_id,
                    record.guild_id,
                    reason
                );
                RestoreStep::Removed
            }
            Err(err) => {
                tracing::error!(
                    "Failed to remove view {} in guild {} ({}): {}",
                    record.id,
                    record.guild_id,
                    reason,
                    err
                );
                RestoreStep::Skipped
            }
        }
    }
}

fn skip(record: &ViewRecord, reason: &str, err: &TransportError) -> RestoreStep {
    tracing::warn!(
        "Skipping view on message {} in guild {}: {}: {}",
        record.message_id,
        record.guild_id,
        reason,
        err
    );
    RestoreStep::Skipped
}
