use crate::{data::view::ViewRepository, error::AppError, model::view::ViewRecord};

use super::ViewLifecycleService;

impl<'a> ViewLifecycleService<'a> {
    /// Forgets the view attached to a deleted message.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of records removed; 0 when the message was not a view
    /// - `Err(AppError::DbErr)` - Database error during deletion
    pub async fn handle_message_deleted(
        &self,
        guild_id: u64,
        message_id: u64,
    ) -> Result<u64, AppError> {
        self.registry.unbind(message_id).await;

        let removed = ViewRepository::new(self.db)
            .delete(guild_id, message_id)
            .await?;

        if removed > 0 {
            tracing::info!(
                "Removed view for deleted message {} in guild {}",
                message_id,
                guild_id
            );
        }

        Ok(removed)
    }

    /// Forgets every view of a guild the bot is no longer in.
    pub async fn handle_guild_removed(&self, guild_id: u64) -> Result<u64, AppError> {
        self.registry.unbind_guild(guild_id).await;

        let removed = ViewRepository::new(self.db)
            .delete_by_guild(guild_id)
            .await?;

        tracing::info!("Removed {} views of departed guild {}", removed, guild_id);

        Ok(removed)
    }

    /// Forgets every view posted in a deleted channel.
    pub async fn handle_channel_deleted(&self, channel_id: u64) -> Result<u64, AppError> {
        self.registry.unbind_channel(channel_id).await;

        let removed = ViewRepository::new(self.db)
            .delete_by_channel(channel_id)
            .await?;

        if removed > 0 {
            tracing::info!(
                "Removed {} views of deleted channel {}",
                removed,
                channel_id
            );
        }

        Ok(removed)
    }

    /// Lists the views published in a guild.
    pub async fn list_guild_views(&self, guild_id: u64) -> Result<Vec<ViewRecord>, AppError> {
        let mut records = ViewRepository::new(self.db).fetch_by_guild(guild_id).await?;
        records.sort_by(|a, b| a.view_type.cmp(&b.view_type));

        Ok(records)
    }
}
