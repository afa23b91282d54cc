//! View data repository for database operations.
//!
//! This module provides the `ViewRepository` for managing persisted role views. A view
//! record tracks which message in which channel carries the dropdown of a view kind for a
//! guild; at most one record exists per guild and kind. The repository converts between
//! entity models and domain models at the infrastructure boundary, including the signed
//! storage representation of Discord ids.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, SqlErr,
};

use crate::{
    model::view::{UpsertViewParam, ViewKind, ViewRecord},
    util::id::to_db_id,
};

/// Repository providing database operations for persisted role views.
pub struct ViewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ViewRepository<'a> {
    /// Creates a new ViewRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ViewRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the view of a kind published in a guild.
    ///
    /// Legacy discriminators are matched too, so a view written by the earlier schema
    /// revision is found and replaced in place on republish.
    ///
    /// # Arguments
    /// - `kind` - View kind to look up
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(Some(ViewRecord))` - View found
    /// - `Ok(None)` - The kind is not published in this guild
    /// - `Err(DbErr)` - Database error during query
    pub async fn fetch(&self, kind: ViewKind, guild_id: u64) -> Result<Option<ViewRecord>, DbErr> {
        let entities = entity::prelude::Views::find()
            .filter(entity::views::Column::GuildId.eq(to_db_id(guild_id)))
            .all(self.db)
            .await?;

        let mut matching: Vec<ViewRecord> = entities
            .into_iter()
            .map(ViewRecord::from_entity)
            .filter(|record| record.kind() == Some(kind))
            .collect();

        // A current discriminator wins over a legacy one if both rows exist.
        matching.sort_by_key(|record| record.view_type != kind.discriminator());

        Ok(matching.into_iter().next())
    }

    /// Gets every persisted view.
    ///
    /// # Returns
    /// - `Ok(Vec<ViewRecord>)` - All view records, in no particular order
    /// - `Err(DbErr)` - Database error during query
    pub async fn fetch_all(&self) -> Result<Vec<ViewRecord>, DbErr> {
        let entities = entity::prelude::Views::find().all(self.db).await?;

        Ok(entities.into_iter().map(ViewRecord::from_entity).collect())
    }

    /// Gets every view published in a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(Vec<ViewRecord>)` - The guild's view records
    /// - `Err(DbErr)` - Database error during query
    pub async fn fetch_by_guild(&self, guild_id: u64) -> Result<Vec<ViewRecord>, DbErr> {
        let entities = entity::prelude::Views::find()
            .filter(entity::views::Column::GuildId.eq(to_db_id(guild_id)))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ViewRecord::from_entity).collect())
    }

    /// Creates or updates the view of a kind in a guild.
    ///
    /// If a record already exists for the guild and kind, its channel and message are
    /// overwritten in place and the row keeps its id; otherwise a new record is created.
    /// A legacy row is rewritten with the current discriminator. When a concurrent insert
    /// wins the unique index first, the row it wrote is re-read and updated instead.
    ///
    /// # Arguments
    /// - `param` - Guild, channel, message and kind of the view
    ///
    /// # Returns
    /// - `Ok(ViewRecord)` - The created or updated view record
    /// - `Err(DbErr)` - Database error during upsert operation
    pub async fn upsert(&self, param: UpsertViewParam) -> Result<ViewRecord, DbErr> {
        if let Some(existing) = self.fetch(param.kind, param.guild_id).await? {
            return self.update_location(existing.id, &param).await;
        }

        self.insert_or_adopt(&param).await
    }

    /// Inserts a record for a kind the caller found unpublished.
    ///
    /// If another writer inserted the same guild and kind in the meantime, the unique
    /// index rejects the insert and that writer's row is updated instead.
    pub(super) async fn insert_or_adopt(
        &self,
        param: &UpsertViewParam,
    ) -> Result<ViewRecord, DbErr> {
        let new_record = entity::views::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(to_db_id(param.guild_id)),
            channel_id: ActiveValue::Set(to_db_id(param.channel_id)),
            message_id: ActiveValue::Set(to_db_id(param.message_id)),
            view_type: ActiveValue::Set(param.kind.discriminator().to_string()),
        };

        match new_record.insert(self.db).await {
            Ok(entity) => Ok(ViewRecord::from_entity(entity)),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                let existing = self
                    .fetch(param.kind, param.guild_id)
                    .await?
                    .ok_or(err)?;

                self.update_location(existing.id, param).await
            }
            Err(err) => Err(err),
        }
    }

    async fn update_location(&self, id: i32, param: &UpsertViewParam) -> Result<ViewRecord, DbErr> {
        let active = entity::views::ActiveModel {
            id: ActiveValue::Unchanged(id),
            guild_id: ActiveValue::Set(to_db_id(param.guild_id)),
            channel_id: ActiveValue::Set(to_db_id(param.channel_id)),
            message_id: ActiveValue::Set(to_db_id(param.message_id)),
            view_type: ActiveValue::Set(param.kind.discriminator().to_string()),
        };

        let entity = active.update(self.db).await?;

        Ok(ViewRecord::from_entity(entity))
    }

    /// Deletes the view attached to a message.
    ///
    /// Deleting a message that carries no view is not an error.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `message_id` - Discord message ID the view was attached to
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of records removed (0 or 1)
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete(&self, guild_id: u64, message_id: u64) -> Result<u64, DbErr> {
        let result = entity::prelude::Views::delete_many()
            .filter(entity::views::Column::GuildId.eq(to_db_id(guild_id)))
            .filter(entity::views::Column::MessageId.eq(to_db_id(message_id)))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every view of a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of records removed
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete_by_guild(&self, guild_id: u64) -> Result<u64, DbErr> {
        let result = entity::prelude::Views::delete_many()
            .filter(entity::views::Column::GuildId.eq(to_db_id(guild_id)))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every view posted in a channel.
    ///
    /// # Arguments
    /// - `channel_id` - Discord channel ID
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of records removed
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete_by_channel(&self, channel_id: u64) -> Result<u64, DbErr> {
        let result = entity::prelude::Views::delete_many()
            .filter(entity::views::Column::ChannelId.eq(to_db_id(channel_id)))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
