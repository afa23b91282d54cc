//! View factory for inserting persisted view records.
//!
//! Inserts rows directly through the entity so repository tests can set up state
//! without going through the repository under test.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test view records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::view::ViewFactory;
///
/// let view = ViewFactory::new(&db)
///     .guild_id(123)
///     .view_type("na")
///     .build()
///     .await?;
/// ```
pub struct ViewFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: u64,
    channel_id: u64,
    message_id: u64,
    view_type: String,
}

impl<'a> ViewFactory<'a> {
    /// Creates a new ViewFactory with default values.
    ///
    /// Defaults:
    /// - guild_id, channel_id, message_id: unique auto-incremented values
    /// - view_type: `"rank"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id(),
            channel_id: next_id(),
            message_id: next_id(),
            view_type: "rank".to_string(),
        }
    }

    /// Sets the guild ID.
    pub fn guild_id(mut self, guild_id: u64) -> Self {
        self.guild_id = guild_id;
        self
    }

    /// Sets the channel ID.
    pub fn channel_id(mut self, channel_id: u64) -> Self {
        self.channel_id = channel_id;
        self
    }

    /// Sets the message ID.
    pub fn message_id(mut self, message_id: u64) -> Self {
        self.message_id = message_id;
        self
    }

    /// Sets the stored view type discriminator.
    ///
    /// Any string is accepted so tests can insert legacy or unknown discriminators.
    pub fn view_type(mut self, view_type: impl Into<String>) -> Self {
        self.view_type = view_type.into();
        self
    }

    /// Builds and inserts the view record into the database.
    ///
    /// # Returns
    /// - `Ok(entity::views::Model)` - Created view entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::views::Model, DbErr> {
        entity::views::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(self.guild_id as i64),
            channel_id: ActiveValue::Set(self.channel_id as i64),
            message_id: ActiveValue::Set(self.message_id as i64),
            view_type: ActiveValue::Set(self.view_type),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a view record for a guild with default channel and message ids.
///
/// Shorthand for `ViewFactory::new(db).guild_id(guild_id).view_type(view_type).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Guild that owns the view
/// - `view_type` - Stored discriminator (e.g. `"rank"`)
///
/// # Returns
/// - `Ok(entity::views::Model)` - Created view entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_view(
    db: &DatabaseConnection,
    guild_id: u64,
    view_type: &str,
) -> Result<entity::views::Model, DbErr> {
    ViewFactory::new(db)
        .guild_id(guild_id)
        .view_type(view_type)
        .build()
        .await
}
