//! View fixtures for creating in-memory test data.

use entity::views;

/// Default test guild ID.
pub const DEFAULT_GUILD_ID: u64 = 987654321;

/// Default test channel ID.
pub const DEFAULT_CHANNEL_ID: u64 = 123456789;

/// Default test message ID.
pub const DEFAULT_MESSAGE_ID: u64 = 555555555;

/// Default stored view type.
pub const DEFAULT_VIEW_TYPE: &str = "rank";

/// Creates a view entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - guild_id: `987654321`
/// - channel_id: `123456789`
/// - message_id: `555555555`
/// - view_type: `"rank"`
pub fn entity() -> views::Model {
    entity_builder().build()
}

/// Creates a view entity builder for customization.
pub fn entity_builder() -> ViewEntityBuilder {
    ViewEntityBuilder::default()
}

/// Builder for creating customized view entity models.
pub struct ViewEntityBuilder {
    id: i32,
    guild_id: u64,
    channel_id: u64,
    message_id: u64,
    view_type: String,
}

impl Default for ViewEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            guild_id: DEFAULT_GUILD_ID,
            channel_id: DEFAULT_CHANNEL_ID,
            message_id: DEFAULT_MESSAGE_ID,
            view_type: DEFAULT_VIEW_TYPE.to_string(),
        }
    }
}

impl ViewEntityBuilder {
    /// Sets the row ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
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
    pub fn view_type(mut self, view_type: impl Into<String>) -> Self {
        self.view_type = view_type.into();
        self
    }

    /// Builds the entity model.
    pub fn build(self) -> views::Model {
        views::Model {
            id: self.id,
            guild_id: self.guild_id as i64,
            channel_id: self.channel_id as i64,
            message_id: self.message_id as i64,
            view_type: self.view_type,
        }
    }
}
