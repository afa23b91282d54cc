//! Models for the role-selection dropdown and the result of applying a selection.

use thiserror::Error;

use crate::model::role::GuildRole;

/// Option value shown while a component has no candidates loaded yet.
pub const LOADING_VALUE: &str = "loading";
/// Option value of the disabled placeholder shown when no role qualifies.
pub const NO_ROLES_VALUE: &str = "none";

/// Discord caps a select menu at 25 options.
pub const MAX_MENU_OPTIONS: usize = 25;

/// Single option of a select menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub label: String,
    pub value: String,
}

impl MenuOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Whether the value is a placeholder rather than a role id.
    pub fn is_sentinel_value(value: &str) -> bool {
        value == LOADING_VALUE || value == NO_ROLES_VALUE
    }
}

/// Transport-independent description of a string select menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewMenu {
    pub custom_id: String,
    pub placeholder: String,
    pub options: Vec<MenuOption>,
    pub min_values: u8,
    pub max_values: u8,
    pub disabled: bool,
}

/// Why a single role mutation failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MutationError {
    /// The bot is not allowed to manage the role (hierarchy or missing permission).
    #[error("I don't have permission to manage roles.")]
    PermissionDenied,

    /// Discord rejected or failed the request for another reason.
    #[error("Failed to update roles: {0}")]
    TransportFailure(String),
}

/// Result of applying a member's selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionOutcome {
    pub added: Vec<GuildRole>,
    pub removed: Vec<GuildRole>,
    /// Set when an exclusive selection picked the role the member already holds.
    pub already_held: Option<GuildRole>,
    pub errors: Vec<MutationError>,
}
