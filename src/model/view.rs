//! Domain models for persisted role views.
//!
//! A view is a role-selection dropdown bound to one Discord message. `ViewKind` is the
//! closed set of dropdown policies; it carries everything that differs between kinds
//! (stored discriminator, component custom id, slash command, selection policy, default
//! embed) so the publish and restore paths dispatch on a single enum.

use crate::util::id::from_db_id;

/// XP band offered by the regional power dropdowns.
const POWER_XP_MIN: u64 = 2000;
const POWER_XP_MAX: u64 = 2900;

/// Region whose XP power roles a regional dropdown offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Na,
    Jp,
}

impl Region {
    /// Token matched (case-insensitively) against role names.
    pub fn token(&self) -> &'static str {
        match self {
            Region::Na => "na",
            Region::Jp => "jp",
        }
    }

    /// Inclusive XP range of the roles offered for this region.
    pub fn xp_band(&self) -> (u64, u64) {
        (POWER_XP_MIN, POWER_XP_MAX)
    }
}

/// How a selection is applied to the member's roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Exactly one role of the candidate set may be held; picking one removes the others.
    Exclusive,
    /// Each selected role is independently added if absent or removed if present.
    Toggle,
}

/// Kind of role-selection view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    RegionalPower(Region),
    Rank,
    Ping,
}

impl ViewKind {
    /// Every publishable kind.
    pub const ALL: [ViewKind; 4] = [
        ViewKind::RegionalPower(Region::Na),
        ViewKind::RegionalPower(Region::Jp),
        ViewKind::Rank,
        ViewKind::Ping,
    ];

    /// Discriminator stored in the `view_type` column.
    pub fn discriminator(&self) -> &'static str {
        match self {
            ViewKind::RegionalPower(region) => region.token(),
            ViewKind::Rank => "rank",
            ViewKind::Ping => "ping",
        }
    }

    /// Parses a stored discriminator.
    ///
    /// The `na-roles`/`jp-roles` values written by the earlier schema revision are
    /// still understood so their rows can be restored.
    pub fn from_discriminator(value: &str) -> Option<Self> {
        match value {
            "na" | "na-roles" => Some(ViewKind::RegionalPower(Region::Na)),
            "jp" | "jp-roles" => Some(ViewKind::RegionalPower(Region::Jp)),
            "rank" => Some(ViewKind::Rank),
            "ping" => Some(ViewKind::Ping),
            _ => None,
        }
    }

    /// Custom id of the select menu, used to route component interactions.
    pub fn custom_id(&self) -> String {
        match self {
            ViewKind::RegionalPower(region) => format!("role_select_{}", region.token()),
            ViewKind::Rank => "role_select_ranks".to_string(),
            ViewKind::Ping => "role_select_pings".to_string(),
        }
    }

    pub fn from_custom_id(custom_id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.custom_id() == custom_id)
    }

    /// Name of the slash command publishing this kind.
    pub fn command_name(&self) -> &'static str {
        match self {
            ViewKind::RegionalPower(Region::Na) => "na-roles",
            ViewKind::RegionalPower(Region::Jp) => "jp-roles",
            ViewKind::Rank => "ranked-roles",
            ViewKind::Ping => "ping-roles",
        }
    }

    pub fn from_command_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.command_name() == name)
    }

    pub fn policy(&self) -> SelectionPolicy {
        match self {
            ViewKind::RegionalPower(_) | ViewKind::Rank => SelectionPolicy::Exclusive,
            ViewKind::Ping => SelectionPolicy::Toggle,
        }
    }

    /// Placeholder text shown on the closed dropdown.
    pub fn placeholder(&self) -> &'static str {
        match self.policy() {
            SelectionPolicy::Exclusive => "Choose a role to assign (removes previous role)...",
            SelectionPolicy::Toggle => "Choose roles to add or remove...",
        }
    }

    /// Embed posted above the dropdown when the kind is published.
    pub fn default_embed(&self) -> ViewEmbed {
        let (title, description) = match self {
            ViewKind::RegionalPower(Region::Na) => {
                ("Western XP Roles", "Select Your Tentatek Division Power")
            }
            ViewKind::RegionalPower(Region::Jp) => {
                ("Japan XP Roles", "Select Your Takoroka Division Power")
            }
            ViewKind::Rank => ("Ranked Roles", "Select Your Most Recent Rank"),
            ViewKind::Ping => ("Pingable Roles", "Select All Roles You Want Pings For"),
        };

        ViewEmbed {
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// Content of the message a view is attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEmbed {
    pub title: String,
    pub description: String,
}

/// Location of a persisted view.
///
/// The store records where a view lives, never what it offers; options are always
/// re-derived from live guild roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRecord {
    /// Unique identifier for the view record.
    pub id: i32,
    pub guild_id: u64,
    pub channel_id: u64,
    pub message_id: u64,
    /// Raw stored discriminator, see [`ViewRecord::kind`].
    pub view_type: String,
}

impl ViewRecord {
    /// Converts an entity model to a view record at the repository boundary.
    ///
    /// The discriminator is kept verbatim so a row with an unknown type can still be
    /// listed and skipped instead of failing the whole query.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `ViewRecord` - The converted view record
    pub fn from_entity(entity: entity::views::Model) -> Self {
        Self {
            id: entity.id,
            guild_id: from_db_id(entity.guild_id),
            channel_id: from_db_id(entity.channel_id),
            message_id: from_db_id(entity.message_id),
            view_type: entity.view_type,
        }
    }

    /// Parsed view kind, `None` for an unknown discriminator.
    pub fn kind(&self) -> Option<ViewKind> {
        ViewKind::from_discriminator(&self.view_type)
    }

    /// Jump link to the view's message.
    pub fn message_link(&self) -> String {
        format!(
            "https://discord.com/channels/{}/{}/{}",
            self.guild_id, self.channel_id, self.message_id
        )
    }
}

/// Parameters for creating or replacing the view of a kind in a guild.
#[derive(Debug, Clone)]
pub struct UpsertViewParam {
    pub guild_id: u64,
    pub channel_id: u64,
    pub message_id: u64,
    pub kind: ViewKind,
}
