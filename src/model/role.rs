//! Guild role snapshots used to derive view candidates.

use serenity::all::Role;

/// Live role offered by, or held through, a role view.
///
/// Derived from Discord on demand and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuildRole {
    /// Discord role ID as a u64.
    pub id: u64,
    /// Role display name.
    pub name: String,
}

impl GuildRole {
    pub fn from_role(role: &Role) -> Self {
        Self {
            id: role.id.get(),
            name: role.name.clone(),
        }
    }

    /// Converts a guild's roles into a snapshot ordered bottom-to-top.
    ///
    /// Discord does not guarantee position uniqueness, so ties are broken by role id to
    /// keep the order stable between refreshes.
    ///
    /// # Arguments
    /// - `roles` - Serenity roles of a single guild, in any order
    ///
    /// # Returns
    /// - `Vec<GuildRole>` - Roles ordered by `(position, id)` ascending
    pub fn from_roles<'a>(roles: impl IntoIterator<Item = &'a Role>) -> Vec<Self> {
        let mut roles: Vec<&Role> = roles.into_iter().collect();
        roles.sort_by_key(|role| (role.position, role.id.get()));

        roles.into_iter().map(Self::from_role).collect()
    }
}
