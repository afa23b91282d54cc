//! Role directory filters deriving view candidates from a guild's roles.
//!
//! Every filter is pure and keeps the input order, so applying one to its own output
//! returns the same list.

use crate::model::{role::GuildRole, view::ViewKind};

/// Selects the roles a view of the given kind offers.
///
/// # Arguments
/// - `kind` - View kind whose filter to apply
/// - `roles` - The guild's live roles in display order
///
/// # Returns
/// - `Vec<GuildRole>` - Candidate roles in input order
pub fn candidates_for(kind: ViewKind, roles: &[GuildRole]) -> Vec<GuildRole> {
    match kind {
        ViewKind::RegionalPower(region) => {
            let (xp_min, xp_max) = region.xp_band();
            filter_by_power_band(region.token(), roles, xp_min, xp_max)
        }
        ViewKind::Rank => filter_by_rank(roles),
        ViewKind::Ping => filter_by_ping(roles),
    }
}

/// Keeps the XP power roles of a region within an inclusive XP band.
///
/// A role qualifies when its name contains the region token and `xp` (both
/// case-insensitive) and the first run of digits in the name lies within the band.
/// A name without digits counts as 0.
pub fn filter_by_power_band(
    token: &str,
    roles: &[GuildRole],
    xp_min: u64,
    xp_max: u64,
) -> Vec<GuildRole> {
    let token = token.to_lowercase();

    roles
        .iter()
        .filter(|role| {
            let name = role.name.to_lowercase();
            name.contains(&token)
                && name.contains("xp")
                && (xp_min..=xp_max).contains(&first_number(&name))
        })
        .cloned()
        .collect()
}

/// Keeps roles whose name mentions `rank`, case-insensitive.
pub fn filter_by_rank(roles: &[GuildRole]) -> Vec<GuildRole> {
    filter_by_name(roles, "rank")
}

/// Keeps roles whose name mentions `ping`, case-insensitive.
///
/// The match is a substring match, so `Pings` and `Pinger` both qualify.
pub fn filter_by_ping(roles: &[GuildRole]) -> Vec<GuildRole> {
    filter_by_name(roles, "ping")
}

fn filter_by_name(roles: &[GuildRole], needle: &str) -> Vec<GuildRole> {
    roles
        .iter()
        .filter(|role| role.name.to_lowercase().contains(needle))
        .cloned()
        .collect()
}

/// Parses the first contiguous run of ASCII digits, saturating on overflow.
fn first_number(name: &str) -> u64 {
    let digits: String = name
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    digits
        .bytes()
        .try_fold(0u64, |acc, digit| {
            acc.checked_mul(10)?.checked_add(u64::from(digit - b'0'))
        })
        .unwrap_or(u64::MAX)
}
