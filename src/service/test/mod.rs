use crate::{
    error::{selection::SelectionError, transport::TransportError, AppError},
    model::{
        role::GuildRole,
        selection::MutationError,
        view::{Region, ViewKind},
    },
    service::{
        lifecycle::{select::SelectRequest, ViewLifecycleService},
        registry::ViewRegistry,
    },
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use fake::FakeDiscord;

mod publish;

const GUILD_ID: u64 = 100;
const CHANNEL_ID: u64 = 200;
const MEMBER_ID: u64 = 300;

fn role(id: u64, name: &str) -> GuildRole {
    GuildRole {
        id,
        name: name.to_string(),
    }
}

/// Live roles of the default test guild.
fn guild_roles() -> Vec<GuildRole> {
    vec![
        role(1, "@everyone"),
        role(11, "NA XP 2100"),
        role(12, "NA XP 2600"),
        role(13, "NA XP 3100"),
        role(21, "JP XP 2300"),
        role(31, "Rank C"),
        role(32, "Rank B"),
        role(41, "Salmon Run Pings"),
        role(42, "Splatfest Ping"),
    ]
}

fn values(ids: &[u64]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}
