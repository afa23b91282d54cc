//! Discord bot integration for role views.
//!
//! The bot registers the publishing slash commands, restores persisted views once the
//! gateway cache is ready, routes dropdown submissions to the live view components, and
//! forgets views whose message, channel or guild disappears.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild, channel and role data, and guild/channel deletion events
//! - `GUILD_MESSAGES` - Message deletion events in guilds

pub mod command;
pub mod discord;
pub mod handler;
pub mod render;
pub mod start;
