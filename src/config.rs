use std::collections::HashSet;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://views.db?mode=rwc";
const DEFAULT_LOG_LEVEL: &str = "info";

pub struct Config {
    pub database_url: String,

    pub discord_bot_token: String,
    /// Guild to register slash commands in; commands are registered globally when unset.
    pub discord_guild_id: Option<u64>,

    /// Users allowed to publish and list role views.
    pub whitelist: HashSet<u64>,

    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let discord_guild_id = match std::env::var("DISCORD_GUILD_ID") {
            Ok(value) => Some(parse_id("DISCORD_GUILD_ID", &value)?),
            Err(_) => None,
        };

        let whitelist = match std::env::var("BOT_WHITELIST") {
            Ok(value) => parse_whitelist(&value)?,
            Err(_) => HashSet::new(),
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            discord_guild_id,
            whitelist,
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
        })
    }

    /// Authorization boundary for the publishing commands.
    pub fn is_whitelisted(&self, user_id: u64) -> bool {
        self.whitelist.contains(&user_id)
    }
}

/// Parses a comma-separated list of Discord user ids.
///
/// Blank entries are ignored so trailing commas and spaces are tolerated.
///
/// # Arguments
/// - `value` - Raw environment variable value
///
/// # Returns
/// - `Ok(HashSet<u64>)` - Parsed user ids
/// - `Err(ConfigError::InvalidEnvVar)` - An entry is not a valid id
pub fn parse_whitelist(value: &str) -> Result<HashSet<u64>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| parse_id("BOT_WHITELIST", entry))
        .collect()
}

fn parse_id(name: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}
