use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, config::Config, error::AppError};

/// Starts the Discord bot in a blocking manner
///
/// Creates the client with the view event handler and runs it until the gateway
/// connection shuts down.
///
/// # Arguments
/// - `config` - Application configuration
/// - `db` - Database connection for the bot to use
///
/// # Returns
/// - `Ok(())` if the bot starts and runs successfully
/// - `Err(AppError)` if bot initialization or connection fails
pub async fn start_bot(config: Config, db: DatabaseConnection) -> Result<(), AppError> {
    // GUILD_MESSAGES delivers the message delete events used to forget views.
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES;

    let token = config.discord_bot_token.clone();
    let handler = Handler::new(db, config);

    let mut client = Client::builder(&token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
