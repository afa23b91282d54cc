mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;
mod util;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_tracing(&config);

    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Database ready, connecting to Discord");

    bot::start::start_bot(config, db).await
}
