mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod util;

use crate::{bot::start, config::Config, error::AppError, scheduler::display_name_sync};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Starting suggestion board");

    let (bot_client, discord_http) = start::init_bot(&config, db.clone()).await?;

    display_name_sync::start_scheduler(db, discord_http, &config).await?;

    start::start_bot(bot_client).await
}
