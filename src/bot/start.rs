use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;

use crate::{bot::handler::Handler, config::Config, error::AppError};

/// Builds the Discord bot client without connecting it.
///
/// The HTTP client is returned separately so the scheduler can share it.
///
/// # Arguments
/// - `config` - Application configuration
/// - `db` - Database connection for the bot to use
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client ready to start and its HTTP handle
/// - `Err(AppError)` - Client construction failed (e.g. malformed token)
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
) -> Result<(Client, Arc<Http>), AppError> {
    // MESSAGE_CONTENT and GUILD_MEMBERS are privileged intents
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MEMBERS;

    let handler = Handler::new(db, config.guild_id, config.suggestions_channel_id);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Connects the bot and runs it until shutdown.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
