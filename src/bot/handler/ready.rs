//! Ready event handler for bot initialization.
//!
//! Fired once the bot has authenticated and completed the gateway handshake. Registers
//! the `/edit` guild command; guild commands update immediately, unlike global ones.

use serenity::all::{ActivityData, Context, CreateCommand, GuildId, Ready};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status and registering commands
/// - `ready` - Ready event data containing bot user information
/// - `guild_id` - Guild to register the `/edit` command in
pub async fn handle_ready(ctx: Context, ready: Ready, guild_id: u64) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::watching("for suggestions")));

    let commands = vec![CreateCommand::new("edit").description("Edit your suggestion")];

    match GuildId::new(guild_id).set_commands(&ctx.http, commands).await {
        Ok(registered) => tracing::info!(
            "Registered {} slash command(s) in guild {}",
            registered.len(),
            guild_id
        ),
        Err(e) => tracing::error!("Failed to register slash commands: {}", e),
    }
}
