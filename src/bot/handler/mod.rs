use sea_orm::DatabaseConnection;
use serenity::all::{
    ChannelId, Context, EventHandler, GuildId, Interaction, Message, MessageId, Ready,
};
use serenity::async_trait;

use crate::bot::gateway::DiscordGateway;

pub mod interaction;
pub mod message;
pub mod message_delete;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub guild_id: u64,
    pub suggestions_channel_id: u64,
}

impl Handler {
    pub fn new(db: DatabaseConnection, guild_id: u64, suggestions_channel_id: u64) -> Self {
        Self {
            db,
            guild_id,
            suggestions_channel_id,
        }
    }

    fn gateway(&self, ctx: &Context) -> DiscordGateway {
        DiscordGateway::new(ctx.http.clone(), self.guild_id, self.suggestions_channel_id)
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready, self.guild_id).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        if message.channel_id.get() != self.suggestions_channel_id {
            return;
        }

        let gateway = self.gateway(&ctx);
        message::handle_message(&self.db, &gateway, ctx, message).await;
    }

    /// Called when a message is deleted
    async fn message_delete(
        &self,
        ctx: Context,
        _channel_id: ChannelId,
        deleted_message_id: MessageId,
        guild_id: Option<GuildId>,
    ) {
        if guild_id.map(|id| id.get()) != Some(self.guild_id) {
            return;
        }

        let gateway = self.gateway(&ctx);
        message_delete::handle_message_delete(&self.db, &gateway, deleted_message_id).await;
    }

    /// Called when several messages are deleted at once (e.g. by a moderation purge)
    async fn message_delete_bulk(
        &self,
        ctx: Context,
        _channel_id: ChannelId,
        multiple_deleted_messages_ids: Vec<MessageId>,
        guild_id: Option<GuildId>,
    ) {
        if guild_id.map(|id| id.get()) != Some(self.guild_id) {
            return;
        }

        let gateway = self.gateway(&ctx);
        for message_id in multiple_deleted_messages_ids {
            message_delete::handle_message_delete(&self.db, &gateway, message_id).await;
        }
    }

    /// Called for button presses, slash commands and modal submissions
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let gateway = self.gateway(&ctx);
        interaction::handle_interaction(&self.db, &gateway, ctx, interaction).await;
    }
}
