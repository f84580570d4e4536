use std::sync::Arc;

use serenity::{
    all::{
        AutoArchiveDuration, ChannelId, CreateMessage, CreateThread, EditMessage, GuildId,
        MessageId, UserId,
    },
    async_trait,
    http::Http,
};

use crate::{
    bot::render::{build_suggestion_embed, vote_buttons, MESSAGE_MAX_CHARS},
    error::AppError,
    model::view::SuggestionView,
    service::gateway::SuggestionGateway,
    util::text::truncate_with_ellipsis,
};

/// Suggestion gateway backed by the Discord HTTP API.
pub struct DiscordGateway {
    http: Arc<Http>,
    guild_id: GuildId,
    /// Suggestions channel; every suggestion embed lives here.
    channel_id: ChannelId,
}

impl DiscordGateway {
    pub fn new(http: Arc<Http>, guild_id: u64, channel_id: u64) -> Self {
        Self {
            http,
            guild_id: GuildId::new(guild_id),
            channel_id: ChannelId::new(channel_id),
        }
    }
}

#[async_trait]
impl SuggestionGateway for DiscordGateway {
    async fn post_suggestion(&self, view: &SuggestionView) -> Result<u64, AppError> {
        let message = CreateMessage::new()
            .embed(build_suggestion_embed(view)?)
            .components(vec![vote_buttons()]);

        let message = self.channel_id.send_message(&self.http, message).await?;

        Ok(message.id.get())
    }

    async fn render_suggestion(
        &self,
        message_id: u64,
        view: &SuggestionView,
    ) -> Result<(), AppError> {
        let edit = EditMessage::new()
            .embed(build_suggestion_embed(view)?)
            .components(vec![vote_buttons()]);

        self.channel_id
            .edit_message(&self.http, MessageId::new(message_id), edit)
            .await?;

        Ok(())
    }

    async fn create_thread(&self, message_id: u64, title: &str) -> Result<u64, AppError> {
        let builder = CreateThread::new(title)
            .auto_archive_duration(AutoArchiveDuration::OneWeek)
            .audit_log_reason("Discussion thread for suggestion");

        let thread = self
            .channel_id
            .create_thread_from_message(&self.http, MessageId::new(message_id), builder)
            .await?;

        Ok(thread.id.get())
    }

    async fn send_thread_message(&self, thread_id: u64, content: &str) -> Result<u64, AppError> {
        let message = CreateMessage::new().content(truncate_with_ellipsis(content, MESSAGE_MAX_CHARS));

        let message = ChannelId::new(thread_id)
            .send_message(&self.http, message)
            .await?;

        Ok(message.id.get())
    }

    async fn edit_thread_message(
        &self,
        thread_id: u64,
        message_id: u64,
        content: &str,
    ) -> Result<(), AppError> {
        let edit = EditMessage::new().content(truncate_with_ellipsis(content, MESSAGE_MAX_CHARS));

        ChannelId::new(thread_id)
            .edit_message(&self.http, MessageId::new(message_id), edit)
            .await?;

        Ok(())
    }

    async fn delete_thread_message(&self, thread_id: u64, message_id: u64) -> Result<(), AppError> {
        ChannelId::new(thread_id)
            .delete_message(&self.http, MessageId::new(message_id))
            .await?;

        Ok(())
    }

    async fn delete_thread(&self, thread_id: u64) -> Result<(), AppError> {
        ChannelId::new(thread_id).delete(&self.http).await?;

        Ok(())
    }

    async fn delete_message(&self, message_id: u64) -> Result<(), AppError> {
        self.channel_id
            .delete_message(&self.http, MessageId::new(message_id))
            .await?;

        Ok(())
    }

    async fn fetch_display_name(&self, user_id: u64) -> Result<String, AppError> {
        // Requires the GUILD_MEMBERS privileged intent
        let member = self
            .guild_id
            .member(&self.http, UserId::new(user_id))
            .await?;

        Ok(member.display_name().to_string())
    }
}
