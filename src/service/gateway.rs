//! Outbound instructions the suggestion workflows issue to the messaging platform.
//!
//! Services depend on this trait instead of serenity so they can be driven by a
//! recording fake in tests. The Discord implementation lives in `bot::gateway`.

use serenity::async_trait;

use crate::{error::AppError, model::view::SuggestionView};

#[async_trait]
pub trait SuggestionGateway: Send + Sync {
    /// Posts a new suggestion embed with vote buttons in the suggestions channel.
    ///
    /// # Returns
    /// - `Ok(u64)` - Discord ID of the posted message
    async fn post_suggestion(&self, view: &SuggestionView) -> Result<u64, AppError>;

    /// Replaces the embed of an existing suggestion message.
    async fn render_suggestion(&self, message_id: u64, view: &SuggestionView)
        -> Result<(), AppError>;

    /// Opens a discussion thread attached to the suggestion message.
    ///
    /// # Returns
    /// - `Ok(u64)` - Discord ID of the created thread
    async fn create_thread(&self, message_id: u64, title: &str) -> Result<u64, AppError>;

    /// Sends a plain message into a thread.
    ///
    /// # Returns
    /// - `Ok(u64)` - Discord ID of the sent message
    async fn send_thread_message(&self, thread_id: u64, content: &str) -> Result<u64, AppError>;

    /// Replaces the content of a message previously sent into a thread.
    async fn edit_thread_message(
        &self,
        thread_id: u64,
        message_id: u64,
        content: &str,
    ) -> Result<(), AppError>;

    /// Deletes a message previously sent into a thread.
    async fn delete_thread_message(&self, thread_id: u64, message_id: u64)
        -> Result<(), AppError>;

    async fn delete_thread(&self, thread_id: u64) -> Result<(), AppError>;

    /// Deletes a message in the suggestions channel.
    async fn delete_message(&self, message_id: u64) -> Result<(), AppError>;

    /// Resolves the current guild display name of a user.
    async fn fetch_display_name(&self, user_id: u64) -> Result<String, AppError>;
}
