use sea_orm::DatabaseConnection;
use serenity::all::{Context, Message};

use crate::{
    bot::gateway::DiscordGateway,
    error::AppError,
    model::suggestion::IncomingSuggestion,
    service::suggestion::SuggestionService,
};

/// Turns a message in the suggestions channel into a suggestion.
///
/// Messages from bots (including this one) are ignored. The author's guild nickname is
/// used as the display name when set.
pub async fn handle_message(
    db: &DatabaseConnection,
    gateway: &DiscordGateway,
    ctx: Context,
    message: Message,
) {
    if message.author.bot {
        return;
    }

    let author_display_name = message
        .author_nick(&ctx.http)
        .await
        .unwrap_or_else(|| message.author.display_name().to_string());

    let incoming = IncomingSuggestion {
        source_message_id: message.id.get(),
        author_id: message.author.id.get(),
        author_display_name,
        content: message.content,
    };

    let service = SuggestionService::new(db, gateway);

    match service.create_from_message(incoming).await {
        Ok(_) => {}
        Err(AppError::ValidationErr(e)) => {
            tracing::debug!("Rejected suggestion from {}: {}", message.author.id, e);
        }
        Err(e) => {
            tracing::error!("Failed to create suggestion from message {}: {}", message.id, e);
        }
    }
}
