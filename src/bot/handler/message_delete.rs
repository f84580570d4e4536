use sea_orm::DatabaseConnection;
use serenity::all::MessageId;

use crate::{bot::gateway::DiscordGateway, service::suggestion::SuggestionService};

/// Removes the suggestion whose message was deleted, if any.
pub async fn handle_message_delete(
    db: &DatabaseConnection,
    gateway: &DiscordGateway,
    message_id: MessageId,
) {
    let service = SuggestionService::new(db, gateway);

    if let Err(e) = service.on_external_delete(message_id.get()).await {
        tracing::error!(
            "Failed to remove suggestion for deleted message {}: {}",
            message_id,
            e
        );
    }
}
