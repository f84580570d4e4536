//! Suggestion lifecycle: creation from a channel message, thread binding and teardown
//! after the suggestion message is deleted.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    data::suggestion::SuggestionRepository,
    error::{validation::ValidationError, AppError},
    model::{
        suggestion::{CreateSuggestionParams, IncomingSuggestion, Suggestion, SuggestionState},
        view::{SuggestionRemoval, SuggestionView},
        vote::VoteTally,
    },
    service::{gateway::SuggestionGateway, view::refresh_embed},
    util::{best_effort::BestEffort, text::truncate_with_ellipsis},
};

/// Discord's limit on thread names.
pub const THREAD_TITLE_MAX_CHARS: usize = 100;

/// Trims a suggestion body and rejects it when nothing is left.
pub fn validate_content(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyContent);
    }

    Ok(trimmed.to_string())
}

/// Thread name derived from the suggestion content.
pub fn thread_title(content: &str) -> String {
    truncate_with_ellipsis(content, THREAD_TITLE_MAX_CHARS)
}

fn welcome_message(suggestion: &Suggestion) -> String {
    format!(
        "💬 Use this thread to discuss this suggestion!\n\n**Author:** <@{}>\n**Suggestion:** {}",
        suggestion.author_id, suggestion.content
    )
}

pub struct SuggestionService<'a, G: SuggestionGateway> {
    db: &'a DatabaseConnection,
    gateway: &'a G,
}

impl<'a, G: SuggestionGateway> SuggestionService<'a, G> {
    pub fn new(db: &'a DatabaseConnection, gateway: &'a G) -> Self {
        Self { db, gateway }
    }

    /// Turns a message from the suggestions channel into a tracked suggestion.
    ///
    /// Posts the embed first since the store keys suggestions by the embed's message id,
    /// then persists, opens the discussion thread and removes the user's original
    /// message. A missing thread leaves the suggestion in the `Created` state; votes still
    /// work on it.
    ///
    /// # Arguments
    /// - `incoming` - The message delivered by the gateway
    ///
    /// # Returns
    /// - `Ok(Suggestion)` - The stored suggestion, thread-bound when the thread was created
    /// - `Err(AppError::ValidationErr(EmptyContent))` - Empty body; the source message
    ///   has been deleted
    /// - `Err(AppError)` - Posting the embed or persisting failed; any embed already
    ///   posted and the source message have been removed
    pub async fn create_from_message(
        &self,
        incoming: IncomingSuggestion,
    ) -> Result<Suggestion, AppError> {
        let content = match validate_content(&incoming.content) {
            Ok(content) => content,
            Err(e) => {
                BestEffort::record(
                    "delete empty suggestion message",
                    self.gateway.delete_message(incoming.source_message_id).await,
                );
                return Err(e.into());
            }
        };

        let pending = SuggestionView {
            suggestion_id: None,
            author_id: incoming.author_id,
            author_display_name: incoming.author_display_name.clone(),
            content: content.clone(),
            tally: VoteTally::default(),
            edited: false,
            created_at: Utc::now(),
        };
        let message_id = self.gateway.post_suggestion(&pending).await?;

        let suggestion = match self
            .record(CreateSuggestionParams {
                message_id,
                author_id: incoming.author_id,
                author_username: incoming.author_display_name,
                content,
            })
            .await
        {
            Ok(suggestion) => suggestion,
            Err(e) => {
                BestEffort::record(
                    "remove unrecorded suggestion embed",
                    self.gateway.delete_message(message_id).await,
                );
                BestEffort::record(
                    "delete source message",
                    self.gateway.delete_message(incoming.source_message_id).await,
                );
                return Err(e);
            }
        };

        refresh_embed(self.db, self.gateway, &suggestion).await;

        let suggestion = match self
            .gateway
            .create_thread(message_id, &thread_title(&suggestion.content))
            .await
        {
            Ok(thread_id) => {
                let bound = self.bind_thread(suggestion.id, thread_id).await?;

                BestEffort::record(
                    &format!("welcome message for suggestion #{}", bound.id),
                    self.gateway
                        .send_thread_message(thread_id, &welcome_message(&bound))
                        .await,
                );

                bound
            }
            Err(e) => {
                tracing::warn!(
                    "Suggestion #{} has no discussion thread: {}",
                    suggestion.id,
                    e
                );
                suggestion
            }
        };

        BestEffort::record(
            "delete source message",
            self.gateway.delete_message(incoming.source_message_id).await,
        );

        tracing::info!(
            "Suggestion #{} created by {}",
            suggestion.id,
            suggestion.author_username
        );

        Ok(suggestion)
    }

    /// Stores a suggestion for an already posted embed.
    pub async fn record(&self, params: CreateSuggestionParams) -> Result<Suggestion, AppError> {
        let repo = SuggestionRepository::new(self.db);

        let suggestion = repo.create(params).await?;

        Suggestion::from_entity(suggestion)
    }

    /// Binds the discussion thread of a suggestion.
    ///
    /// Moves the suggestion from `Created` to `ThreadBound`. Binding the same thread
    /// again is a no-op; a different thread is rejected since the thread id is set once.
    ///
    /// # Returns
    /// - `Ok(Suggestion)` - The thread-bound suggestion
    /// - `Err(AppError::NotFound)` - No suggestion with that id
    /// - `Err(AppError::Conflict)` - Already bound to another thread
    pub async fn bind_thread(&self, suggestion_id: i32, thread_id: u64) -> Result<Suggestion, AppError> {
        let repo = SuggestionRepository::new(self.db);

        let bound_now = repo.update_thread_id(suggestion_id, thread_id).await?;

        let suggestion = repo
            .get_by_id(suggestion_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Suggestion #{} not found", suggestion_id)))?;
        let suggestion = Suggestion::from_entity(suggestion)?;

        match suggestion.state() {
            SuggestionState::ThreadBound { thread_id: bound } if bound == thread_id => {
                if !bound_now {
                    tracing::debug!(
                        "Suggestion #{} already bound to thread {}",
                        suggestion_id,
                        thread_id
                    );
                }
                Ok(suggestion)
            }
            SuggestionState::ThreadBound { thread_id: bound } => Err(AppError::Conflict(format!(
                "Suggestion #{} is already bound to thread {}",
                suggestion_id, bound
            ))),
            SuggestionState::Created => Err(AppError::Conflict(format!(
                "Suggestion #{} could not be bound to thread {}",
                suggestion_id, thread_id
            ))),
        }
    }

    /// Tears down a suggestion whose message was deleted in Discord.
    ///
    /// Deletes the discussion thread (best effort) and then the suggestion, which
    /// cascades to its votes and edit history. Messages that aren't suggestions and
    /// repeated notifications are ignored.
    ///
    /// # Returns
    /// - `Ok(Some(SuggestionRemoval))` - Suggestion removed
    /// - `Ok(None)` - The message wasn't a (still existing) suggestion
    /// - `Err(AppError)` - Store failure
    pub async fn on_external_delete(
        &self,
        message_id: u64,
    ) -> Result<Option<SuggestionRemoval>, AppError> {
        let repo = SuggestionRepository::new(self.db);

        let Some(suggestion) = repo.get_by_message_id(message_id).await? else {
            tracing::debug!("Deleted message {} is not a suggestion", message_id);
            return Ok(None);
        };
        let suggestion = Suggestion::from_entity(suggestion)?;

        let thread_cleanup = match suggestion.thread_id {
            Some(thread_id) => Some(BestEffort::record(
                &format!("delete thread of suggestion #{}", suggestion.id),
                self.gateway.delete_thread(thread_id).await,
            )),
            None => None,
        };

        repo.delete(suggestion.id).await?;

        tracing::info!("Suggestion #{} removed after its message was deleted", suggestion.id);

        Ok(Some(SuggestionRemoval {
            suggestion_id: suggestion.id,
            thread_cleanup,
        }))
    }
}
