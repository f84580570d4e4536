//! Suggestion domain model and lifecycle state.

use chrono::{DateTime, Utc};

use crate::{
    error::AppError,
    util::parse::{parse_optional_u64, parse_u64_from_string},
};

/// A tracked suggestion.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    /// Store-assigned identifier, shown in the embed footer.
    pub id: i32,
    /// Discord ID of the bot's embed message. Never changes after creation.
    pub message_id: u64,
    /// Discussion thread opened from the embed, once bound.
    pub thread_id: Option<u64>,
    /// Bot message in the thread holding the edit transcript, once the first edit lands.
    pub audit_message_id: Option<u64>,
    /// Discord ID of the author. Never changes after creation.
    pub author_id: u64,
    /// Cached display name of the author.
    pub author_username: String,
    /// Current, trimmed suggestion text.
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Where a suggestion sits in its lifecycle.
///
/// Deletion is not a state: a deleted suggestion no longer exists in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionState {
    /// Stored, no thread attached yet.
    Created,
    /// Discussion thread attached; votes and edits are accepted.
    ThreadBound { thread_id: u64 },
}

impl Suggestion {
    /// Converts an entity model to a suggestion domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Suggestion)` - The converted suggestion
    /// - `Err(AppError::InternalErr(ParseStringId))` - A stored Discord id is not numeric
    pub fn from_entity(entity: entity::suggestion::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            message_id: parse_u64_from_string(entity.message_id)?,
            thread_id: parse_optional_u64(entity.thread_id)?,
            audit_message_id: parse_optional_u64(entity.audit_message_id)?,
            author_id: parse_u64_from_string(entity.author_id)?,
            author_username: entity.author_username,
            content: entity.content,
            created_at: entity.created_at,
        })
    }

    pub fn state(&self) -> SuggestionState {
        match self.thread_id {
            Some(thread_id) => SuggestionState::ThreadBound { thread_id },
            None => SuggestionState::Created,
        }
    }
}

/// A message posted in the suggestions channel, as delivered by the gateway.
#[derive(Debug, Clone)]
pub struct IncomingSuggestion {
    /// Discord ID of the user's own message, deleted once the suggestion is posted.
    pub source_message_id: u64,
    pub author_id: u64,
    /// Guild display name of the author at posting time.
    pub author_display_name: String,
    /// Raw, untrimmed message body.
    pub content: String,
}

/// Parameters for recording a new suggestion.
#[derive(Debug, Clone)]
pub struct CreateSuggestionParams {
    pub message_id: u64,
    pub author_id: u64,
    pub author_username: String,
    /// Already trimmed and known to be non-empty.
    pub content: String,
}
