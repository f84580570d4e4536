use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// One applied edit of a suggestion. Entries are append-only.
#[derive(Debug, Clone, PartialEq)]
pub struct EditHistoryEntry {
    pub id: i32,
    pub suggestion_id: i32,
    pub old_content: String,
    pub new_content: String,
    pub edited_by_id: u64,
    /// Display name of the editor at the time of the edit.
    pub edited_by_username: String,
    pub edited_at: DateTime<Utc>,
}

impl EditHistoryEntry {
    pub fn from_entity(entity: entity::edit_history::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            suggestion_id: entity.suggestion_id,
            old_content: entity.old_content,
            new_content: entity.new_content,
            edited_by_id: parse_u64_from_string(entity.edited_by_id)?,
            edited_by_username: entity.edited_by_username,
            edited_at: entity.edited_at,
        })
    }
}

/// Parameters for appending an edit history entry.
#[derive(Debug, Clone)]
pub struct CreateEditHistoryParams {
    pub suggestion_id: i32,
    pub old_content: String,
    pub new_content: String,
    pub edited_by_id: u64,
    pub edited_by_username: String,
}

/// An edit submitted through the `/edit` modal.
#[derive(Debug, Clone)]
pub struct EditRequest {
    /// Suggestion id carried in the modal's custom id.
    pub suggestion_id: i32,
    /// Channel the modal was submitted from; must be the suggestion's thread.
    pub channel_id: u64,
    pub editor_id: u64,
    pub editor_display_name: String,
    /// Whether the editor holds the administrator permission in the guild.
    pub editor_is_admin: bool,
    /// Raw submitted text, trimmed before validation.
    pub new_content: String,
}
