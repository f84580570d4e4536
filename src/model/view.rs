//! Values handed to the Discord gateway and returned from workflows.

use chrono::{DateTime, Utc};

use crate::{
    model::{suggestion::Suggestion, vote::VoteTally},
    util::best_effort::BestEffort,
};

/// Everything needed to render a suggestion embed.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionView {
    /// `None` while the suggestion has not been stored yet.
    pub suggestion_id: Option<i32>,
    pub author_id: u64,
    pub author_display_name: String,
    pub content: String,
    pub tally: VoteTally,
    /// True once the suggestion has at least one edit history entry.
    pub edited: bool,
    pub created_at: DateTime<Utc>,
}

impl SuggestionView {
    pub fn from_suggestion(suggestion: &Suggestion, tally: VoteTally, edited: bool) -> Self {
        Self {
            suggestion_id: Some(suggestion.id),
            author_id: suggestion.author_id,
            author_display_name: suggestion.author_username.clone(),
            content: suggestion.content.clone(),
            tally,
            edited,
            created_at: suggestion.created_at,
        }
    }
}

/// Result of submitting an edit.
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    /// Content changed and a history entry was appended.
    Applied { suggestion: Suggestion },
    /// Submitted content equals the current content; nothing was stored.
    Unchanged,
}

/// Counts from one display-name reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconciliationReport {
    /// Suggestions inside the window.
    pub scanned: usize,
    /// Cached names that were replaced.
    pub updated: usize,
    /// Cached names already current.
    pub unchanged: usize,
    /// Suggestions whose author name couldn't be resolved or stored.
    pub failed: usize,
}

/// What tearing down an externally deleted suggestion did.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionRemoval {
    pub suggestion_id: i32,
    /// Outcome of deleting the discussion thread; `None` when no thread was bound.
    pub thread_cleanup: Option<BestEffort>,
}
