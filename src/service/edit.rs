//! Suggestion edits and the audit transcript kept in the discussion thread.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{edit_history::EditHistoryRepository, suggestion::SuggestionRepository},
    error::{validation::ValidationError, AppError},
    model::{
        edit_history::{CreateEditHistoryParams, EditHistoryEntry, EditRequest},
        suggestion::Suggestion,
        view::EditOutcome,
    },
    service::{gateway::SuggestionGateway, view::refresh_embed},
    util::{best_effort::BestEffort, parse::parse_optional_u64, text::preview},
};

/// Minimum length of edited content, in characters after trimming.
pub const MIN_EDIT_CHARS: usize = 10;

/// Characters of old and new content shown per transcript version.
pub const AUDIT_PREVIEW_CHARS: usize = 100;

/// Longest audit message Discord accepts.
pub const AUDIT_MAX_CHARS: usize = 2000;

const AUDIT_HEADER: &str = "📝 **Edit History**";

/// Renders the audit transcript of an ordered edit history.
///
/// Versions keep their position in the full history as their number. When the whole
/// transcript exceeds [`AUDIT_MAX_CHARS`] the oldest versions are dropped first and the
/// header notes how many were left out, so the latest edit is always shown.
///
/// # Returns
/// - `Some(String)` - Transcript with one "Version N" block per shown entry
/// - `None` - Empty history; no audit message should exist yet
pub fn format_audit_transcript(history: &[EditHistoryEntry]) -> Option<String> {
    if history.is_empty() {
        return None;
    }

    let versions: Vec<String> = history
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            format!(
                "**Version {}** ({}) - {}\n**From:** {}\n**To:** {}",
                i + 1,
                entry.edited_at.format("%Y-%m-%d %H:%M UTC"),
                entry.edited_by_username,
                preview(&entry.old_content, AUDIT_PREVIEW_CHARS),
                preview(&entry.new_content, AUDIT_PREVIEW_CHARS),
            )
        })
        .collect();

    let mut omitted = 0;
    loop {
        let transcript = join_transcript(&versions[omitted..], omitted);

        // The newest version is kept even if it alone overflows; the gateway cuts it.
        if transcript.chars().count() <= AUDIT_MAX_CHARS || omitted + 1 == versions.len() {
            return Some(transcript);
        }

        omitted += 1;
    }
}

fn join_transcript(versions: &[String], omitted: usize) -> String {
    let header = match omitted {
        0 => AUDIT_HEADER.to_string(),
        1 => format!("{}\n_1 earlier version omitted_", AUDIT_HEADER),
        n => format!("{}\n_{} earlier versions omitted_", AUDIT_HEADER, n),
    };

    format!("{}\n\n{}", header, versions.join("\n\n"))
}

fn check_permission(suggestion: &Suggestion, editor_id: u64, editor_is_admin: bool) -> Result<(), AppError> {
    if suggestion.author_id == editor_id || editor_is_admin {
        return Ok(());
    }

    Err(AppError::Forbidden(
        "Only the suggestion's author or an administrator can edit it.".to_string(),
    ))
}

pub struct EditService<'a, G: SuggestionGateway> {
    db: &'a DatabaseConnection,
    gateway: &'a G,
}

impl<'a, G: SuggestionGateway> EditService<'a, G> {
    pub fn new(db: &'a DatabaseConnection, gateway: &'a G) -> Self {
        Self { db, gateway }
    }

    /// Checks that `/edit` was used inside a suggestion thread by someone allowed to edit.
    ///
    /// # Arguments
    /// - `channel_id` - Channel the command was used in
    /// - `editor_id` - Discord ID of the user running the command
    /// - `editor_is_admin` - Whether the user has the administrator permission
    ///
    /// # Returns
    /// - `Ok(Suggestion)` - The suggestion to prefill the edit modal with
    /// - `Err(AppError::NotFound)` - The channel is not a suggestion thread
    /// - `Err(AppError::Forbidden)` - Neither the author nor an administrator
    pub async fn authorize_edit(
        &self,
        channel_id: u64,
        editor_id: u64,
        editor_is_admin: bool,
    ) -> Result<Suggestion, AppError> {
        let suggestion = SuggestionRepository::new(self.db)
            .get_by_thread_id(channel_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(
                    "This command can only be used inside a suggestion thread.".to_string(),
                )
            })?;
        let suggestion = Suggestion::from_entity(suggestion)?;

        check_permission(&suggestion, editor_id, editor_is_admin)?;

        Ok(suggestion)
    }

    /// Validates and applies a submitted edit.
    ///
    /// Checks run in order and the first failure wins: the suggestion must be addressed
    /// from its own thread, the editor must be the author or an administrator, the
    /// trimmed content must be long enough and must differ from the current content.
    ///
    /// The content update, history entry and (for the author) display-name refresh are
    /// committed together. The content update only applies while the suggestion still
    /// holds the content this edit was validated against; a concurrent edit that landed
    /// first turns this one into a conflict instead of overwriting it. Re-rendering the
    /// embed and the audit transcript afterwards is best effort.
    ///
    /// # Returns
    /// - `Ok(EditOutcome::Applied)` - Content changed
    /// - `Ok(EditOutcome::Unchanged)` - Same content submitted; nothing stored
    /// - `Err(AppError::NotFound | Forbidden | ValidationErr | Conflict)` - Rejected
    pub async fn apply_edit(&self, request: EditRequest) -> Result<EditOutcome, AppError> {
        let suggestion = SuggestionRepository::new(self.db)
            .get_by_thread_id(request.channel_id)
            .await?
            .filter(|s| s.id == request.suggestion_id)
            .ok_or_else(|| AppError::NotFound("Suggestion not found.".to_string()))?;
        let suggestion = Suggestion::from_entity(suggestion)?;

        check_permission(&suggestion, request.editor_id, request.editor_is_admin)?;

        let new_content = request.new_content.trim();
        let length = new_content.chars().count();
        if length < MIN_EDIT_CHARS {
            return Err(ValidationError::TooShort {
                min: MIN_EDIT_CHARS,
                actual: length,
            }
            .into());
        }

        if new_content == suggestion.content {
            tracing::debug!("Edit of suggestion #{} left content unchanged", suggestion.id);
            return Ok(EditOutcome::Unchanged);
        }

        let updated = self.commit_edit(suggestion, &request, new_content).await?;

        refresh_embed(self.db, self.gateway, &updated).await;
        self.sync_audit_message(&updated).await;

        tracing::info!(
            "Suggestion #{} edited by {}",
            updated.id,
            request.editor_display_name
        );

        Ok(EditOutcome::Applied {
            suggestion: updated,
        })
    }

    /// Stores a validated edit in one transaction.
    ///
    /// Writes the new content only while the suggestion still holds `current.content`,
    /// appends the history entry and, when the editor is the author, refreshes the cached
    /// display name.
    ///
    /// # Returns
    /// - `Ok(Suggestion)` - The suggestion as stored after the edit
    /// - `Err(AppError::Conflict)` - The content changed since `current` was read; nothing
    ///   was written
    pub(super) async fn commit_edit(
        &self,
        current: Suggestion,
        request: &EditRequest,
        new_content: &str,
    ) -> Result<Suggestion, AppError> {
        let is_author = request.editor_id == current.author_id;

        let txn = self.db.begin().await?;
        let suggestion_repo = SuggestionRepository::new(&txn);

        let replaced = suggestion_repo
            .update_content(current.id, &current.content, new_content)
            .await?;
        if !replaced {
            return Err(AppError::Conflict(
                "This suggestion was changed while you were editing it. Please try again."
                    .to_string(),
            ));
        }

        EditHistoryRepository::new(&txn)
            .append(CreateEditHistoryParams {
                suggestion_id: current.id,
                old_content: current.content.clone(),
                new_content: new_content.to_string(),
                edited_by_id: request.editor_id,
                edited_by_username: request.editor_display_name.clone(),
            })
            .await?;

        if is_author {
            suggestion_repo
                .update_author_username(current.id, &request.editor_display_name)
                .await?;
        }

        txn.commit().await?;

        let mut updated = current;
        updated.content = new_content.to_string();
        if is_author {
            updated.author_username = request.editor_display_name.clone();
        }

        Ok(updated)
    }

    /// Rebuilds the audit transcript of a suggestion from its stored history.
    pub async fn render_audit_transcript(&self, suggestion_id: i32) -> Result<Option<String>, AppError> {
        let history = EditHistoryRepository::new(self.db)
            .get_by_suggestion_id(suggestion_id)
            .await?
            .into_iter()
            .map(EditHistoryEntry::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(format_audit_transcript(&history))
    }

    /// Replaces the audit message in the suggestion's thread with the current transcript.
    ///
    /// The first call after an edit creates the message and remembers its id; later calls
    /// edit it in place. The id is stored once: if a concurrent edit stored its own audit
    /// message first, the message sent here is deleted and the stored one is updated.
    pub async fn sync_audit_message(&self, suggestion: &Suggestion) -> BestEffort {
        BestEffort::record(
            &format!("update audit message of suggestion #{}", suggestion.id),
            self.write_audit_message(suggestion).await,
        )
    }

    async fn write_audit_message(&self, suggestion: &Suggestion) -> Result<(), AppError> {
        let thread_id = suggestion.thread_id.ok_or_else(|| {
            AppError::NotFound(format!("Suggestion #{} has no thread", suggestion.id))
        })?;

        let Some(transcript) = self.render_audit_transcript(suggestion.id).await? else {
            return Ok(());
        };

        match suggestion.audit_message_id {
            Some(audit_message_id) => {
                self.gateway
                    .edit_thread_message(thread_id, audit_message_id, &transcript)
                    .await
            }
            None => {
                let sent = self
                    .gateway
                    .send_thread_message(thread_id, &transcript)
                    .await?;

                let repo = SuggestionRepository::new(self.db);
                if repo.update_audit_message_id(suggestion.id, sent).await? {
                    return Ok(());
                }

                // A concurrent edit stored its audit message first; keep that one.
                BestEffort::record(
                    &format!("remove duplicate audit message of suggestion #{}", suggestion.id),
                    self.gateway.delete_thread_message(thread_id, sent).await,
                );

                let stored = repo
                    .get_by_id(suggestion.id)
                    .await?
                    .ok_or_else(|| {
                        AppError::NotFound(format!("Suggestion #{} not found", suggestion.id))
                    })?;

                match parse_optional_u64(stored.audit_message_id)? {
                    Some(audit_message_id) => {
                        self.gateway
                            .edit_thread_message(thread_id, audit_message_id, &transcript)
                            .await
                    }
                    None => Ok(()),
                }
            }
        }
    }
}
