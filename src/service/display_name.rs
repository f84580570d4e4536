//! Display-name reconciliation.
//!
//! `author_username` caches the author's guild display name at posting time. Discord
//! sends no event the bot can rely on for nickname changes of arbitrary members, so the
//! cache is corrected by polling: each pass compares recent suggestions against the
//! author's current name. A cached name can therefore lag a nickname change by up to
//! one polling interval.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::suggestion::SuggestionRepository,
    error::AppError,
    model::{suggestion::Suggestion, view::ReconciliationReport},
    service::{gateway::SuggestionGateway, view::refresh_embed},
};

pub struct DisplayNameService<'a, G: SuggestionGateway> {
    db: &'a DatabaseConnection,
    gateway: &'a G,
}

impl<'a, G: SuggestionGateway> DisplayNameService<'a, G> {
    pub fn new(db: &'a DatabaseConnection, gateway: &'a G) -> Self {
        Self { db, gateway }
    }

    /// Re-syncs cached author names of suggestions created at or after `window_start`.
    ///
    /// Names already current are left alone. A changed name is stored first and then
    /// rendered; a failed render is logged and still counts as updated. A suggestion
    /// whose author can't be resolved is logged, counted as failed and skipped.
    ///
    /// # Arguments
    /// - `window_start` - Oldest creation time to reconcile
    ///
    /// # Returns
    /// - `Ok(ReconciliationReport)` - Per-pass counts
    /// - `Err(AppError)` - The recent suggestions couldn't be loaded
    pub async fn reconcile(
        &self,
        window_start: DateTime<Utc>,
    ) -> Result<ReconciliationReport, AppError> {
        let suggestions = SuggestionRepository::new(self.db)
            .get_recent(window_start)
            .await?;

        let mut report = ReconciliationReport {
            scanned: suggestions.len(),
            ..Default::default()
        };
        // Authors often have several recent suggestions; resolve each once per pass.
        let mut resolved: HashMap<u64, String> = HashMap::new();

        for suggestion in suggestions {
            let suggestion_id = suggestion.id;

            match self.reconcile_one(suggestion, &mut resolved).await {
                Ok(true) => report.updated += 1,
                Ok(false) => report.unchanged += 1,
                Err(e) => {
                    tracing::warn!(
                        "Failed to reconcile display name of suggestion #{}: {}",
                        suggestion_id,
                        e
                    );
                    report.failed += 1;
                }
            }
        }

        if report.updated > 0 || report.failed > 0 {
            tracing::info!(
                "Display names reconciled: {} scanned, {} updated, {} failed",
                report.scanned,
                report.updated,
                report.failed
            );
        } else {
            tracing::debug!("Display names reconciled: {} scanned, all current", report.scanned);
        }

        Ok(report)
    }

    async fn reconcile_one(
        &self,
        suggestion: entity::suggestion::Model,
        resolved: &mut HashMap<u64, String>,
    ) -> Result<bool, AppError> {
        let mut suggestion = Suggestion::from_entity(suggestion)?;

        let current = match resolved.get(&suggestion.author_id) {
            Some(name) => name.clone(),
            None => {
                let name = self
                    .gateway
                    .fetch_display_name(suggestion.author_id)
                    .await?;
                resolved.insert(suggestion.author_id, name.clone());
                name
            }
        };

        if current == suggestion.author_username {
            return Ok(false);
        }

        SuggestionRepository::new(self.db)
            .update_author_username(suggestion.id, &current)
            .await?;

        tracing::info!(
            "Display name updated: \"{}\" -> \"{}\" (suggestion #{})",
            suggestion.author_username,
            current,
            suggestion.id
        );

        suggestion.author_username = current;
        refresh_embed(self.db, self.gateway, &suggestion).await;

        Ok(true)
    }
}
