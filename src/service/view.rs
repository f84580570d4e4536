use sea_orm::ConnectionTrait;

use crate::{
    data::{edit_history::EditHistoryRepository, vote::VoteRepository},
    error::AppError,
    model::{suggestion::Suggestion, view::SuggestionView},
    service::gateway::SuggestionGateway,
    util::best_effort::BestEffort,
};

/// Builds the embed data of a stored suggestion from a fresh tally and history count.
pub async fn build_view<C: ConnectionTrait>(
    db: &C,
    suggestion: &Suggestion,
) -> Result<SuggestionView, AppError> {
    let tally = VoteRepository::new(db).count(suggestion.id).await?;
    let edits = EditHistoryRepository::new(db)
        .count_by_suggestion_id(suggestion.id)
        .await?;

    Ok(SuggestionView::from_suggestion(suggestion, tally, edits > 0))
}

/// Re-renders the suggestion message from the store.
///
/// A failure to read the tally counts as a failed render; the caller's store change has
/// already been committed either way.
pub async fn refresh_embed<C: ConnectionTrait, G: SuggestionGateway>(
    db: &C,
    gateway: &G,
    suggestion: &Suggestion,
) -> BestEffort {
    let action = format!("render suggestion #{}", suggestion.id);

    let view = match build_view(db, suggestion).await {
        Ok(view) => view,
        Err(e) => return BestEffort::record(&action, Err::<(), _>(e)),
    };

    BestEffort::record(
        &action,
        gateway.render_suggestion(suggestion.message_id, &view).await,
    )
}
