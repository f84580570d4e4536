use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{suggestion::SuggestionRepository, vote::VoteRepository},
    error::AppError,
    model::{
        suggestion::Suggestion,
        vote::{VoteCast, VoteEffect, VoteType},
    },
    service::{gateway::SuggestionGateway, view::refresh_embed},
};

pub struct VoteService<'a, G: SuggestionGateway> {
    db: &'a DatabaseConnection,
    gateway: &'a G,
}

impl<'a, G: SuggestionGateway> VoteService<'a, G> {
    pub fn new(db: &'a DatabaseConnection, gateway: &'a G) -> Self {
        Self { db, gateway }
    }

    /// Applies one button press to a user's ballot with toggle semantics.
    ///
    /// No vote yet records it, the same direction again retracts it and the opposite
    /// direction overwrites it. Reading the current vote, writing and recounting run in
    /// one transaction so two presses by the same user can't interleave.
    ///
    /// # Arguments
    /// - `suggestion_id` - Suggestion being voted on
    /// - `user_id` - Discord ID of the voter
    /// - `vote_type` - Direction of the pressed button
    ///
    /// # Returns
    /// - `Ok(VoteCast)` - What changed and the tally afterwards
    /// - `Err(AppError::StoreErr)` - Store failure (or unknown suggestion); nothing changed
    pub async fn cast_vote(
        &self,
        suggestion_id: i32,
        user_id: u64,
        vote_type: VoteType,
    ) -> Result<VoteCast, AppError> {
        let txn = self.db.begin().await?;
        let repo = VoteRepository::new(&txn);

        let current = match repo.get_user_vote(suggestion_id, user_id).await? {
            Some(vote) => Some(VoteType::from_stored(&vote.vote_type)?),
            None => None,
        };

        let effect = match current {
            None => {
                repo.upsert(suggestion_id, user_id, vote_type).await?;
                VoteEffect::Applied
            }
            Some(current) if current == vote_type => {
                repo.remove(suggestion_id, user_id).await?;
                VoteEffect::Retracted
            }
            Some(_) => {
                repo.upsert(suggestion_id, user_id, vote_type).await?;
                VoteEffect::Changed
            }
        };

        let tally = repo.count(suggestion_id).await?;
        txn.commit().await?;

        tracing::info!(
            "Vote {:?}: user {} {} on suggestion #{} (now {} up / {} down)",
            effect,
            user_id,
            vote_type,
            suggestion_id,
            tally.upvotes,
            tally.downvotes
        );

        Ok(VoteCast {
            vote_type,
            effect,
            tally,
        })
    }

    /// Handles a vote button pressed on a suggestion message.
    ///
    /// Records the vote, then re-renders the embed with the new tally. A failed render
    /// leaves the vote recorded.
    ///
    /// # Returns
    /// - `Ok(VoteCast)` - The recorded vote
    /// - `Err(AppError::NotFound)` - The message isn't a tracked suggestion
    pub async fn vote_on_message(
        &self,
        message_id: u64,
        user_id: u64,
        vote_type: VoteType,
    ) -> Result<VoteCast, AppError> {
        let suggestion = SuggestionRepository::new(self.db)
            .get_by_message_id(message_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Suggestion not found.".to_string()))?;
        let suggestion = Suggestion::from_entity(suggestion)?;

        let cast = self.cast_vote(suggestion.id, user_id, vote_type).await?;

        refresh_embed(self.db, self.gateway, &suggestion).await;

        Ok(cast)
    }
}
