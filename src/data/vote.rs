use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::model::vote::{VoteTally, VoteType};

pub struct VoteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VoteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the live vote of a user on a suggestion.
    pub async fn get_user_vote(
        &self,
        suggestion_id: i32,
        user_id: u64,
    ) -> Result<Option<entity::vote::Model>, DbErr> {
        entity::prelude::Vote::find()
            .filter(entity::vote::Column::SuggestionId.eq(suggestion_id))
            .filter(entity::vote::Column::UserId.eq(user_id.to_string()))
            .one(self.db)
            .await
    }

    /// Inserts or overwrites the vote of a user on a suggestion.
    ///
    /// Relies on the unique `(suggestion_id, user_id)` index: a second row for the same
    /// voter turns into an update of type and timestamp.
    pub async fn upsert(
        &self,
        suggestion_id: i32,
        user_id: u64,
        vote_type: VoteType,
    ) -> Result<(), DbErr> {
        entity::prelude::Vote::insert(entity::vote::ActiveModel {
            suggestion_id: ActiveValue::Set(suggestion_id),
            user_id: ActiveValue::Set(user_id.to_string()),
            vote_type: ActiveValue::Set(vote_type.as_str().to_string()),
            voted_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::vote::Column::SuggestionId,
                entity::vote::Column::UserId,
            ])
            .update_columns([entity::vote::Column::VoteType, entity::vote::Column::VotedAt])
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Removes the vote of a user on a suggestion.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of votes removed (0 when the user had none)
    /// - `Err(DbErr)` - Database error
    pub async fn remove(&self, suggestion_id: i32, user_id: u64) -> Result<u64, DbErr> {
        let result = entity::prelude::Vote::delete_many()
            .filter(entity::vote::Column::SuggestionId.eq(suggestion_id))
            .filter(entity::vote::Column::UserId.eq(user_id.to_string()))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    /// Counts live votes for a suggestion, partitioned by type.
    pub async fn count(&self, suggestion_id: i32) -> Result<VoteTally, DbErr> {
        let upvotes = self.count_of_type(suggestion_id, VoteType::Up).await?;
        let downvotes = self.count_of_type(suggestion_id, VoteType::Down).await?;

        Ok(VoteTally { upvotes, downvotes })
    }

    async fn count_of_type(&self, suggestion_id: i32, vote_type: VoteType) -> Result<u64, DbErr> {
        entity::prelude::Vote::find()
            .filter(entity::vote::Column::SuggestionId.eq(suggestion_id))
            .filter(entity::vote::Column::VoteType.eq(vote_type.as_str()))
            .count(self.db)
            .await
    }
}
