//! Vote factory for creating test vote entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a vote row directly, bypassing the toggle rules.
///
/// # Arguments
/// - `db` - Database connection
/// - `suggestion_id` - Suggestion the vote belongs to
/// - `user_id` - Discord ID of the voter
/// - `vote_type` - `"up"` or `"down"`
///
/// # Returns
/// - `Ok(entity::vote::Model)` - Created vote entity
/// - `Err(DbErr)` - Database error during insert (e.g. duplicate voter)
pub async fn create_vote(
    db: &DatabaseConnection,
    suggestion_id: i32,
    user_id: impl Into<String>,
    vote_type: &str,
) -> Result<entity::vote::Model, DbErr> {
    entity::vote::ActiveModel {
        id: ActiveValue::NotSet,
        suggestion_id: ActiveValue::Set(suggestion_id),
        user_id: ActiveValue::Set(user_id.into()),
        vote_type: ActiveValue::Set(vote_type.to_string()),
        voted_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
