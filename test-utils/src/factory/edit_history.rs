//! Edit history factory for creating test edit history entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test edit history entries.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::edit_history::EditHistoryFactory;
///
/// let entry = EditHistoryFactory::new(&db, suggestion.id)
///     .contents("old text here", "new text here")
///     .edited_at(Utc::now() - Duration::minutes(5))
///     .build()
///     .await?;
/// ```
pub struct EditHistoryFactory<'a> {
    db: &'a DatabaseConnection,
    suggestion_id: i32,
    old_content: String,
    new_content: String,
    edited_by_id: String,
    edited_by_username: String,
    edited_at: DateTime<Utc>,
}

impl<'a> EditHistoryFactory<'a> {
    /// Creates a new EditHistoryFactory with default values.
    ///
    /// Defaults:
    /// - old_content / new_content: `"Original content"` / `"Edited content"`
    /// - edited_by_id / edited_by_username: `"1"` / `"Editor"`
    /// - edited_at: now
    pub fn new(db: &'a DatabaseConnection, suggestion_id: i32) -> Self {
        Self {
            db,
            suggestion_id,
            old_content: "Original content".to_string(),
            new_content: "Edited content".to_string(),
            edited_by_id: "1".to_string(),
            edited_by_username: "Editor".to_string(),
            edited_at: Utc::now(),
        }
    }

    pub fn contents(mut self, old_content: impl Into<String>, new_content: impl Into<String>) -> Self {
        self.old_content = old_content.into();
        self.new_content = new_content.into();
        self
    }

    pub fn editor(mut self, id: impl Into<String>, username: impl Into<String>) -> Self {
        self.edited_by_id = id.into();
        self.edited_by_username = username.into();
        self
    }

    pub fn edited_at(mut self, edited_at: DateTime<Utc>) -> Self {
        self.edited_at = edited_at;
        self
    }

    /// Builds and inserts the edit history entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::edit_history::Model)` - Created edit history entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::edit_history::Model, DbErr> {
        entity::edit_history::ActiveModel {
            id: ActiveValue::NotSet,
            suggestion_id: ActiveValue::Set(self.suggestion_id),
            old_content: ActiveValue::Set(self.old_content),
            new_content: ActiveValue::Set(self.new_content),
            edited_by_id: ActiveValue::Set(self.edited_by_id),
            edited_by_username: ActiveValue::Set(self.edited_by_username),
            edited_at: ActiveValue::Set(self.edited_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an edit history entry with default values for the given suggestion.
pub async fn create_edit_history(
    db: &DatabaseConnection,
    suggestion_id: i32,
) -> Result<entity::edit_history::Model, DbErr> {
    EditHistoryFactory::new(db, suggestion_id).build().await
}
