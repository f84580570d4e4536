//! Suggestion factory for creating test suggestion entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test suggestions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::suggestion::SuggestionFactory;
///
/// let suggestion = SuggestionFactory::new(&db)
///     .author_username("Alice")
///     .created_at(Utc::now() - Duration::days(2))
///     .build()
///     .await?;
/// ```
pub struct SuggestionFactory<'a> {
    db: &'a DatabaseConnection,
    message_id: String,
    thread_id: Option<String>,
    audit_message_id: Option<String>,
    author_id: String,
    author_username: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl<'a> SuggestionFactory<'a> {
    /// Creates a new SuggestionFactory with default values.
    ///
    /// Defaults:
    /// - message_id / author_id: unique numeric ids
    /// - thread_id / audit_message_id: `None`
    /// - author_username: `"Author {id}"`
    /// - content: `"Suggestion number {id}"`
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `SuggestionFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            message_id: id.to_string(),
            thread_id: None,
            audit_message_id: None,
            author_id: next_id().to_string(),
            author_username: format!("Author {}", id),
            content: format!("Suggestion number {}", id),
            created_at: Utc::now(),
        }
    }

    pub fn message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = message_id.into();
        self
    }

    pub fn thread_id(mut self, thread_id: Option<String>) -> Self {
        self.thread_id = thread_id;
        self
    }

    pub fn audit_message_id(mut self, audit_message_id: Option<String>) -> Self {
        self.audit_message_id = audit_message_id;
        self
    }

    pub fn author_id(mut self, author_id: impl Into<String>) -> Self {
        self.author_id = author_id.into();
        self
    }

    pub fn author_username(mut self, author_username: impl Into<String>) -> Self {
        self.author_username = author_username.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the suggestion entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::suggestion::Model)` - Created suggestion entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::suggestion::Model, DbErr> {
        entity::suggestion::ActiveModel {
            id: ActiveValue::NotSet,
            message_id: ActiveValue::Set(self.message_id),
            thread_id: ActiveValue::Set(self.thread_id),
            audit_message_id: ActiveValue::Set(self.audit_message_id),
            author_id: ActiveValue::Set(self.author_id),
            author_username: ActiveValue::Set(self.author_username),
            content: ActiveValue::Set(self.content),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a suggestion with default values and no bound thread.
///
/// Shorthand for `SuggestionFactory::new(db).build().await`.
pub async fn create_suggestion(
    db: &DatabaseConnection,
) -> Result<entity::suggestion::Model, DbErr> {
    SuggestionFactory::new(db).build().await
}

/// Creates a suggestion already bound to a freshly generated thread id.
pub async fn create_suggestion_with_thread(
    db: &DatabaseConnection,
) -> Result<entity::suggestion::Model, DbErr> {
    SuggestionFactory::new(db)
        .thread_id(Some(next_id().to_string()))
        .build()
        .await
}
