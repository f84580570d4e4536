use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::suggestion::CreateSuggestionParams;

pub struct SuggestionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SuggestionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a new suggestion with no thread or audit message.
    ///
    /// # Arguments
    /// - `params` - Rendered message id, author and trimmed content
    ///
    /// # Returns
    /// - `Ok(Model)` - The created suggestion with its assigned id
    /// - `Err(DbErr)` - Database error, including a unique violation on `message_id`
    pub async fn create(
        &self,
        params: CreateSuggestionParams,
    ) -> Result<entity::suggestion::Model, DbErr> {
        entity::suggestion::ActiveModel {
            message_id: ActiveValue::Set(params.message_id.to_string()),
            thread_id: ActiveValue::Set(None),
            audit_message_id: ActiveValue::Set(None),
            author_id: ActiveValue::Set(params.author_id.to_string()),
            author_username: ActiveValue::Set(params.author_username),
            content: ActiveValue::Set(params.content),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::suggestion::Model>, DbErr> {
        entity::prelude::Suggestion::find_by_id(id).one(self.db).await
    }

    /// Finds the suggestion rendered in the given message.
    pub async fn get_by_message_id(
        &self,
        message_id: u64,
    ) -> Result<Option<entity::suggestion::Model>, DbErr> {
        entity::prelude::Suggestion::find()
            .filter(entity::suggestion::Column::MessageId.eq(message_id.to_string()))
            .one(self.db)
            .await
    }

    /// Finds the suggestion whose discussion thread has the given id.
    pub async fn get_by_thread_id(
        &self,
        thread_id: u64,
    ) -> Result<Option<entity::suggestion::Model>, DbErr> {
        entity::prelude::Suggestion::find()
            .filter(entity::suggestion::Column::ThreadId.eq(thread_id.to_string()))
            .one(self.db)
            .await
    }

    /// Gets suggestions created at or after `since`, oldest first.
    pub async fn get_recent(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<entity::suggestion::Model>, DbErr> {
        entity::prelude::Suggestion::find()
            .filter(entity::suggestion::Column::CreatedAt.gte(since))
            .order_by_asc(entity::suggestion::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Replaces the content of a suggestion if it still holds `expected_content`.
    ///
    /// The comparison happens in the UPDATE itself, so an edit that read stale content
    /// can't overwrite a concurrent one.
    ///
    /// # Returns
    /// - `Ok(true)` - Content replaced
    /// - `Ok(false)` - No suggestion with that id holds `expected_content`
    /// - `Err(DbErr)` - Database error
    pub async fn update_content(
        &self,
        id: i32,
        expected_content: &str,
        new_content: &str,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Suggestion::update_many()
            .filter(entity::suggestion::Column::Id.eq(id))
            .filter(entity::suggestion::Column::Content.eq(expected_content))
            .col_expr(
                entity::suggestion::Column::Content,
                Expr::value(new_content.to_string()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Binds the discussion thread, only while no thread is bound yet.
    ///
    /// # Returns
    /// - `Ok(true)` - Thread id stored
    /// - `Ok(false)` - Suggestion missing or already bound; nothing changed
    /// - `Err(DbErr)` - Database error
    pub async fn update_thread_id(&self, id: i32, thread_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::Suggestion::update_many()
            .filter(entity::suggestion::Column::Id.eq(id))
            .filter(entity::suggestion::Column::ThreadId.is_null())
            .col_expr(
                entity::suggestion::Column::ThreadId,
                Expr::value(thread_id.to_string()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Remembers the audit message of a suggestion, only while none is stored yet.
    ///
    /// # Returns
    /// - `Ok(true)` - Audit message id stored
    /// - `Ok(false)` - Suggestion missing or another audit message already stored
    /// - `Err(DbErr)` - Database error
    pub async fn update_audit_message_id(
        &self,
        id: i32,
        audit_message_id: u64,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Suggestion::update_many()
            .filter(entity::suggestion::Column::Id.eq(id))
            .filter(entity::suggestion::Column::AuditMessageId.is_null())
            .col_expr(
                entity::suggestion::Column::AuditMessageId,
                Expr::value(audit_message_id.to_string()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Replaces the cached author display name.
    pub async fn update_author_username(&self, id: i32, author_username: &str) -> Result<(), DbErr> {
        entity::prelude::Suggestion::update_many()
            .filter(entity::suggestion::Column::Id.eq(id))
            .col_expr(
                entity::suggestion::Column::AuthorUsername,
                Expr::value(author_username.to_string()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Deletes a suggestion; votes and edit history go with it through the cascade.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of suggestions deleted (0 when already gone)
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Suggestion::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
