use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::edit_history::CreateEditHistoryParams;

pub struct EditHistoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EditHistoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends an entry stamped with the current time.
    pub async fn append(
        &self,
        params: CreateEditHistoryParams,
    ) -> Result<entity::edit_history::Model, DbErr> {
        entity::edit_history::ActiveModel {
            suggestion_id: ActiveValue::Set(params.suggestion_id),
            old_content: ActiveValue::Set(params.old_content),
            new_content: ActiveValue::Set(params.new_content),
            edited_by_id: ActiveValue::Set(params.edited_by_id.to_string()),
            edited_by_username: ActiveValue::Set(params.edited_by_username),
            edited_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets every entry of a suggestion in version order.
    ///
    /// Ordered by `edited_at`, ties broken by insertion id so entries written within the
    /// same clock tick keep their append order.
    pub async fn get_by_suggestion_id(
        &self,
        suggestion_id: i32,
    ) -> Result<Vec<entity::edit_history::Model>, DbErr> {
        entity::prelude::EditHistory::find()
            .filter(entity::edit_history::Column::SuggestionId.eq(suggestion_id))
            .order_by_asc(entity::edit_history::Column::EditedAt)
            .order_by_asc(entity::edit_history::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn count_by_suggestion_id(&self, suggestion_id: i32) -> Result<u64, DbErr> {
        entity::prelude::EditHistory::find()
            .filter(entity::edit_history::Column::SuggestionId.eq(suggestion_id))
            .count(self.db)
            .await
    }
}
