use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "edit_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub suggestion_id: i32,
    #[sea_orm(column_type = "Text")]
    pub old_content: String,
    #[sea_orm(column_type = "Text")]
    pub new_content: String,
    pub edited_by_id: String,
    pub edited_by_username: String,
    pub edited_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::suggestion::Entity",
        from = "Column::SuggestionId",
        to = "super::suggestion::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Suggestion,
}

impl Related<super::suggestion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Suggestion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
