use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_suggestion_table::Suggestion;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EditHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(EditHistory::Id))
                    .col(integer(EditHistory::SuggestionId))
                    .col(text(EditHistory::OldContent))
                    .col(text(EditHistory::NewContent))
                    .col(string(EditHistory::EditedById))
                    .col(string(EditHistory::EditedByUsername))
                    .col(timestamp(EditHistory::EditedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_edit_history_suggestion_id")
                            .from(EditHistory::Table, EditHistory::SuggestionId)
                            .to(Suggestion::Table, Suggestion::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_edit_history_suggestion_id")
                    .table(EditHistory::Table)
                    .col(EditHistory::SuggestionId)
                    .col(EditHistory::EditedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_edit_history_suggestion_id")
                    .table(EditHistory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EditHistory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EditHistory {
    Table,
    Id,
    SuggestionId,
    OldContent,
    NewContent,
    EditedById,
    EditedByUsername,
    EditedAt,
}
