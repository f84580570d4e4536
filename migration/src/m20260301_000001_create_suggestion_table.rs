use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Suggestion::Table)
                    .if_not_exists()
                    .col(pk_auto(Suggestion::Id))
                    .col(string(Suggestion::MessageId))
                    .col(string_null(Suggestion::ThreadId))
                    .col(string_null(Suggestion::AuditMessageId))
                    .col(string(Suggestion::AuthorId))
                    .col(string(Suggestion::AuthorUsername))
                    .col(text(Suggestion::Content))
                    .col(timestamp(Suggestion::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_suggestions_message_id")
                    .table(Suggestion::Table)
                    .col(Suggestion::MessageId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Edits are addressed from inside the suggestion's thread
        manager
            .create_index(
                Index::create()
                    .name("idx_suggestions_thread_id")
                    .table(Suggestion::Table)
                    .col(Suggestion::ThreadId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_suggestions_created_at")
                    .table(Suggestion::Table)
                    .col(Suggestion::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Suggestion::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Suggestion {
    #[sea_orm(iden = "suggestions")]
    Table,
    Id,
    MessageId,
    ThreadId,
    AuditMessageId,
    AuthorId,
    AuthorUsername,
    Content,
    CreatedAt,
}
