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
                    .table(Vote::Table)
                    .if_not_exists()
                    .col(pk_auto(Vote::Id))
                    .col(integer(Vote::SuggestionId))
                    .col(string(Vote::UserId))
                    .col(string(Vote::VoteType))
                    .col(timestamp(Vote::VotedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_votes_suggestion_id")
                            .from(Vote::Table, Vote::SuggestionId)
                            .to(Suggestion::Table, Suggestion::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One live vote per user per suggestion; also the conflict target for upserts
        manager
            .create_index(
                Index::create()
                    .name("idx_votes_suggestion_user")
                    .table(Vote::Table)
                    .col(Vote::SuggestionId)
                    .col(Vote::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_votes_user_id")
                    .table(Vote::Table)
                    .col(Vote::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_votes_user_id")
                    .table(Vote::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_votes_suggestion_user")
                    .table(Vote::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Vote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Vote {
    #[sea_orm(iden = "votes")]
    Table,
    Id,
    SuggestionId,
    UserId,
    VoteType,
    VotedAt,
}
