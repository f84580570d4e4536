use super::*;

/// Tests deleting a suggestion cascades to votes and edit history.
///
/// Expected: Ok(1) with no orphan votes or history entries left
#[tokio::test]
async fn cascades_to_votes_and_history() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_suggestion_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let suggestion = factory::create_suggestion_with_thread(db).await?;
    let other = factory::create_suggestion(db).await?;
    factory::create_vote(db, suggestion.id, "1", "up").await?;
    factory::create_vote(db, suggestion.id, "2", "down").await?;
    factory::create_vote(db, other.id, "1", "up").await?;
    factory::create_edit_history(db, suggestion.id).await?;

    let repo = SuggestionRepository::new(db);
    let deleted = repo.delete(suggestion.id).await?;

    assert_eq!(deleted, 1);
    assert!(repo
        .get_by_message_id(suggestion.message_id.parse().unwrap())
        .await?
        .is_none());
    assert!(repo
        .get_by_thread_id(suggestion.thread_id.unwrap().parse().unwrap())
        .await?
        .is_none());

    let votes = entity::prelude::Vote::find().count(db).await?;
    assert_eq!(votes, 1);
    let history = entity::prelude::EditHistory::find().count(db).await?;
    assert_eq!(history, 0);

    Ok(())
}

/// Tests deleting a suggestion that is already gone.
///
/// Expected: Ok(0)
#[tokio::test]
async fn deleting_missing_suggestion_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_suggestion_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SuggestionRepository::new(db);
    let deleted = repo.delete(999).await?;

    assert_eq!(deleted, 0);

    Ok(())
}
