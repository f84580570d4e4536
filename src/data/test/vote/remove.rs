use super::*;

/// Tests retracting a vote removes only that voter's row.
///
/// Expected: Ok(1) with the other voter's vote kept
#[tokio::test]
async fn removes_only_the_users_vote() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_suggestion_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let suggestion = factory::create_suggestion(db).await?;
    factory::create_vote(db, suggestion.id, "42", "up").await?;
    factory::create_vote(db, suggestion.id, "43", "up").await?;

    let repo = VoteRepository::new(db);
    let removed = repo.remove(suggestion.id, 42).await?;

    assert_eq!(removed, 1);
    assert!(repo.get_user_vote(suggestion.id, 42).await?.is_none());
    assert!(repo.get_user_vote(suggestion.id, 43).await?.is_some());

    Ok(())
}

/// Tests removing a vote that was never cast.
///
/// Expected: Ok(0)
#[tokio::test]
async fn removing_absent_vote_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_suggestion_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let suggestion = factory::create_suggestion(db).await?;

    let repo = VoteRepository::new(db);
    let removed = repo.remove(suggestion.id, 42).await?;

    assert_eq!(removed, 0);

    Ok(())
}
