use super::*;

/// Tests binding a thread to an unbound suggestion.
///
/// Expected: Ok(true) with the thread id stored
#[tokio::test]
async fn binds_thread_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_suggestion_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let suggestion = factory::create_suggestion(db).await?;

    let repo = SuggestionRepository::new(db);
    let bound = repo.update_thread_id(suggestion.id, 9009).await?;

    assert!(bound);

    let stored = repo.get_by_id(suggestion.id).await?.unwrap();
    assert_eq!(stored.thread_id.as_deref(), Some("9009"));

    Ok(())
}

/// Tests that an already bound thread is never replaced.
///
/// Expected: Ok(false) and the original thread id kept
#[tokio::test]
async fn keeps_existing_thread() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_suggestion_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let suggestion = SuggestionFactory::new(db)
        .thread_id(Some("9009".to_string()))
        .build()
        .await?;

    let repo = SuggestionRepository::new(db);
    let bound = repo.update_thread_id(suggestion.id, 1234).await?;

    assert!(!bound);

    let stored = repo.get_by_id(suggestion.id).await?.unwrap();
    assert_eq!(stored.thread_id.as_deref(), Some("9009"));

    Ok(())
}
