use super::*;

/// Tests selecting suggestions inside the reconciliation window.
///
/// Verifies that suggestions created before `since` are excluded and the rest are
/// returned oldest first.
///
/// Expected: Ok with the two recent suggestions in creation order
#[tokio::test]
async fn returns_suggestions_created_since_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_suggestion_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    SuggestionFactory::new(db)
        .created_at(now - Duration::days(10))
        .build()
        .await?;
    let older = SuggestionFactory::new(db)
        .created_at(now - Duration::days(3))
        .build()
        .await?;
    let newer = SuggestionFactory::new(db)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;

    let repo = SuggestionRepository::new(db);
    let recent = repo.get_recent(now - Duration::days(7)).await?;

    let ids: Vec<i32> = recent.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![older.id, newer.id]);

    Ok(())
}

/// Tests an empty window.
///
/// Expected: Ok with no suggestions
#[tokio::test]
async fn returns_empty_when_nothing_is_recent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_suggestion_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    SuggestionFactory::new(db)
        .created_at(Utc::now() - Duration::days(30))
        .build()
        .await?;

    let repo = SuggestionRepository::new(db);
    let recent = repo.get_recent(Utc::now() - Duration::days(7)).await?;

    assert!(recent.is_empty());

    Ok(())
}
