use super::*;

/// Tests replacing content that still matches the expected value.
///
/// Expected: Ok(true) with the new content stored
#[tokio::test]
async fn replaces_current_content() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_suggestion_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let suggestion = SuggestionFactory::new(db)
        .content("Add dark mode support")
        .build()
        .await?;

    let repo = SuggestionRepository::new(db);
    let replaced = repo
        .update_content(
            suggestion.id,
            "Add dark mode support",
            "Add dark mode toggle in settings",
        )
        .await?;

    assert!(replaced);

    let stored = repo.get_by_id(suggestion.id).await?.unwrap();
    assert_eq!(stored.content, "Add dark mode toggle in settings");

    Ok(())
}

/// Tests that stale expected content leaves the row untouched.
///
/// Simulates a second editor whose view predates another edit.
///
/// Expected: Ok(false) and the content unchanged
#[tokio::test]
async fn refuses_stale_expected_content() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_suggestion_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let suggestion = SuggestionFactory::new(db)
        .content("Current wording of it")
        .build()
        .await?;

    let repo = SuggestionRepository::new(db);
    let replaced = repo
        .update_content(suggestion.id, "Older wording of it", "Competing wording")
        .await?;

    assert!(!replaced);

    let stored = repo.get_by_id(suggestion.id).await?.unwrap();
    assert_eq!(stored.content, "Current wording of it");

    Ok(())
}
