use super::*;

/// Tests finding a suggestion by its rendered message.
///
/// Expected: Ok(Some) with the matching suggestion
#[tokio::test]
async fn finds_suggestion_by_message_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_suggestion_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let suggestion = SuggestionFactory::new(db).message_id("5150").build().await?;
    factory::create_suggestion(db).await?;

    let repo = SuggestionRepository::new(db);
    let found = repo.get_by_message_id(5150).await?;

    assert_eq!(found.map(|s| s.id), Some(suggestion.id));

    Ok(())
}

/// Tests looking up a message that isn't a suggestion.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_suggestion_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_suggestion(db).await?;

    let repo = SuggestionRepository::new(db);
    let found = repo.get_by_message_id(1).await?;

    assert!(found.is_none());

    Ok(())
}
