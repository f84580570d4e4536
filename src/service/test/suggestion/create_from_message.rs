use super::*;

/// Tests the full creation sequence.
///
/// Verifies that the embed is posted before the id exists, re-rendered with the id,
/// a thread is created and bound, a welcome message is sent and the source message is
/// deleted last.
///
/// Expected: Ok with a thread-bound suggestion holding the trimmed content
#[tokio::test]
async fn creates_thread_bound_suggestion() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_suggestion_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = RecordingGateway::new();

    let service = SuggestionService::new(db, &gateway);
    let suggestion = service
        .create_from_message(incoming("  Add dark mode support  "))
        .await
        .unwrap();

    assert_eq!(suggestion.content, "Add dark mode support");
    assert_eq!(suggestion.author_username, "Alice");
    assert!(matches!(suggestion.state(), SuggestionState::ThreadBound { .. }));

    let calls = gateway.calls();
    assert_eq!(calls.len(), 5);
    assert!(matches!(&calls[0], GatewayCall::PostSuggestion(view) if view.suggestion_id.is_none()));
    assert!(matches!(
        &calls[1],
        GatewayCall::RenderSuggestion { message_id, view }
            if *message_id == suggestion.message_id && view.suggestion_id == Some(suggestion.id)
    ));
    assert!(matches!(
        &calls[2],
        GatewayCall::CreateThread { title, .. } if title == "Add dark mode support"
    ));
    assert!(matches!(
        &calls[3],
        GatewayCall::SendThreadMessage { thread_id, content }
            if Some(*thread_id) == suggestion.thread_id && content.contains("<@42>")
    ));
    assert_eq!(calls[4], GatewayCall::DeleteMessage(555));

    Ok(())
}

/// Tests that an empty message is deleted and nothing is stored.
///
/// Expected: Err(EmptyContent) with only the source message deleted
#[tokio::test]
async fn rejects_empty_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_suggestion_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = RecordingGateway::new();

    let service = SuggestionService::new(db, &gateway);
    let result = service.create_from_message(incoming("   \n ")).await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::EmptyContent))
    ));
    assert_eq!(gateway.calls(), vec![GatewayCall::DeleteMessage(555)]);

    let count = entity::prelude::Suggestion::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests that a failed thread creation leaves the suggestion in the created state.
///
/// Expected: Ok with no thread bound and the source message still deleted
#[tokio::test]
async fn keeps_suggestion_without_thread() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_suggestion_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = RecordingGateway::new().failing(Operation::CreateThread);

    let service = SuggestionService::new(db, &gateway);
    let suggestion = service
        .create_from_message(incoming("Add dark mode support"))
        .await
        .unwrap();

    assert_eq!(suggestion.state(), SuggestionState::Created);
    assert_eq!(gateway.deleted_messages(), vec![555]);

    let stored = entity::prelude::Suggestion::find_by_id(suggestion.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.thread_id.is_none());

    Ok(())
}

/// Tests that a message id already in the store cleans up the posted embed.
///
/// The fake hands out ids from 900_000, so a suggestion stored with that message id
/// makes the insert of the next one collide.
///
/// Expected: Err(StoreErr) with the new embed and the source message deleted
#[tokio::test]
async fn cleans_up_when_persisting_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_suggestion_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = RecordingGateway::new();

    SuggestionFactory::new(db).message_id("900000").build().await?;

    let service = SuggestionService::new(db, &gateway);
    let result = service
        .create_from_message(incoming("Add dark mode support"))
        .await;

    assert!(matches!(result, Err(AppError::StoreErr(_))));
    assert_eq!(gateway.deleted_messages(), vec![900000, 555]);

    let count = entity::prelude::Suggestion::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that a failed embed post stops the sequence before anything is stored.
///
/// Expected: Err(DiscordErr) with the source message left in place
#[tokio::test]
async fn stops_when_posting_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_suggestion_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = RecordingGateway::new().failing(Operation::PostSuggestion);

    let service = SuggestionService::new(db, &gateway);
    let result = service
        .create_from_message(incoming("Add dark mode support"))
        .await;

    assert!(matches!(result, Err(AppError::DiscordErr(_))));
    assert!(gateway.deleted_messages().is_empty());

    let count = entity::prelude::Suggestion::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests that best-effort failures after persisting don't fail creation.
///
/// Expected: Ok even though rendering, the welcome message and source deletion fail
#[tokio::test]
async fn ignores_best_effort_failures() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_suggestion_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = RecordingGateway::new()
        .failing(Operation::RenderSuggestion)
        .failing(Operation::SendThreadMessage)
        .failing(Operation::DeleteMessage);

    let service = SuggestionService::new(db, &gateway);
    let result = service
        .create_from_message(incoming("Add dark mode support"))
        .await;

    assert!(result.is_ok());

    let count = entity::prelude::Suggestion::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
