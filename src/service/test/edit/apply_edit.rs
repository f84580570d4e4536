use super::*;

/// Walks one suggestion through a too-short edit, an unchanged edit and a real one.
///
/// Expected: TooShort, then Unchanged, then Applied with exactly one history entry
#[tokio::test]
async fn rejects_short_and_unchanged_then_applies() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_suggestion_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = RecordingGateway::new();

    let suggestion = create_bound_suggestion(db, "Add dark mode support").await?;
    let service = EditService::new(db, &gateway);

    let short = service
        .apply_edit(edit_request(suggestion.id, AUTHOR_ID, "short"))
        .await;
    assert!(matches!(
        short,
        Err(AppError::ValidationErr(ValidationError::TooShort { min: 10, actual: 5 }))
    ));

    let unchanged = service
        .apply_edit(edit_request(suggestion.id, AUTHOR_ID, "  Add dark mode support "))
        .await
        .unwrap();
    assert_eq!(unchanged, EditOutcome::Unchanged);
    assert_eq!(entity::prelude::EditHistory::find().count(db).await?, 0);
    assert!(gateway.calls().is_empty());

    let applied = service
        .apply_edit(edit_request(
            suggestion.id,
            AUTHOR_ID,
            "Add dark mode toggle in settings",
        ))
        .await
        .unwrap();
    let EditOutcome::Applied { suggestion: updated } = applied else {
        panic!("expected the edit to apply");
    };
    assert_eq!(updated.content, "Add dark mode toggle in settings");

    let history = entity::prelude::EditHistory::find().all(db).await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].old_content, "Add dark mode support");
    assert_eq!(history[0].new_content, "Add dark mode toggle in settings");

    let stored = entity::prelude::Suggestion::find_by_id(suggestion.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.content, "Add dark mode toggle in settings");

    Ok(())
}

/// Tests the minimum length boundary after trimming.
///
/// Expected: 9 characters rejected, exactly 10 accepted
#[tokio::test]
async fn accepts_exactly_minimum_length() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_suggestion_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = RecordingGateway::new();

    let suggestion = create_bound_suggestion(db, "Add dark mode support").await?;
    let service = EditService::new(db, &gateway);

    let nine = service
        .apply_edit(edit_request(suggestion.id, AUTHOR_ID, "   123456789   "))
        .await;
    assert!(matches!(
        nine,
        Err(AppError::ValidationErr(ValidationError::TooShort { actual: 9, .. }))
    ));

    let ten = service
        .apply_edit(edit_request(suggestion.id, AUTHOR_ID, "1234567890"))
        .await
        .unwrap();
    assert!(matches!(ten, EditOutcome::Applied { .. }));

    Ok(())
}

/// Tests that someone other than the author or an administrator can't edit.
///
/// Permission is checked before content, so even invalid content reports Forbidden.
///
/// Expected: Err(Forbidden) with no history and unchanged content
#[tokio::test]
async fn forbids_other_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_suggestion_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = RecordingGateway::new();

    let suggestion = create_bound_suggestion(db, "Add dark mode support").await?;
    let service = EditService::new(db, &gateway);

    let result = service
        .apply_edit(edit_request(suggestion.id, 99, "Completely rewritten text"))
        .await;
    assert!(matches!(result, Err(AppError::Forbidden(_))));

    let short = service.apply_edit(edit_request(suggestion.id, 99, "x")).await;
    assert!(matches!(short, Err(AppError::Forbidden(_))));

    assert_eq!(entity::prelude::EditHistory::find().count(db).await?, 0);
    let stored = entity::prelude::Suggestion::find_by_id(suggestion.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.content, "Add dark mode support");

    Ok(())
}

/// Tests an administrator edit keeps the author's cached name.
///
/// Expected: Applied with the history naming the administrator
#[tokio::test]
async fn administrator_edit_keeps_author_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_suggestion_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = RecordingGateway::new();

    let suggestion = create_bound_suggestion(db, "Add dark mode support").await?;
    let service = EditService::new(db, &gateway);

    let mut request = edit_request(suggestion.id, 99, "Add dark mode support for mobile");
    request.editor_display_name = "Moderator".to_string();
    request.editor_is_admin = true;

    let outcome = service.apply_edit(request).await.unwrap();
    assert!(matches!(outcome, EditOutcome::Applied { .. }));

    let stored = entity::prelude::Suggestion::find_by_id(suggestion.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.author_username, "Alice");

    let history = entity::prelude::EditHistory::find().one(db).await?.unwrap();
    assert_eq!(history.edited_by_id, "99");
    assert_eq!(history.edited_by_username, "Moderator");

    Ok(())
}

/// Tests that the author's edit refreshes the cached display name.
///
/// Expected: Applied with `author_username` replaced and the embed rendered with it
#[tokio::test]
async fn author_edit_refreshes_display_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_suggestion_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = RecordingGateway::new();

    let suggestion = create_bound_suggestion(db, "Add dark mode support").await?;
    let service = EditService::new(db, &gateway);

    service
        .apply_edit(edit_request(
            suggestion.id,
            AUTHOR_ID,
            "Add dark mode toggle in settings",
        ))
        .await
        .unwrap();

    let stored = entity::prelude::Suggestion::find_by_id(suggestion.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.author_username, "Alice Renamed");

    let renders = gateway.renders();
    assert_eq!(renders.len(), 1);
    assert_eq!(renders[0].author_display_name, "Alice Renamed");
    assert_eq!(renders[0].content, "Add dark mode toggle in settings");
    assert!(renders[0].edited);

    Ok(())
}

/// Tests that an edit must come from the suggestion's own thread.
///
/// Expected: Err(NotFound) for another channel and for a mismatched suggestion id
#[tokio::test]
async fn rejects_edit_outside_suggestion_thread() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_suggestion_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = RecordingGateway::new();

    let suggestion = create_bound_suggestion(db, "Add dark mode support").await?;
    let other = SuggestionFactory::new(db)
        .thread_id(Some("8008".to_string()))
        .build()
        .await?;
    let service = EditService::new(db, &gateway);

    let mut wrong_channel = edit_request(suggestion.id, AUTHOR_ID, "Add dark mode everywhere");
    wrong_channel.channel_id = 1;
    let result = service.apply_edit(wrong_channel).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let wrong_id = edit_request(other.id, AUTHOR_ID, "Add dark mode everywhere");
    let result = service.apply_edit(wrong_id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that failed Discord updates after an edit leave the edit stored.
///
/// Expected: Applied with history and content persisted
#[tokio::test]
async fn keeps_edit_when_rendering_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_suggestion_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = RecordingGateway::new()
        .failing(Operation::RenderSuggestion)
        .failing(Operation::SendThreadMessage);

    let suggestion = create_bound_suggestion(db, "Add dark mode support").await?;
    let service = EditService::new(db, &gateway);

    let outcome = service
        .apply_edit(edit_request(
            suggestion.id,
            AUTHOR_ID,
            "Add dark mode toggle in settings",
        ))
        .await
        .unwrap();

    assert!(matches!(outcome, EditOutcome::Applied { .. }));
    assert_eq!(entity::prelude::EditHistory::find().count(db).await?, 1);

    let stored = entity::prelude::Suggestion::find_by_id(suggestion.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.content, "Add dark mode toggle in settings");
    assert!(stored.audit_message_id.is_none());

    Ok(())
}
