use super::*;

/// Tests that the author may open the edit modal from the suggestion thread.
///
/// Expected: Ok with the suggestion
#[tokio::test]
async fn authorizes_author_in_thread() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_suggestion_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = RecordingGateway::new();

    let suggestion = create_bound_suggestion(db, "Add dark mode support").await?;

    let service = EditService::new(db, &gateway);
    let authorized = service
        .authorize_edit(THREAD_ID, AUTHOR_ID, false)
        .await
        .unwrap();

    assert_eq!(authorized.id, suggestion.id);
    assert_eq!(authorized.content, "Add dark mode support");

    Ok(())
}

/// Tests administrators and other users.
///
/// Expected: Ok for an administrator, Err(Forbidden) for anyone else
#[tokio::test]
async fn requires_author_or_administrator() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_suggestion_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = RecordingGateway::new();

    create_bound_suggestion(db, "Add dark mode support").await?;
    let service = EditService::new(db, &gateway);

    assert!(service.authorize_edit(THREAD_ID, 99, true).await.is_ok());
    assert!(matches!(
        service.authorize_edit(THREAD_ID, 99, false).await,
        Err(AppError::Forbidden(_))
    ));

    Ok(())
}

/// Tests `/edit` outside a suggestion thread.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_other_channels() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_suggestion_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let gateway = RecordingGateway::new();

    create_bound_suggestion(db, "Add dark mode support").await?;

    let service = EditService::new(db, &gateway);
    let result = service.authorize_edit(1, AUTHOR_ID, true).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
