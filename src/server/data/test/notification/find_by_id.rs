use super::*;

/// Tests an existing record is returned.
///
/// Expected: Ok(Some) with matching id
#[tokio::test]
async fn finds_existing_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_notification(db).await?;

    let repo = NotificationRepository::new(db);
    let record = repo.find_by_id(stored.id).await?;

    assert_eq!(record.map(|r| r.id), Some(stored.id));

    Ok(())
}

/// Tests a missing record yields None.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotificationRepository::new(db);
    let record = repo.find_by_id(7).await?;

    assert!(record.is_none());

    Ok(())
}

/// Tests an unknown stored status is reported as an internal error.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn rejects_unknown_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::notification::NotificationFactory::new(db)
        .status("archived")
        .build()
        .await?;

    let repo = NotificationRepository::new(db);
    let result = repo.find_by_id(stored.id).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
