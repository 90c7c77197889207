use super::*;

/// Tests a new record starts pending with every recipient pending.
///
/// Expected: Ok with pending status, zero counters and balanced totals
#[tokio::test]
async fn creates_pending_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotificationRepository::new(db);
    let record = repo.create(create_param(12)).await?;

    assert_eq!(record.status, NotificationStatus::Pending);
    assert_eq!(record.total_recipients, 12);
    assert_eq!(record.pending_count, 12);
    assert_eq!(record.success_count, 0);
    assert_eq!(record.failed_count, 0);
    assert!(record.errors.is_empty());
    assert!(record.completed_at.is_none());
    assert!(record.counts_balance());

    Ok(())
}

/// Tests message content is stored as given.
///
/// Expected: Ok with title, body and filter persisted
#[tokio::test]
async fn stores_message_content() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotificationRepository::new(db);
    let record = repo.create(create_param(1)).await?;

    assert_eq!(record.title.as_deref(), Some("Schedule"));
    assert_eq!(record.message, "Pool closed on Friday");
    assert_eq!(record.filter_type, "all");

    Ok(())
}

/// Tests a missing table surfaces as a database error.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn fails_without_table() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotificationRepository::new(db);
    let result = repo.create(create_param(1)).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
