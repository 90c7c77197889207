use super::*;

/// Tests the status moves to in progress without touching counters.
///
/// Expected: Ok with in_progress status and unchanged counters
#[tokio::test]
async fn moves_record_to_in_progress() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotificationRepository::new(db);
    let created = repo.create(create_param(4)).await?;
    let record = repo.mark_in_progress(created.id).await?;

    assert_eq!(record.status, NotificationStatus::InProgress);
    assert_eq!(record.pending_count, 4);
    assert!(record.counts_balance());
    assert!(record.completed_at.is_none());

    Ok(())
}

/// Tests updating a nonexistent record fails.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_missing_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotificationRepository::new(db);
    let result = repo.mark_in_progress(999).await;

    assert!(result.is_err());

    Ok(())
}
