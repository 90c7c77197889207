use super::*;

/// Tests finalizing writes counters, errors and completion time.
///
/// Expected: Ok with terminal status, zero pending and stored error details
#[tokio::test]
async fn writes_final_counts_and_errors() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotificationRepository::new(db);
    let created = repo.create(create_param(3)).await?;
    repo.mark_in_progress(created.id).await?;

    let record = repo
        .finalize(
            created.id,
            FinalizeNotificationParam {
                status: NotificationStatus::Completed,
                success_count: 2,
                failed_count: 1,
                errors: vec![DeliveryError::new("42", "chat not found")],
            },
        )
        .await?;

    assert_eq!(record.status, NotificationStatus::Completed);
    assert_eq!(record.success_count, 2);
    assert_eq!(record.failed_count, 1);
    assert_eq!(record.pending_count, 0);
    assert_eq!(record.errors, vec![DeliveryError::new("42", "chat not found")]);
    assert!(record.completed_at.is_some());
    assert!(record.counts_balance());

    Ok(())
}

/// Tests error details survive a reload from the database.
///
/// Expected: Ok with identical errors after `find_by_id`
#[tokio::test]
async fn error_details_round_trip_through_storage() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotificationRepository::new(db);
    let created = repo.create(create_param(2)).await?;
    let errors = vec![
        DeliveryError::new("1", "blocked"),
        DeliveryError::new("2", "timeout"),
    ];
    repo.finalize(
        created.id,
        FinalizeNotificationParam {
            status: NotificationStatus::Completed,
            success_count: 0,
            failed_count: 2,
            errors: errors.clone(),
        },
    )
    .await?;

    let reloaded = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(reloaded.errors, errors);
    assert_eq!(reloaded.status, NotificationStatus::Completed);

    Ok(())
}

/// Tests finalizing with a non-terminal status is refused and leaves the row untouched.
///
/// Expected: Err(InternalError) and the record still `in_progress` with its pending count
#[tokio::test]
async fn rejects_non_terminal_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotificationRepository::new(db);
    let created = repo.create(create_param(3)).await?;
    repo.mark_in_progress(created.id).await?;

    let result = repo
        .finalize(
            created.id,
            FinalizeNotificationParam {
                status: NotificationStatus::InProgress,
                success_count: 3,
                failed_count: 0,
                errors: vec![],
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::InternalError(_))));
    let reloaded = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(reloaded.status, NotificationStatus::InProgress);
    assert_eq!(reloaded.pending_count, 3);
    assert!(reloaded.completed_at.is_none());

    Ok(())
}
