use super::*;

/// Tests the `all` filter selects every reachable client.
///
/// Verifies that clients without a Telegram id are skipped and the rest are
/// returned in creation order.
///
/// Expected: Ok with the two linked clients only
#[tokio::test]
async fn selects_clients_with_telegram_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_audience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::client::ClientFactory::new(db)
        .telegram_id(Some("111"))
        .build()
        .await?;
    factory::client::ClientFactory::new(db)
        .telegram_id(None)
        .build()
        .await?;
    factory::client::ClientFactory::new(db)
        .telegram_id(Some("333"))
        .build()
        .await?;

    let repo = AudienceRepository::new(db);
    let recipients = repo.resolve(&FilterSpec::All, Utc::now()).await?;

    assert_eq!(telegram_ids(&recipients), vec!["111", "333"]);
    assert_eq!(recipients[0].name, first.name);
    assert_eq!(recipients[0].phone, first.phone);

    Ok(())
}

/// Tests resolution is deterministic for identical store state.
///
/// Expected: Ok with equal sequences on repeated calls
#[tokio::test]
async fn returns_same_sequence_on_repeat() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_audience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_clients(db, 5).await?;

    let repo = AudienceRepository::new(db);
    let now = Utc::now();
    let first = repo.resolve(&FilterSpec::All, now).await?;
    let second = repo.resolve(&FilterSpec::All, now).await?;

    assert_eq!(first.len(), 5);
    assert_eq!(first, second);

    Ok(())
}
