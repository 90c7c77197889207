use super::*;
use test_utils::factory::subscription::SubscriptionFactory;

/// Tests only active subscribers of the tariff are selected.
///
/// Expected: Ok with the active subscriber of the requested tariff
#[tokio::test]
async fn selects_active_subscribers_of_tariff() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_audience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (subscriber, tariff, _) = factory::helpers::create_subscribed_client(db).await?;

    let other_tariff = factory::create_tariff(db).await?;
    let other = factory::create_client(db).await?;
    factory::create_subscription(db, other.id, other_tariff.id).await?;

    let expired = factory::create_client(db).await?;
    SubscriptionFactory::new(db, expired.id, tariff.id)
        .status("expired")
        .build()
        .await?;

    let repo = AudienceRepository::new(db);
    let recipients = repo
        .resolve(
            &FilterSpec::ByTariff {
                tariff_id: Some(tariff.id),
            },
            Utc::now(),
        )
        .await?;

    assert_eq!(
        telegram_ids(&recipients),
        vec![subscriber.telegram_id.unwrap()]
    );

    Ok(())
}

/// Tests a missing tariff id selects nobody rather than failing.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn missing_tariff_id_selects_nobody() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_audience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_subscribed_client(db).await?;

    let filter = FilterSpec::from_name("by_tariff", &FilterParams::default());
    let repo = AudienceRepository::new(db);
    let recipients = repo.resolve(&filter, Utc::now()).await?;

    assert!(recipients.is_empty());

    Ok(())
}
