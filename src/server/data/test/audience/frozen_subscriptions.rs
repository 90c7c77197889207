use super::*;
use test_utils::factory::subscription::SubscriptionFactory;

/// Tests clients with any frozen subscription are selected.
///
/// Expected: Ok with the client holding a frozen subscription
#[tokio::test]
async fn selects_clients_with_frozen_subscription() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_audience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tariff = factory::create_tariff(db).await?;

    let frozen = factory::create_client(db).await?;
    factory::create_subscription(db, frozen.id, tariff.id).await?;
    SubscriptionFactory::new(db, frozen.id, tariff.id)
        .status("frozen")
        .build()
        .await?;

    let active = factory::create_client(db).await?;
    factory::create_subscription(db, active.id, tariff.id).await?;

    let repo = AudienceRepository::new(db);
    let recipients = repo
        .resolve(&FilterSpec::FrozenSubscriptions, Utc::now())
        .await?;

    assert_eq!(telegram_ids(&recipients), vec![frozen.telegram_id.unwrap()]);

    Ok(())
}
