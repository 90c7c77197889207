use super::*;
use test_utils::factory::subscription::SubscriptionFactory;

/// Tests the window includes subscriptions ending within `days`.
///
/// Creates subscriptions ending in 2, 10 and -1 days and checks only the one
/// inside the 7-day window matches.
///
/// Expected: Ok with the single expiring client
#[tokio::test]
async fn selects_active_subscriptions_ending_in_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_audience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let tariff = factory::create_tariff(db).await?;

    let soon = factory::create_client(db).await?;
    SubscriptionFactory::new(db, soon.id, tariff.id)
        .end_date(now + Duration::days(2))
        .build()
        .await?;

    let later = factory::create_client(db).await?;
    SubscriptionFactory::new(db, later.id, tariff.id)
        .end_date(now + Duration::days(10))
        .build()
        .await?;

    let lapsed = factory::create_client(db).await?;
    SubscriptionFactory::new(db, lapsed.id, tariff.id)
        .end_date(now - Duration::days(1))
        .build()
        .await?;

    let repo = AudienceRepository::new(db);
    let recipients = repo
        .resolve(&FilterSpec::ExpiringSoon { days: 7 }, now)
        .await?;

    assert_eq!(telegram_ids(&recipients), vec![soon.telegram_id.unwrap()]);

    Ok(())
}

/// Tests frozen subscriptions are not counted as expiring.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn ignores_non_active_subscriptions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_audience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let tariff = factory::create_tariff(db).await?;
    let client = factory::create_client(db).await?;
    SubscriptionFactory::new(db, client.id, tariff.id)
        .status("frozen")
        .end_date(now + Duration::days(1))
        .build()
        .await?;

    let repo = AudienceRepository::new(db);
    let recipients = repo
        .resolve(&FilterSpec::ExpiringSoon { days: 7 }, now)
        .await?;

    assert!(recipients.is_empty());

    Ok(())
}

/// Tests a client with two expiring subscriptions is returned once.
///
/// Expected: Ok with a single recipient
#[tokio::test]
async fn returns_each_client_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_audience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let tariff = factory::create_tariff(db).await?;
    let client = factory::create_client(db).await?;
    for days in [1, 3] {
        SubscriptionFactory::new(db, client.id, tariff.id)
            .end_date(now + Duration::days(days))
            .build()
            .await?;
    }

    let repo = AudienceRepository::new(db);
    let recipients = repo
        .resolve(&FilterSpec::ExpiringSoon { days: 7 }, now)
        .await?;

    assert_eq!(recipients.len(), 1);

    Ok(())
}

/// Tests zero and negative windows run without error.
///
/// Expected: Ok with empty vectors
#[tokio::test]
async fn non_positive_days_select_nobody() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_audience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let (_, _, _) = factory::helpers::create_subscribed_client(db).await?;

    let repo = AudienceRepository::new(db);
    for days in [0, -5] {
        let recipients = repo
            .resolve(&FilterSpec::ExpiringSoon { days }, now)
            .await?;
        assert!(recipients.is_empty());
    }

    Ok(())
}

/// Tests both window edges are inclusive.
///
/// Creates subscriptions ending exactly at `now` and exactly at `now + days`, plus one
/// ending a second past the upper edge.
///
/// Expected: Ok with the two edge clients only
#[tokio::test]
async fn window_edges_are_inclusive() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_audience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let tariff = factory::create_tariff(db).await?;

    let ends_now = factory::create_client(db).await?;
    SubscriptionFactory::new(db, ends_now.id, tariff.id)
        .end_date(now)
        .build()
        .await?;

    let ends_at_edge = factory::create_client(db).await?;
    SubscriptionFactory::new(db, ends_at_edge.id, tariff.id)
        .end_date(now + Duration::days(7))
        .build()
        .await?;

    let past_edge = factory::create_client(db).await?;
    SubscriptionFactory::new(db, past_edge.id, tariff.id)
        .end_date(now + Duration::days(7) + Duration::seconds(1))
        .build()
        .await?;

    let repo = AudienceRepository::new(db);
    let recipients = repo
        .resolve(&FilterSpec::ExpiringSoon { days: 7 }, now)
        .await?;

    assert_eq!(
        telegram_ids(&recipients),
        vec![
            ends_now.telegram_id.unwrap(),
            ends_at_edge.telegram_id.unwrap()
        ]
    );

    Ok(())
}
