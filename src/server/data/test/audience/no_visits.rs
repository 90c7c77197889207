use super::*;

/// Tests clients without recent visits are selected.
///
/// Creates a client who never visited, one who visited 40 days ago and one who
/// visited yesterday, then resolves with a 30-day window.
///
/// Expected: Ok with the never-visited and the 40-day client
#[tokio::test]
async fn selects_clients_without_recent_visits() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_audience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();

    let never = factory::create_client(db).await?;

    let lapsed = factory::create_client(db).await?;
    factory::create_visit(db, lapsed.id, now - Duration::days(40)).await?;

    let regular = factory::create_client(db).await?;
    factory::create_visit(db, regular.id, now - Duration::days(40)).await?;
    factory::create_visit(db, regular.id, now - Duration::days(1)).await?;

    let repo = AudienceRepository::new(db);
    let recipients = repo
        .resolve(&FilterSpec::NoVisits { days: 30 }, now)
        .await?;

    assert_eq!(
        telegram_ids(&recipients),
        vec![never.telegram_id.unwrap(), lapsed.telegram_id.unwrap()]
    );

    Ok(())
}

/// Tests the default window applies when `days` is omitted.
///
/// Expected: Ok with the client whose last visit was 31 days ago
#[tokio::test]
async fn uses_thirty_day_default() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_audience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let client = factory::create_client(db).await?;
    factory::create_visit(db, client.id, now - Duration::days(31)).await?;

    let filter = FilterSpec::from_name("no_visits", &FilterParams::default());
    let repo = AudienceRepository::new(db);
    let recipients = repo.resolve(&filter, now).await?;

    assert_eq!(recipients.len(), 1);

    Ok(())
}

/// Tests a zero-day window runs without error.
///
/// With a window starting at `now`, only visits at or after `now` count, so a
/// visit yesterday leaves the client selected.
///
/// Expected: Ok with the client
#[tokio::test]
async fn zero_days_runs_without_error() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_audience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let client = factory::create_client(db).await?;
    factory::create_visit(db, client.id, now - Duration::days(1)).await?;

    let repo = AudienceRepository::new(db);
    let recipients = repo.resolve(&FilterSpec::NoVisits { days: 0 }, now).await?;

    assert_eq!(recipients.len(), 1);

    Ok(())
}

/// Tests a visit exactly `days` ago counts as recent.
///
/// One client visited exactly at `now - days`, another a second before that.
///
/// Expected: Ok with only the client whose visit falls outside the window
#[tokio::test]
async fn visit_on_lower_edge_counts_as_recent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_audience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let on_edge = factory::create_client(db).await?;
    factory::create_visit(db, on_edge.id, now - Duration::days(30)).await?;

    let before_edge = factory::create_client(db).await?;
    factory::create_visit(
        db,
        before_edge.id,
        now - Duration::days(30) - Duration::seconds(1),
    )
    .await?;

    let repo = AudienceRepository::new(db);
    let recipients = repo
        .resolve(&FilterSpec::NoVisits { days: 30 }, now)
        .await?;

    assert_eq!(
        telegram_ids(&recipients),
        vec![before_edge.telegram_id.unwrap()]
    );

    Ok(())
}
