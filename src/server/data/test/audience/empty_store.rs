use super::*;

/// Tests every filter resolves to nothing on an empty store.
///
/// Expected: Ok with empty vector for each filter
#[tokio::test]
async fn every_filter_is_empty_on_empty_store() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_audience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let filters = [
        FilterSpec::All,
        FilterSpec::ExpiringSoon { days: 7 },
        FilterSpec::NoVisits { days: 30 },
        FilterSpec::ByTariff { tariff_id: Some(1) },
        FilterSpec::ByTariff { tariff_id: None },
        FilterSpec::NewClients { days: 7 },
        FilterSpec::FrozenSubscriptions,
        FilterSpec::Unknown("birthdays".to_string()),
    ];

    let repo = AudienceRepository::new(db);
    for filter in &filters {
        let recipients = repo.resolve(filter, Utc::now()).await?;
        assert!(recipients.is_empty(), "{} should be empty", filter.name());
    }

    Ok(())
}

/// Tests an unknown filter selects nobody even with clients present.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn unknown_filter_selects_nobody() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_audience_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_clients(db, 3).await?;

    let filter = FilterSpec::from_name("birthdays", &FilterParams::default());
    let repo = AudienceRepository::new(db);
    let recipients = repo.resolve(&filter, Utc::now()).await?;

    assert!(recipients.is_empty());

    Ok(())
}

/// Tests a store failure surfaces as an error.
///
/// Resolves against a database without the client table.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn missing_table_propagates_error() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AudienceRepository::new(db);
    let result = repo.resolve(&FilterSpec::All, Utc::now()).await;

    assert!(result.is_err());

    Ok(())
}
