use super::*;

/// Tests fetching every persisted view, including unknown discriminators.
///
/// Verifies that rows with a discriminator no kind understands are still returned so
/// the restore pass can decide to skip them.
///
/// Expected: Ok with all three records
#[tokio::test]
async fn returns_all_views() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_view_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_view(db, 1, "rank").await?;
    factory::create_view(db, 2, "ping").await?;
    factory::create_view(db, 2, "mystery").await?;

    let repo = ViewRepository::new(db);
    let mut records = repo.fetch_all().await?;
    records.sort_by_key(|record| record.id);

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].kind(), Some(ViewKind::Rank));
    assert_eq!(records[1].kind(), Some(ViewKind::Ping));
    assert_eq!(records[2].kind(), None);
    assert_eq!(records[2].view_type, "mystery");

    Ok(())
}

/// Tests fetching from an empty store.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_views() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_view_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ViewRepository::new(db);
    let records = repo.fetch_all().await?;

    assert!(records.is_empty());

    Ok(())
}
