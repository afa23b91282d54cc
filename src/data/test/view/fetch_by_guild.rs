use super::*;

/// Tests fetching only the views of one guild.
///
/// Expected: Ok with the two records of guild 1
#[tokio::test]
async fn returns_only_guild_views() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_view_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_view(db, 1, "rank").await?;
    factory::create_view(db, 1, "na").await?;
    factory::create_view(db, 2, "rank").await?;

    let repo = ViewRepository::new(db);
    let records = repo.fetch_by_guild(1).await?;

    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|record| record.guild_id == 1));

    Ok(())
}
