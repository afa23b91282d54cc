use super::*;

/// Tests fetching the view of a kind in a guild.
///
/// Verifies that the repository returns the record matching both the guild and the
/// kind, with ids converted back from storage.
///
/// Expected: Ok(Some) with matching record
#[tokio::test]
async fn fetches_view_by_kind_and_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_view_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::view::ViewFactory::new(db)
        .guild_id(100)
        .channel_id(200)
        .message_id(300)
        .view_type("rank")
        .build()
        .await?;
    factory::create_view(db, 100, "ping").await?;

    let repo = ViewRepository::new(db);
    let result = repo.fetch(ViewKind::Rank, 100).await?;

    assert!(result.is_some());
    let record = result.unwrap();
    assert_eq!(record.id, created.id);
    assert_eq!(record.channel_id, 200);
    assert_eq!(record.message_id, 300);
    assert_eq!(record.kind(), Some(ViewKind::Rank));

    Ok(())
}

/// Tests fetching a kind that is only published in another guild.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_other_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_view_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_view(db, 100, "rank").await?;

    let repo = ViewRepository::new(db);
    let result = repo.fetch(ViewKind::Rank, 101).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests fetching a regional kind stored with a legacy discriminator.
///
/// Verifies that rows written as `na-roles` are still found as the NA power view.
///
/// Expected: Ok(Some) with the legacy row
#[tokio::test]
async fn fetches_legacy_discriminator() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_view_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let legacy = factory::create_view(db, 100, "na-roles").await?;

    let repo = ViewRepository::new(db);
    let result = repo
        .fetch(ViewKind::RegionalPower(Region::Na), 100)
        .await?;

    assert_eq!(result.map(|record| record.id), Some(legacy.id));

    Ok(())
}

/// Tests fetching ids above the signed 64-bit range.
///
/// Expected: Ok(Some) with ids preserved exactly
#[tokio::test]
async fn preserves_large_snowflakes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_view_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guild_id = u64::MAX - 1;
    let message_id = u64::MAX - 2;
    factory::view::ViewFactory::new(db)
        .guild_id(guild_id)
        .message_id(message_id)
        .view_type("ping")
        .build()
        .await?;

    let repo = ViewRepository::new(db);
    let record = repo.fetch(ViewKind::Ping, guild_id).await?.unwrap();

    assert_eq!(record.guild_id, guild_id);
    assert_eq!(record.message_id, message_id);

    Ok(())
}
