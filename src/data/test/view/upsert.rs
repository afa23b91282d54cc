use super::*;

/// Tests creating a new view record.
///
/// Verifies that the repository creates a record with the kind's current discriminator
/// when the kind is not yet published in the guild.
///
/// Expected: Ok with new record created
#[tokio::test]
async fn creates_new_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_view_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ViewRepository::new(db);
    let record = repo
        .upsert(UpsertViewParam {
            guild_id: 10,
            channel_id: 20,
            message_id: 30,
            kind: ViewKind::RegionalPower(Region::Jp),
        })
        .await?;

    assert_eq!(record.guild_id, 10);
    assert_eq!(record.channel_id, 20);
    assert_eq!(record.message_id, 30);
    assert_eq!(record.view_type, "jp");

    let stored = entity::prelude::Views::find_by_id(record.id).one(db).await?;
    assert!(stored.is_some());
    assert_eq!(stored.unwrap().message_id, 30);

    Ok(())
}

/// Tests that a second upsert for the same guild and kind overwrites the first.
///
/// Verifies that only one row remains, it keeps its id, and it carries the latest
/// channel and message.
///
/// Expected: Ok with record updated in place
#[tokio::test]
async fn overwrites_existing_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_view_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ViewRepository::new(db);
    let original = repo
        .upsert(UpsertViewParam {
            guild_id: 10,
            channel_id: 20,
            message_id: 30,
            kind: ViewKind::Rank,
        })
        .await?;

    let updated = repo
        .upsert(UpsertViewParam {
            guild_id: 10,
            channel_id: 21,
            message_id: 31,
            kind: ViewKind::Rank,
        })
        .await?;

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.channel_id, 21);
    assert_eq!(updated.message_id, 31);

    let count = entity::prelude::Views::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that different kinds in the same guild are stored separately.
///
/// Expected: Ok with two records
#[tokio::test]
async fn keeps_kinds_separate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_view_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ViewRepository::new(db);
    repo.upsert(UpsertViewParam {
        guild_id: 10,
        channel_id: 20,
        message_id: 30,
        kind: ViewKind::Rank,
    })
    .await?;
    repo.upsert(UpsertViewParam {
        guild_id: 10,
        channel_id: 20,
        message_id: 31,
        kind: ViewKind::Ping,
    })
    .await?;

    let count = entity::prelude::Views::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}

/// Tests that republishing a legacy row rewrites its discriminator.
///
/// Expected: Ok with the legacy row updated to `na`
#[tokio::test]
async fn migrates_legacy_discriminator() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_view_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let legacy = factory::create_view(db, 10, "na-roles").await?;

    let repo = ViewRepository::new(db);
    let record = repo
        .upsert(UpsertViewParam {
            guild_id: 10,
            channel_id: 20,
            message_id: 30,
            kind: ViewKind::RegionalPower(Region::Na),
        })
        .await?;

    assert_eq!(record.id, legacy.id);
    assert_eq!(record.view_type, "na");
    assert_eq!(entity::prelude::Views::find().count(db).await?, 1);

    Ok(())
}

/// Tests that the test schema rejects a second row for the same guild and kind.
///
/// Expected: Err on the duplicate insert with one row stored
#[tokio::test]
async fn schema_rejects_duplicate_kind_in_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_view_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_view(db, 10, "rank").await?;
    let duplicate = factory::create_view(db, 10, "rank").await;

    assert!(duplicate.is_err());
    assert_eq!(entity::prelude::Views::find().count(db).await?, 1);

    Ok(())
}

/// Tests an insert that loses the race against a concurrent writer.
///
/// Verifies that when the kind was found unpublished but a row for it exists by the time
/// of the insert, the unique index violation is recovered by updating that row.
///
/// Expected: Ok with the concurrent row pointed at the new message
#[tokio::test]
async fn insert_adopts_row_written_concurrently() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_view_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let concurrent = factory::create_view(db, 10, "rank").await?;

    let repo = ViewRepository::new(db);
    let record = repo
        .insert_or_adopt(&UpsertViewParam {
            guild_id: 10,
            channel_id: 21,
            message_id: 31,
            kind: ViewKind::Rank,
        })
        .await?;

    assert_eq!(record.id, concurrent.id);
    assert_eq!(record.channel_id, 21);
    assert_eq!(record.message_id, 31);
    assert_eq!(entity::prelude::Views::find().count(db).await?, 1);

    Ok(())
}
