use super::*;

/// Tests deleting every view of a guild.
///
/// Expected: Ok(2) with the other guild's view kept
#[tokio::test]
async fn deletes_all_guild_views() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_view_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_view(db, 10, "rank").await?;
    factory::create_view(db, 10, "ping").await?;
    let kept = factory::create_view(db, 11, "rank").await?;

    let repo = ViewRepository::new(db);
    let removed = repo.delete_by_guild(10).await?;

    assert_eq!(removed, 2);
    let remaining = entity::prelude::Views::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);

    Ok(())
}
