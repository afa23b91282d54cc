use super::*;

/// Tests deleting every view posted in a channel.
///
/// Expected: Ok(2) with the view in the other channel kept
#[tokio::test]
async fn deletes_channel_views() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_view_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::view::ViewFactory::new(db)
        .guild_id(10)
        .channel_id(50)
        .view_type("rank")
        .build()
        .await?;
    factory::view::ViewFactory::new(db)
        .guild_id(10)
        .channel_id(50)
        .view_type("ping")
        .build()
        .await?;
    factory::view::ViewFactory::new(db)
        .guild_id(10)
        .channel_id(51)
        .view_type("na")
        .build()
        .await?;

    let repo = ViewRepository::new(db);
    let removed = repo.delete_by_channel(50).await?;

    assert_eq!(removed, 2);
    assert_eq!(entity::prelude::Views::find().count(db).await?, 1);

    Ok(())
}
