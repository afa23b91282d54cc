use super::*;

/// Tests deleting the view attached to a message.
///
/// Expected: Ok(1) and the record is gone
#[tokio::test]
async fn deletes_view_by_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_view_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let view = factory::view::ViewFactory::new(db)
        .guild_id(10)
        .message_id(30)
        .build()
        .await?;
    factory::create_view(db, 10, "ping").await?;

    let repo = ViewRepository::new(db);
    let removed = repo.delete(10, 30).await?;

    assert_eq!(removed, 1);
    assert!(entity::prelude::Views::find_by_id(view.id)
        .one(db)
        .await?
        .is_none());
    assert_eq!(entity::prelude::Views::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting a message that carries no view.
///
/// Expected: Ok(0) with store unchanged
#[tokio::test]
async fn missing_view_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_view_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::view::ViewFactory::new(db)
        .guild_id(10)
        .message_id(30)
        .build()
        .await?;

    let repo = ViewRepository::new(db);
    let removed = repo.delete(10, 31).await?;

    assert_eq!(removed, 0);
    assert_eq!(entity::prelude::Views::find().count(db).await?, 1);

    Ok(())
}

/// Tests that a matching message id in another guild is not deleted.
///
/// Expected: Ok(0)
#[tokio::test]
async fn requires_matching_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_view_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::view::ViewFactory::new(db)
        .guild_id(10)
        .message_id(30)
        .build()
        .await?;

    let repo = ViewRepository::new(db);
    let removed = repo.delete(11, 30).await?;

    assert_eq!(removed, 0);

    Ok(())
}
