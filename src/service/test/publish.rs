use super::*;
use crate::model::{lifecycle::RetiredMessage, selection::NO_ROLES_VALUE};
use sea_orm::ConnectionTrait;

/// Tests publishing a kind for the first time.
///
/// Verifies that the message carries the embed and a dropdown seeded with the kind's
/// candidates, the view is stored, and the component is registered.
///
/// Expected: Ok with receipt describing the new message
#[tokio::test]
async fn publishes_new_view() -> Result<(), AppError> {
    let test = TestBuilder::new().with_view_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fake = FakeDiscord::new();
    fake.add_guild(GUILD_ID, &[CHANNEL_ID], guild_roles());
    let discord = fake.collaborators();
    let registry = ViewRegistry::new();
    let service = ViewLifecycleService::new(db, &discord, &registry);

    let kind = ViewKind::RegionalPower(Region::Na);
    let receipt = service
        .publish(kind, GUILD_ID, CHANNEL_ID, kind.default_embed())
        .await?;

    assert_eq!(receipt.candidate_count, 2);
    assert!(receipt.replaced.is_none());

    let embed = fake.embed_of(receipt.message_id).unwrap();
    assert_eq!(embed.title, "Western XP Roles");

    let menu = fake.menu_of(receipt.message_id).unwrap();
    assert_eq!(menu.custom_id, "role_select_na");
    let options: Vec<&str> = menu.options.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(options, vec!["11", "12"]);

    let stored = entity::prelude::Views::find().all(db).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].message_id, receipt.message_id as i64);
    assert_eq!(stored[0].view_type, "na");

    assert!(registry.get(receipt.message_id).await.is_some());

    Ok(())
}

/// Tests publishing the same kind twice in a guild.
///
/// Verifies that the first message is deleted, its component unbound, and the single
/// stored row points at the second message.
///
/// Expected: Ok with one row for the second message
#[tokio::test]
async fn republish_replaces_previous_view() -> Result<(), AppError> {
    let test = TestBuilder::new().with_view_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fake = FakeDiscord::new();
    fake.add_guild(GUILD_ID, &[CHANNEL_ID], guild_roles());
    let discord = fake.collaborators();
    let registry = ViewRegistry::new();
    let service = ViewLifecycleService::new(db, &discord, &registry);

    let embed = ViewKind::Rank.default_embed();
    let first = service
        .publish(ViewKind::Rank, GUILD_ID, CHANNEL_ID, embed.clone())
        .await?;
    let second = service
        .publish(ViewKind::Rank, GUILD_ID, CHANNEL_ID, embed)
        .await?;

    assert_ne!(first.message_id, second.message_id);
    let replaced = second.replaced.as_ref().unwrap();
    assert_eq!(replaced.record.message_id, first.message_id);
    assert_eq!(replaced.message, RetiredMessage::Deleted);
    assert_eq!(fake.delete_attempts(), vec![first.message_id]);
    assert!(!fake.has_message(first.message_id));
    assert!(registry.get(first.message_id).await.is_none());

    let stored = entity::prelude::Views::find().all(db).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].message_id, second.message_id as i64);

    Ok(())
}

/// Tests republishing when the previous message cannot be deleted.
///
/// Verifies that a failed delete of the old message does not block the new view.
///
/// Expected: Ok with the delete reported as failed and the record updated
#[tokio::test]
async fn republish_survives_failed_delete() -> Result<(), AppError> {
    let test = TestBuilder::new().with_view_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fake = FakeDiscord::new();
    fake.add_guild(GUILD_ID, &[CHANNEL_ID], guild_roles());
    factory::view::ViewFactory::new(db)
        .guild_id(GUILD_ID)
        .channel_id(CHANNEL_ID)
        .message_id(777)
        .view_type("ping")
        .build()
        .await?;
    fake.fail_delete(TransportError::Forbidden);
    let discord = fake.collaborators();
    let registry = ViewRegistry::new();
    let service = ViewLifecycleService::new(db, &discord, &registry);

    let receipt = service
        .publish(ViewKind::Ping, GUILD_ID, CHANNEL_ID, ViewKind::Ping.default_embed())
        .await?;

    assert_eq!(
        receipt.replaced.map(|replaced| replaced.message),
        Some(RetiredMessage::DeleteFailed)
    );
    assert_eq!(fake.delete_attempts(), vec![777]);

    let stored = entity::prelude::Views::find().all(db).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].message_id, receipt.message_id as i64);

    Ok(())
}

/// Tests publishing in a guild without qualifying roles.
///
/// Expected: Ok with a disabled placeholder dropdown
#[tokio::test]
async fn publishes_placeholder_without_candidates() -> Result<(), AppError> {
    let test = TestBuilder::new().with_view_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fake = FakeDiscord::new();
    fake.add_guild(GUILD_ID, &[CHANNEL_ID], vec![role(1, "@everyone")]);
    let discord = fake.collaborators();
    let registry = ViewRegistry::new();
    let service = ViewLifecycleService::new(db, &discord, &registry);

    let receipt = service
        .publish(ViewKind::Ping, GUILD_ID, CHANNEL_ID, ViewKind::Ping.default_embed())
        .await?;

    assert_eq!(receipt.candidate_count, 0);
    let menu = fake.menu_of(receipt.message_id).unwrap();
    assert!(menu.disabled);
    assert_eq!(menu.options[0].value, NO_ROLES_VALUE);

    Ok(())
}

/// Tests that a role lookup failure leaves no message and no record behind.
///
/// Expected: Err(TransportErr) with the new message deleted
#[tokio::test]
async fn failed_binding_removes_new_message() -> Result<(), AppError> {
    let test = TestBuilder::new().with_view_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fake = FakeDiscord::new();
    fake.add_guild(GUILD_ID, &[CHANNEL_ID], guild_roles());
    fake.fail_list_roles(TransportError::Request("outage".to_string()));
    let discord = fake.collaborators();
    let registry = ViewRegistry::new();
    let service = ViewLifecycleService::new(db, &discord, &registry);

    let result = service
        .publish(ViewKind::Rank, GUILD_ID, CHANNEL_ID, ViewKind::Rank.default_embed())
        .await;

    assert!(matches!(result, Err(AppError::TransportErr(_))));
    assert_eq!(fake.delete_attempts().len(), 1);
    assert_eq!(entity::prelude::Views::find().count(db).await?, 0);
    assert!(registry.is_empty().await);

    Ok(())
}

/// Tests republishing after someone already deleted the previous message.
///
/// Expected: Ok with the previous message reported as already gone
#[tokio::test]
async fn republish_after_manual_delete() -> Result<(), AppError> {
    let test = TestBuilder::new().with_view_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fake = FakeDiscord::new();
    fake.add_guild(GUILD_ID, &[CHANNEL_ID], guild_roles());
    factory::view::ViewFactory::new(db)
        .guild_id(GUILD_ID)
        .channel_id(CHANNEL_ID)
        .message_id(777)
        .view_type("rank")
        .build()
        .await?;
    let discord = fake.collaborators();
    let registry = ViewRegistry::new();
    let service = ViewLifecycleService::new(db, &discord, &registry);

    let receipt = service
        .publish(ViewKind::Rank, GUILD_ID, CHANNEL_ID, ViewKind::Rank.default_embed())
        .await?;

    assert_eq!(
        receipt.replaced.map(|replaced| replaced.message),
        Some(RetiredMessage::AlreadyGone)
    );
    assert_eq!(fake.delete_attempts(), vec![777]);

    Ok(())
}

/// Tests a store failure after the new message was posted.
///
/// Verifies that the error is returned, the posted message is left in place, and no
/// record points at it.
///
/// Expected: Err(DbErr) with the new message kept and the store empty
#[tokio::test]
async fn failed_store_write_leaves_message_orphaned() -> Result<(), AppError> {
    let test = TestBuilder::new().with_view_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    db.execute_unprepared(
        "CREATE TRIGGER reject_views BEFORE INSERT ON views \
         BEGIN SELECT RAISE(ABORT, 'views are read-only'); END;",
    )
    .await?;
    let fake = FakeDiscord::new();
    fake.add_guild(GUILD_ID, &[CHANNEL_ID], guild_roles());
    let discord = fake.collaborators();
    let registry = ViewRegistry::new();
    let service = ViewLifecycleService::new(db, &discord, &registry);

    let result = service
        .publish(ViewKind::Rank, GUILD_ID, CHANNEL_ID, ViewKind::Rank.default_embed())
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    let sent = fake.message_ids();
    assert_eq!(sent.len(), 1);
    assert!(fake.menu_of(sent[0]).is_some());
    assert!(fake.delete_attempts().is_empty());
    assert_eq!(entity::prelude::Views::find().count(db).await?, 0);

    Ok(())
}
