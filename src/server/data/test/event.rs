use crate::server::{
    data::{event::EventRepository, event_registration::EventRegistrationRepository},
    model::event::UpdateEventParams,
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::event::EventFactory};

/// Tests the active listing and the upcoming filter.
///
/// Verifies that inactive events are hidden and that passing a start bound
/// hides events that already started.
///
/// Expected: Ok with 2 active events, 1 upcoming
#[tokio::test]
async fn lists_active_and_upcoming() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    EventFactory::new(db, admin.id)
        .starts_at(Utc::now() - Duration::days(2))
        .build()
        .await?;
    let upcoming = factory::create_event(db, admin.id).await?;
    EventFactory::new(db, admin.id).active(false).build().await?;

    let repo = EventRepository::new(db);

    let all = repo.get_active(None).await?;
    assert_eq!(all.len(), 2);
    assert!(all[0].starts_at < all[1].starts_at);

    let future = repo.get_active(Some(Utc::now())).await?;
    assert_eq!(future.len(), 1);
    assert_eq!(future[0].id, upcoming.id);
    assert_eq!(repo.count_upcoming(Utc::now()).await?, 1);

    Ok(())
}

/// Tests registration counting and cancellation.
///
/// Expected: Ok with count 1 after registering, 0 after cancelling
#[tokio::test]
async fn counts_and_cancels_registrations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let student = factory::create_student(db).await?;
    let event = factory::create_event(db, admin.id).await?;

    let registrations = EventRegistrationRepository::new(db);
    let events = EventRepository::new(db);

    registrations.create(event.id, student.id).await?;
    assert!(registrations.exists(event.id, student.id).await?);
    assert_eq!(events.get_by_id(event.id).await?.unwrap().registration_count, 1);

    assert!(registrations.delete(event.id, student.id).await?);
    assert!(!registrations.delete(event.id, student.id).await?);
    assert_eq!(events.get_by_id(event.id).await?.unwrap().registration_count, 0);

    Ok(())
}

/// Tests update and soft delete.
///
/// Expected: Ok with new capacity, then is_active false
#[tokio::test]
async fn updates_and_deactivates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let event = factory::create_event(db, admin.id).await?;
    let repo = EventRepository::new(db);

    let updated = repo
        .update(
            event.id,
            UpdateEventParams {
                capacity: Some(25),
                ..Default::default()
            },
        )
        .await?
        .unwrap();
    assert_eq!(updated.capacity, Some(25));

    assert!(repo.deactivate(event.id).await?);
    assert!(repo.get_active(None).await?.is_empty());

    Ok(())
}
