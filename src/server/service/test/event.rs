use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory, factory::event::EventFactory};

use crate::server::{
    error::AppError,
    model::{event::UpdateEventParams, user::User},
    service::event::EventService,
};

/// Tests registration rules.
///
/// Verifies duplicate registrations, full events and events that already started
/// are rejected.
///
/// Expected: Ok for the first registration, BadRequest for each rule
#[tokio::test]
async fn enforces_registration_rules() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = EventService::new(db);

    let admin = factory::create_admin(db).await?;
    let first = User::from_entity(factory::create_student(db).await?);
    let second = User::from_entity(factory::create_alumni(db).await?);

    let small = EventFactory::new(db, admin.id).capacity(1).build().await?;
    let past = EventFactory::new(db, admin.id)
        .starts_at(Utc::now() - Duration::hours(1))
        .build()
        .await?;

    service.register(&first, small.id).await?;

    assert!(matches!(
        service.register(&first, small.id).await,
        Err(AppError::BadRequest(ref m)) if m == "Already registered for this event"
    ));
    assert!(matches!(
        service.register(&second, small.id).await,
        Err(AppError::BadRequest(ref m)) if m == "Event is full"
    ));
    assert!(matches!(
        service.register(&second, past.id).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}

/// Tests cancelling a registration.
///
/// Expected: Ok once, NotFound the second time
#[tokio::test]
async fn cancels_registration_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = EventService::new(db);

    let admin = factory::create_admin(db).await?;
    let student = factory::create_student(db).await?;
    let event = factory::create_event(db, admin.id).await?;
    factory::create_registration(db, event.id, student.id).await?;

    let student = User::from_entity(student);
    service.cancel_registration(&student, event.id).await?;

    assert!(matches!(
        service.cancel_registration(&student, event.id).await,
        Err(AppError::NotFound(_))
    ));
    assert_eq!(service.get_active(event.id).await?.registration_count, 0);

    Ok(())
}

/// Tests schedule validation on update.
///
/// Verifies that an end time is checked against the stored start time when only
/// the end is changed.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn update_validates_merged_schedule() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = EventService::new(db);

    let admin = factory::create_admin(db).await?;
    let event = factory::create_event(db, admin.id).await?;

    let result = service
        .update(
            event.id,
            UpdateEventParams {
                ends_at: Some(event.starts_at - Duration::hours(2)),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests soft delete.
///
/// Expected: the event disappears from listings and lookups
#[tokio::test]
async fn deactivated_event_is_hidden() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = EventService::new(db);

    let admin = factory::create_admin(db).await?;
    let event = factory::create_event(db, admin.id).await?;

    service.deactivate(event.id).await?;

    assert!(service.list(false).await?.is_empty());
    assert!(matches!(
        service.get_active(event.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.deactivate(event.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
