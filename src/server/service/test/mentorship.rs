use entity::sea_orm_active_enums::{MentorshipStatus, UserRole};
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::create_mentor_and_mentee, user::UserFactory},
};

use crate::server::{
    error::AppError,
    model::{mentorship::CreateMentorshipParams, user::User},
    service::mentorship::MentorshipService,
};

fn request(mentor_id: i32, mentee_id: i32) -> CreateMentorshipParams {
    CreateMentorshipParams {
        mentor_id,
        mentee_id,
        topic: "Breaking into research".to_string(),
        message: None,
    }
}

/// Tests mentor eligibility.
///
/// Verifies that requests to students, deactivated alumni and unknown IDs are
/// rejected as not found.
///
/// Expected: Err(AppError::NotFound) for each
#[tokio::test]
async fn mentor_must_be_active_alumni() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Mentorship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = MentorshipService::new(db);

    let mentee = factory::create_student(db).await?;
    let other_student = factory::create_student(db).await?;
    let inactive_alumni = UserFactory::new(db)
        .role(UserRole::Alumni)
        .active(false)
        .build()
        .await?;

    for mentor_id in [other_student.id, inactive_alumni.id, 9999] {
        assert!(matches!(
            service.request(request(mentor_id, mentee.id)).await,
            Err(AppError::NotFound(_))
        ));
    }

    Ok(())
}

/// Tests the single pending request rule.
///
/// Verifies that a second pending request is rejected, and that a new request is
/// allowed once the first was answered.
///
/// Expected: BadRequest while pending, Ok after rejection
#[tokio::test]
async fn allows_one_pending_request_per_mentor() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Mentorship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = MentorshipService::new(db);

    let (mentor, mentee) = create_mentor_and_mentee(db).await?;
    let mentor = User::from_entity(mentor);

    let first = service.request(request(mentor.id, mentee.id)).await?;
    assert!(matches!(
        service.request(request(mentor.id, mentee.id)).await,
        Err(AppError::BadRequest(_))
    ));

    service
        .update_status(&mentor, first.id, MentorshipStatus::Rejected)
        .await?;
    assert!(service.request(request(mentor.id, mentee.id)).await.is_ok());

    Ok(())
}

/// Tests status transitions.
///
/// Verifies that only the addressed mentor may answer and that statuses only move
/// forward.
///
/// Expected: Forbidden for others, BadRequest for skipped or backward transitions
#[tokio::test]
async fn enforces_transitions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Mentorship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = MentorshipService::new(db);

    let (mentor, mentee) = create_mentor_and_mentee(db).await?;
    let mentor = User::from_entity(mentor);
    let other_mentor = User::from_entity(factory::create_alumni(db).await?);
    let request = service.request(request(mentor.id, mentee.id)).await?;

    assert!(matches!(
        service
            .update_status(&other_mentor, request.id, MentorshipStatus::Accepted)
            .await,
        Err(AppError::Forbidden(_))
    ));
    assert!(matches!(
        service
            .update_status(&mentor, request.id, MentorshipStatus::Completed)
            .await,
        Err(AppError::BadRequest(_))
    ));

    let accepted = service
        .update_status(&mentor, request.id, MentorshipStatus::Accepted)
        .await?;
    assert_eq!(accepted.status, MentorshipStatus::Accepted);

    assert!(matches!(
        service
            .update_status(&mentor, request.id, MentorshipStatus::Pending)
            .await,
        Err(AppError::BadRequest(_))
    ));

    let completed = service
        .update_status(&mentor, request.id, MentorshipStatus::Completed)
        .await?;
    assert_eq!(completed.status, MentorshipStatus::Completed);

    Ok(())
}

/// Tests listing by role.
///
/// Expected: the mentor sees incoming requests, the mentee sees sent ones
#[tokio::test]
async fn lists_requests_by_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Mentorship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = MentorshipService::new(db);

    let (mentor, mentee) = create_mentor_and_mentee(db).await?;
    factory::create_mentorship(db, mentor.id, mentee.id, MentorshipStatus::Pending).await?;

    let incoming = service.get_mine(&User::from_entity(mentor.clone())).await?;
    let sent = service.get_mine(&User::from_entity(mentee.clone())).await?;

    assert_eq!(incoming.len(), 1);
    assert_eq!(incoming[0].mentee_name, mentee.name);
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].mentor_name, mentor.name);

    Ok(())
}
