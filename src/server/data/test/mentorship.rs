use crate::server::{
    data::mentorship::MentorshipRepository, model::mentorship::CreateMentorshipParams,
};
use entity::sea_orm_active_enums::MentorshipStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::helpers::create_mentor_and_mentee};

/// Tests creating a request.
///
/// Expected: Ok with pending status and both participant names
#[tokio::test]
async fn creates_pending_request_with_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Mentorship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (mentor, mentee) = create_mentor_and_mentee(db).await?;
    let repo = MentorshipRepository::new(db);

    let mentorship = repo
        .create(CreateMentorshipParams {
            mentor_id: mentor.id,
            mentee_id: mentee.id,
            topic: "Career advice".to_string(),
            message: None,
        })
        .await?;

    assert_eq!(mentorship.status, MentorshipStatus::Pending);
    assert_eq!(mentorship.mentor_name, mentor.name);
    assert_eq!(mentorship.mentee_name, mentee.name);
    assert!(repo.pending_exists(mentor.id, mentee.id).await?);

    Ok(())
}

/// Tests listing from both sides.
///
/// Expected: Ok with the request listed for the mentor and the mentee only
#[tokio::test]
async fn lists_for_mentor_and_mentee() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Mentorship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (mentor, mentee) = create_mentor_and_mentee(db).await?;
    let other = factory::create_student(db).await?;
    factory::create_mentorship(db, mentor.id, mentee.id, MentorshipStatus::Pending).await?;

    let repo = MentorshipRepository::new(db);

    assert_eq!(repo.get_for_mentor(mentor.id).await?.len(), 1);
    assert_eq!(repo.get_for_mentee(mentee.id).await?.len(), 1);
    assert!(repo.get_for_mentee(other.id).await?.is_empty());

    Ok(())
}

/// Tests that only pending requests count as open.
///
/// Expected: pending_exists false once the request is accepted
#[tokio::test]
async fn pending_check_ignores_answered_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Mentorship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (mentor, mentee) = create_mentor_and_mentee(db).await?;
    let request =
        factory::create_mentorship(db, mentor.id, mentee.id, MentorshipStatus::Pending).await?;
    let repo = MentorshipRepository::new(db);

    let updated = repo
        .update_status(request.id, MentorshipStatus::Accepted)
        .await?
        .unwrap();

    assert_eq!(updated.status, MentorshipStatus::Accepted);
    assert!(!repo.pending_exists(mentor.id, mentee.id).await?);
    assert_eq!(repo.count_by_status(MentorshipStatus::Accepted).await?, 1);

    Ok(())
}
