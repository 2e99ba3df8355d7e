use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::ApplicationStatus;
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::create_job_with_poster, job::JobFactory},
};

use crate::server::{
    error::AppError,
    model::{job::UpdateJobParams, user::User},
    service::job::JobService,
};

/// Tests the one-application-per-student rule.
///
/// Expected: Ok for the first application, BadRequest("Already applied to this job")
/// for the second
#[tokio::test]
async fn rejects_second_application() -> Result<(), AppError> {
    let test = TestBuilder::new().with_job_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = JobService::new(db);

    let (_, job) = create_job_with_poster(db).await?;
    let student = User::from_entity(factory::create_student(db).await?);

    let application = service
        .apply(&student, job.id, Some("Hire me".to_string()))
        .await?;
    assert_eq!(application.status, ApplicationStatus::Applied);

    let result = service.apply(&student, job.id, None).await;
    assert!(
        matches!(result, Err(AppError::BadRequest(ref m)) if m == "Already applied to this job")
    );

    Ok(())
}

/// Tests applying to closed postings.
///
/// Verifies that deactivated postings are not found and that postings past their
/// deadline reject applications.
///
/// Expected: NotFound and BadRequest
#[tokio::test]
async fn rejects_closed_postings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_job_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = JobService::new(db);

    let poster = factory::create_alumni(db).await?;
    let student = User::from_entity(factory::create_student(db).await?);

    let inactive = JobFactory::new(db, poster.id).active(false).build().await?;
    let expired = JobFactory::new(db, poster.id)
        .deadline(Utc::now() - Duration::days(1))
        .build()
        .await?;

    assert!(matches!(
        service.apply(&student, inactive.id, None).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.apply(&student, expired.id, None).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}

/// Tests poster-or-admin management rights.
///
/// Verifies that another alumni cannot update or delete a posting while the poster
/// and admins can.
///
/// Expected: Forbidden for the stranger, Ok for poster and admin
#[tokio::test]
async fn only_poster_or_admin_manages_job() -> Result<(), AppError> {
    let test = TestBuilder::new().with_job_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = JobService::new(db);

    let (poster, job) = create_job_with_poster(db).await?;
    let poster = User::from_entity(poster);
    let stranger = User::from_entity(factory::create_alumni(db).await?);
    let admin = User::from_entity(factory::create_admin(db).await?);

    let rename = |title: &str| UpdateJobParams {
        title: Some(title.to_string()),
        ..Default::default()
    };

    assert!(matches!(
        service.update(&stranger, job.id, rename("Hijacked")).await,
        Err(AppError::Forbidden(_))
    ));
    assert!(matches!(
        service.deactivate(&stranger, job.id).await,
        Err(AppError::Forbidden(_))
    ));
    assert!(matches!(
        service.get_applications(&stranger, job.id).await,
        Err(AppError::Forbidden(_))
    ));

    let updated = service.update(&poster, job.id, rename("Senior Engineer")).await?;
    assert_eq!(updated.title, "Senior Engineer");

    service.deactivate(&admin, job.id).await?;
    assert!(matches!(
        service.get_active(job.id).await,
        Err(AppError::NotFound(_))
    ));
    assert_eq!(service.get_mine(&poster).await?.len(), 1);

    Ok(())
}

/// Tests reviewing applications.
///
/// Verifies that an application can only be reviewed through the posting it
/// belongs to.
///
/// Expected: Ok for the matching posting, NotFound through another posting
#[tokio::test]
async fn reviews_application_of_own_posting() -> Result<(), AppError> {
    let test = TestBuilder::new().with_job_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = JobService::new(db);

    let (poster, job) = create_job_with_poster(db).await?;
    let poster = User::from_entity(poster);
    let other_job = factory::create_job(db, poster.id).await?;
    let student = factory::create_student(db).await?;
    let application = factory::create_application(db, job.id, student.id).await?;

    assert!(matches!(
        service
            .update_application_status(
                &poster,
                other_job.id,
                application.id,
                ApplicationStatus::Accepted
            )
            .await,
        Err(AppError::NotFound(_))
    ));

    let reviewed = service
        .update_application_status(&poster, job.id, application.id, ApplicationStatus::Reviewed)
        .await?;
    assert_eq!(reviewed.status, ApplicationStatus::Reviewed);

    let applied = service
        .get_applied(&User::from_entity(student))
        .await?;
    assert_eq!(applied.len(), 1);
    assert_eq!(applied[0].status, ApplicationStatus::Reviewed);

    Ok(())
}
