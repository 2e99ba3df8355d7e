use super::*;

/// Tests creating an application and reading it back per job and per student.
///
/// Expected: Ok with the application visible from both sides
#[tokio::test]
async fn creates_application_visible_to_both_sides() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_job_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, job) = create_job_with_poster(db).await?;
    let student = factory::create_student(db).await?;
    let repo = JobApplicationRepository::new(db);

    let application = repo
        .create(job.id, student.id, Some("Hire me".to_string()))
        .await?;

    assert_eq!(application.status, ApplicationStatus::Applied);
    assert_eq!(application.student_name, student.name);
    assert!(repo.exists(job.id, student.id).await?);

    let for_job = repo.get_by_job(job.id).await?;
    assert_eq!(for_job.len(), 1);

    let for_student = repo.get_by_student(student.id).await?;
    assert_eq!(for_student.len(), 1);
    assert_eq!(for_student[0].job_title, job.title);

    Ok(())
}

/// Tests updating an application's status.
///
/// Expected: Ok(Some) with the new status
#[tokio::test]
async fn updates_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_job_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, job) = create_job_with_poster(db).await?;
    let student = factory::create_student(db).await?;
    let application = factory::create_application(db, job.id, student.id).await?;

    let updated = JobApplicationRepository::new(db)
        .update_status(application.id, ApplicationStatus::Reviewed)
        .await?
        .unwrap();

    assert_eq!(updated.status, ApplicationStatus::Reviewed);

    Ok(())
}
