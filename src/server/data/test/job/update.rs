use super::*;

/// Tests partial update of a job.
///
/// Verifies that provided fields change and omitted fields are kept.
///
/// Expected: Ok(Some) with new title and unchanged company
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_job_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, job) = create_job_with_poster(db).await?;

    let updated = JobRepository::new(db)
        .update(
            job.id,
            UpdateJobParams {
                title: Some("Staff Engineer".to_string()),
                job_type: Some(JobType::Contract),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Staff Engineer");
    assert_eq!(updated.job_type, JobType::Contract);
    assert_eq!(updated.company, job.company);

    Ok(())
}

/// Tests soft delete.
///
/// Verifies that a deactivated job is still retrievable by ID and listed for
/// its poster but marked inactive.
///
/// Expected: Ok(true) and is_active false
#[tokio::test]
async fn deactivates_job() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_job_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (poster, job) = create_job_with_poster(db).await?;
    let repo = JobRepository::new(db);

    assert!(repo.deactivate(job.id).await?);
    assert!(!repo.get_by_id(job.id).await?.unwrap().is_active);
    assert_eq!(repo.get_by_poster(poster.id).await?.len(), 1);
    assert_eq!(repo.count_active().await?, 0);
    assert!(!repo.deactivate(999).await?);

    Ok(())
}
