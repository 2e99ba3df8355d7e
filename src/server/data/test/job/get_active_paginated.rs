use super::*;

/// Tests that inactive jobs are excluded from the listing.
///
/// Expected: Ok with only the active job and total 1
#[tokio::test]
async fn excludes_inactive_jobs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_job_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (poster, active) = create_job_with_poster(db).await?;
    JobFactory::new(db, poster.id).active(false).build().await?;

    let (jobs, total) = JobRepository::new(db)
        .get_active_paginated(JobFilter::default(), PageRequest::default())
        .await?;

    assert_eq!(total, 1);
    assert_eq!(jobs[0].id, active.id);
    assert_eq!(jobs[0].posted_by_name, poster.name);

    Ok(())
}

/// Tests the exact job type filter.
///
/// Verifies that filtering by internship returns only active internships.
///
/// Expected: Ok with the single active internship
#[tokio::test]
async fn filters_by_job_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_job_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let poster = factory::create_alumni(db).await?;
    let internship = JobFactory::new(db, poster.id)
        .job_type(JobType::Internship)
        .build()
        .await?;
    JobFactory::new(db, poster.id)
        .job_type(JobType::Internship)
        .active(false)
        .build()
        .await?;
    JobFactory::new(db, poster.id)
        .job_type(JobType::Contract)
        .build()
        .await?;

    let (jobs, total) = JobRepository::new(db)
        .get_active_paginated(
            JobFilter {
                job_type: Some(JobType::Internship),
                ..Default::default()
            },
            PageRequest::default(),
        )
        .await?;

    assert_eq!(total, 1);
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].id, internship.id);
    assert_eq!(jobs[0].job_type, JobType::Internship);

    Ok(())
}

/// Tests case-insensitive substring search over title and company.
///
/// Expected: Ok with jobs whose title or company contains the term
#[tokio::test]
async fn searches_title_and_company() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_job_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let poster = factory::create_alumni(db).await?;
    JobFactory::new(db, poster.id)
        .title("Rust Developer")
        .company("Initech")
        .build()
        .await?;
    JobFactory::new(db, poster.id)
        .title("Data Analyst")
        .company("Rustic Foods")
        .build()
        .await?;
    JobFactory::new(db, poster.id)
        .title("Designer")
        .company("Globex")
        .location("Pune")
        .build()
        .await?;

    let repo = JobRepository::new(db);
    let (_, total) = repo
        .get_active_paginated(
            JobFilter {
                search: Some("rust".to_string()),
                ..Default::default()
            },
            PageRequest::default(),
        )
        .await?;
    assert_eq!(total, 2);

    let (jobs, _) = repo
        .get_active_paginated(
            JobFilter {
                location: Some("pun".to_string()),
                ..Default::default()
            },
            PageRequest::default(),
        )
        .await?;
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].company, "Globex");

    Ok(())
}

/// Tests search terms containing `LIKE` wildcard characters.
///
/// Verifies that `%` and `_` only match themselves, so a term made of them does not
/// match every posting.
///
/// Expected: Ok with only the posting containing `%` for `%` and `50%`, none for `_`
#[tokio::test]
async fn search_treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_job_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let poster = factory::create_alumni(db).await?;
    JobFactory::new(db, poster.id)
        .title("Designer")
        .company("Globex")
        .build()
        .await?;
    JobFactory::new(db, poster.id)
        .title("Analyst")
        .company("Initech")
        .build()
        .await?;
    let remote = JobFactory::new(db, poster.id)
        .title("Recruiter 50% remote")
        .company("Hooli")
        .build()
        .await?;

    let repo = JobRepository::new(db);
    for (term, expected) in [("%", 1), ("_", 0)] {
        let (_, total) = repo
            .get_active_paginated(
                JobFilter {
                    search: Some(term.to_string()),
                    ..Default::default()
                },
                PageRequest::default(),
            )
            .await?;
        assert_eq!(total, expected, "term {term}");
    }

    let (jobs, total) = repo
        .get_active_paginated(
            JobFilter {
                search: Some("50%".to_string()),
                ..Default::default()
            },
            PageRequest::default(),
        )
        .await?;
    assert_eq!(total, 1);
    assert_eq!(jobs[0].id, remote.id);

    let (_, total) = repo
        .get_active_paginated(
            JobFilter {
                location: Some("_".to_string()),
                ..Default::default()
            },
            PageRequest::default(),
        )
        .await?;
    assert_eq!(total, 0);

    Ok(())
}

/// Tests application counts on listed jobs.
///
/// Expected: Ok with application_count matching the inserted applications
#[tokio::test]
async fn includes_application_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_job_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, job) = create_job_with_poster(db).await?;
    for _ in 0..3 {
        let student = factory::create_student(db).await?;
        factory::create_application(db, job.id, student.id).await?;
    }

    let found = JobRepository::new(db).get_by_id(job.id).await?.unwrap();

    assert_eq!(found.application_count, 3);

    Ok(())
}
