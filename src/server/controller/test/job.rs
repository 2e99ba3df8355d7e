use super::*;

/// Tests applying to the same job twice.
///
/// Verifies that the first application may omit the body entirely and that the
/// second attempt is refused.
///
/// Expected: 201 then 400 "Already applied to this job"
#[tokio::test]
async fn second_application_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_job_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, job) = factory::helpers::create_job_with_poster(db).await?;
    let student = factory::user::create_student(db).await?;
    let token = token_for(student.id, UserRole::Student);
    let app = app(db);
    let uri = format!("/api/jobs/{}/apply", job.id);

    let (status, body) = send(&app, request(Method::POST, &uri, Some(&token), None)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["application"]["status"], json!("applied"));
    assert_eq!(body["application"]["coverLetter"], Value::Null);

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            &uri,
            Some(&token),
            Some(json!({ "coverLetter": "Still keen" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Already applied to this job"));

    Ok(())
}

/// Tests the poster reviewing applications and setting a status.
///
/// Expected: applicant listed with name, then status moves to `accepted`
#[tokio::test]
async fn poster_reviews_applications() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_job_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (poster, job) = factory::helpers::create_job_with_poster(db).await?;
    let student = factory::user::create_student(db).await?;
    let application = factory::job_application::create_application(db, job.id, student.id).await?;
    let token = token_for(poster.id, UserRole::Alumni);
    let app = app(db);

    let (status, body) = send(
        &app,
        request(
            Method::GET,
            &format!("/api/jobs/{}/applications", job.id),
            Some(&token),
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["applications"][0]["studentName"], json!(student.name));

    let (status, body) = send(
        &app,
        request(
            Method::PATCH,
            &format!("/api/jobs/{}/applications/{}", job.id, application.id),
            Some(&token),
            Some(json!({ "status": "accepted" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["application"]["status"], json!("accepted"));

    Ok(())
}

/// Tests that `/api/jobs/mine` is not captured by the `{job_id}` route.
///
/// Expected: 200 listing the poster's jobs without pagination
#[tokio::test]
async fn mine_route_lists_own_jobs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_job_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (poster, job) = factory::helpers::create_job_with_poster(db).await?;
    let token = token_for(poster.id, UserRole::Alumni);

    let (status, body) = send(
        &app(db),
        request(Method::GET, "/api/jobs/mine", Some(&token), None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["jobs"][0]["id"], json!(job.id));
    assert!(body.get("pagination").is_none());

    Ok(())
}
