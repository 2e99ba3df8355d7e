use super::*;

/// Tests registering for an event and cancelling twice.
///
/// Expected: 201, then 200 on the first cancel and 404 on the second
#[tokio::test]
async fn register_and_cancel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::user::create_admin(db).await?;
    let event = factory::event::create_event(db, admin.id).await?;
    let student = factory::user::create_student(db).await?;
    let token = token_for(student.id, UserRole::Student);
    let app = app(db);
    let uri = format!("/api/events/{}/register", event.id);

    let (status, body) = send(&app, request(Method::POST, &uri, Some(&token), None)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["registration"]["userId"], json!(student.id));

    let (status, _) = send(&app, request(Method::DELETE, &uri, Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, request(Method::DELETE, &uri, Some(&token), None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Registration not found"));

    Ok(())
}
