use super::*;

/// Tests the admin donation listing with an anonymous donation.
///
/// Verifies that the donor is masked while the amount still counts toward the total.
///
/// Expected: donor name "Anonymous", total of both donations
#[tokio::test]
async fn admin_listing_masks_anonymous_donors() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::user::create_admin(db).await?;
    let donor = factory::user::create_alumni(db).await?;
    factory::donation::create_donation(db, donor.id, 2_500).await?;
    factory::donation::create_donation_with_visibility(db, donor.id, 1_000, true).await?;
    let token = token_for(admin.id, UserRole::Admin);

    let (status, body) = send(
        &app(db),
        request(Method::GET, "/api/donations", Some(&token), None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], json!(2));
    assert_eq!(body["totalAmount"], json!(35.0));

    let names: Vec<&str> = body["donations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["donorName"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"Anonymous"));
    assert!(names.contains(&donor.name.as_str()));

    Ok(())
}

/// Tests an alumni donating through the API.
///
/// Expected: 201 with the thank-you message and the amount echoed back
#[tokio::test]
async fn alumni_donates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let donor = factory::user::create_alumni(db).await?;
    let token = token_for(donor.id, UserRole::Alumni);

    let (status, body) = send(
        &app(db),
        request(
            Method::POST,
            "/api/donations/donate",
            Some(&token),
            Some(json!({ "amount": 12.5, "purpose": "Library" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], json!("Thank you for your donation"));
    assert_eq!(body["donation"]["amount"], json!(12.5));

    Ok(())
}
