use entity::sea_orm_active_enums::{MentorshipStatus, UserRole};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory, factory::job::JobFactory};

use crate::server::{
    error::AppError,
    model::{admin::UpsertAdminProfileParams, user::User},
    service::admin::AdminService,
};

/// Tests creating the bootstrap admin.
///
/// Expected: Ok(User) with admin role, admin_exists true afterwards
#[tokio::test]
async fn bootstraps_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = AdminService::new(db);

    assert!(!service.admin_exists().await?);

    let admin = service
        .bootstrap_admin("Root@Example.com", "supersecret")
        .await?
        .expect("admin should be created");

    assert_eq!(admin.role, UserRole::Admin);
    assert_eq!(admin.email, "root@example.com");
    assert!(service.admin_exists().await?);

    Ok(())
}

/// Tests bootstrapping with an email that already belongs to a regular account.
///
/// Verifies the existing account is left untouched instead of failing on the
/// unique email constraint.
///
/// Expected: Ok(None), still no admin
#[tokio::test]
async fn skips_bootstrap_when_email_taken() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let student = factory::user::UserFactory::new(db)
        .email("root@example.com")
        .role(UserRole::Student)
        .build()
        .await?;
    let service = AdminService::new(db);

    let result = service
        .bootstrap_admin("Root@Example.com", "supersecret")
        .await?;

    assert!(result.is_none());
    assert!(!service.admin_exists().await?);
    let unchanged = entity::prelude::User::find_by_id(student.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(unchanged.role, UserRole::Student);

    Ok(())
}

/// Tests that an admin cannot deactivate themselves.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn refuses_self_deactivation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = User::from_entity(factory::create_admin(db).await?);
    let result = AdminService::new(db)
        .set_user_status(&admin, admin.id, false)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests deactivating and reactivating another user.
///
/// Expected: Ok with the flag flipped; NotFound for a missing user
#[tokio::test]
async fn toggles_other_user_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = AdminService::new(db);

    let admin = User::from_entity(factory::create_admin(db).await?);
    let student = factory::create_student(db).await?;

    let user = service.set_user_status(&admin, student.id, false).await?;
    assert!(!user.is_active);

    let user = service.set_user_status(&admin, student.id, true).await?;
    assert!(user.is_active);

    assert!(matches!(
        service.set_user_status(&admin, 9999, false).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests the admin profile lifecycle.
///
/// Expected: NotFound before the first save, then the saved fields
#[tokio::test]
async fn saves_admin_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = AdminService::new(db);

    let admin = factory::create_admin(db).await?;

    assert!(matches!(
        service.get_profile(admin.id).await,
        Err(AppError::NotFound(_))
    ));

    service
        .upsert_profile(UpsertAdminProfileParams {
            user_id: admin.id,
            department: Some("Alumni Relations".to_string()),
            designation: Some("Director".to_string()),
            phone: None,
        })
        .await?;

    let profile = service.get_profile(admin.id).await?;
    assert_eq!(profile.designation.as_deref(), Some("Director"));

    Ok(())
}

/// Tests dashboard counters.
///
/// Verifies user counts by role, active jobs, donation sums and mentorship counts.
///
/// Expected: Ok(DashboardStats) matching the inserted rows
#[tokio::test]
async fn collects_dashboard_stats() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let alumni = factory::create_alumni(db).await?;
    let student = factory::create_student(db).await?;

    let job = factory::create_job(db, alumni.id).await?;
    JobFactory::new(db, alumni.id).active(false).build().await?;
    factory::create_application(db, job.id, student.id).await?;

    factory::create_donation(db, alumni.id, 5_000).await?;
    factory::create_donation(db, alumni.id, 250).await?;

    factory::create_mentorship(db, alumni.id, student.id, MentorshipStatus::Pending).await?;
    factory::create_mentorship(db, alumni.id, student.id, MentorshipStatus::Completed).await?;

    factory::create_event(db, admin.id).await?;

    let stats = AdminService::new(db).stats().await?;

    assert_eq!(stats.total_users, 3);
    assert_eq!(stats.active_users, 3);
    assert_eq!(stats.admins, 1);
    assert_eq!(stats.alumni, 1);
    assert_eq!(stats.students, 1);
    assert_eq!(stats.active_jobs, 1);
    assert_eq!(stats.total_applications, 1);
    assert_eq!(stats.donation_count, 2);
    assert_eq!(stats.donation_total_cents, 5_250);
    assert_eq!(stats.mentorships_pending, 1);
    assert_eq!(stats.mentorships_completed, 1);
    assert_eq!(stats.mentorships_accepted, 0);
    assert_eq!(stats.upcoming_events, 1);

    Ok(())
}
