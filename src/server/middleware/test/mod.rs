use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use entity::sea_orm_active_enums::UserRole;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
    util::jwt::JwtKeys,
};
use test_utils::{builder::TestBuilder, factory};

mod require;

const SECRET: &str = "middleware-test-secret";

fn keys() -> JwtKeys {
    JwtKeys::new(SECRET, 1)
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

fn bearer_for(keys: &JwtKeys, user_id: i32, role: UserRole) -> HeaderMap {
    bearer(&keys.issue(user_id, role).unwrap())
}
