use crate::server::{
    data::user::UserRepository,
    model::{
        page::PageRequest,
        user::{CreateUserParams, UserFilter},
    },
};
use entity::sea_orm_active_enums::UserRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod set_active;
