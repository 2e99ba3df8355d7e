use crate::server::{
    data::{job::JobRepository, job_application::JobApplicationRepository},
    model::{
        job::{JobFilter, UpdateJobParams},
        page::PageRequest,
    },
};
use entity::sea_orm_active_enums::{ApplicationStatus, JobType};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::create_job_with_poster, job::JobFactory},
};

mod applications;
mod get_active_paginated;
mod update;
