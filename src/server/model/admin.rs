//! Admin profile and dashboard statistics models.

use crate::{
    model::admin::{
        AdminProfileDto, DashboardStatsDto, DonationTotalsDto, MentorshipCountsDto,
        UpdateAdminProfileDto, UserCountsDto,
    },
    server::model::{donation::cents_to_amount, normalize_optional},
};

#[derive(Debug, Clone, PartialEq)]
pub struct AdminProfile {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub department: Option<String>,
    pub designation: Option<String>,
    pub phone: Option<String>,
}

impl AdminProfile {
    pub fn from_entity(entity: entity::admin_profile::Model, user: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: user.name,
            email: user.email,
            department: entity.department,
            designation: entity.designation,
            phone: entity.phone,
        }
    }

    pub fn into_dto(self) -> AdminProfileDto {
        AdminProfileDto {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            email: self.email,
            department: self.department,
            designation: self.designation,
            phone: self.phone,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpsertAdminProfileParams {
    pub user_id: i32,
    pub department: Option<String>,
    pub designation: Option<String>,
    pub phone: Option<String>,
}

impl UpsertAdminProfileParams {
    pub fn from_dto(user_id: i32, dto: UpdateAdminProfileDto) -> Self {
        Self {
            user_id,
            department: normalize_optional(dto.department),
            designation: normalize_optional(dto.designation),
            phone: normalize_optional(dto.phone),
        }
    }
}

/// Counters shown on the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStats {
    pub total_users: u64,
    pub active_users: u64,
    pub admins: u64,
    pub alumni: u64,
    pub students: u64,
    pub active_jobs: u64,
    pub total_applications: u64,
    pub donation_count: u64,
    pub donation_total_cents: i64,
    pub mentorships_pending: u64,
    pub mentorships_accepted: u64,
    pub mentorships_rejected: u64,
    pub mentorships_completed: u64,
    pub upcoming_events: u64,
}

impl DashboardStats {
    pub fn into_dto(self) -> DashboardStatsDto {
        DashboardStatsDto {
            users: UserCountsDto {
                total: self.total_users,
                active: self.active_users,
                admins: self.admins,
                alumni: self.alumni,
                students: self.students,
            },
            active_jobs: self.active_jobs,
            total_applications: self.total_applications,
            donations: DonationTotalsDto {
                count: self.donation_count,
                total_amount: cents_to_amount(self.donation_total_cents),
            },
            mentorships: MentorshipCountsDto {
                pending: self.mentorships_pending,
                accepted: self.mentorships_accepted,
                rejected: self.mentorships_rejected,
                completed: self.mentorships_completed,
            },
            upcoming_events: self.upcoming_events,
        }
    }
}
