use chrono::NaiveDate;

use super::MemberStatus;

/// Input for creating a member. Field validation happens at the HTTP
/// boundary; optional fields get their documented defaults at insert time
/// (`status` → active, `join_date` → creation date).
#[derive(Debug, Clone)]
pub struct CreateMemberDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub age: i32,
    pub city: String,
    pub status: Option<MemberStatus>,
    pub join_date: Option<NaiveDate>,
}
