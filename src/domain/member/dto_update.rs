use chrono::NaiveDate;

use super::MemberStatus;
use crate::shared::Patch;

/// Partial update for a member. Only fields carrying a value are applied;
/// absent fields leave the stored record untouched. Identity fields (id,
/// created_at) are not patchable.
#[derive(Debug, Clone, Default)]
pub struct UpdateMemberPatch {
    pub first_name: Patch<String>,
    pub last_name: Patch<String>,
    pub email: Patch<String>,
    pub phone: Patch<String>,
    pub age: Patch<i32>,
    pub city: Patch<String>,
    pub status: Patch<MemberStatus>,
    pub join_date: Patch<NaiveDate>,
}

impl UpdateMemberPatch {
    /// True when no field carries a value, i.e. applying the patch would
    /// change nothing.
    pub fn is_empty(&self) -> bool {
        self.first_name.as_value().is_none()
            && self.last_name.as_value().is_none()
            && self.email.as_value().is_none()
            && self.phone.as_value().is_none()
            && self.age.as_value().is_none()
            && self.city.as_value().is_none()
            && self.status.as_value().is_none()
            && self.join_date.as_value().is_none()
    }
}
