//! Member domain model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Membership status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Active,
    Inactive,
}

impl Default for MemberStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl std::fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
        }
    }
}

impl MemberStatus {
    /// Parse the wire representation; anything other than the two known
    /// values is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

/// A person record as managed by this service.
///
/// `id` and `created_at` are server-assigned and immutable; `email` is
/// globally unique, enforced by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub age: i32,
    pub city: String,
    pub status: MemberStatus,
    pub join_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_display() {
        assert_eq!(MemberStatus::parse("active"), Some(MemberStatus::Active));
        assert_eq!(MemberStatus::parse("inactive"), Some(MemberStatus::Inactive));
        assert_eq!(MemberStatus::Active.to_string(), "active");
        assert_eq!(MemberStatus::Inactive.to_string(), "inactive");
    }

    #[test]
    fn status_rejects_unknown_values() {
        assert_eq!(MemberStatus::parse("Active"), None);
        assert_eq!(MemberStatus::parse(""), None);
        assert_eq!(MemberStatus::parse("disabled"), None);
    }
}
