//! Member DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidateEmail};

use crate::domain::{CreateMemberDto, ListMembersDto, Member, MemberStatus, UpdateMemberPatch};
use crate::shared::{PageInfo, Patch};

/// Member as serialized on the wire.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub age: i32,
    pub city: String,
    /// `active` or `inactive`
    pub status: String,
    /// ISO 8601 date, `YYYY-MM-DD`
    pub join_date: String,
    pub created_at: String,
}

impl From<Member> for MemberDto {
    fn from(m: Member) -> Self {
        Self {
            id: m.id,
            first_name: m.first_name,
            last_name: m.last_name,
            email: m.email,
            phone: m.phone,
            age: m.age,
            city: m.city,
            status: m.status.to_string(),
            join_date: m.join_date.format("%Y-%m-%d").to_string(),
            created_at: m.created_at.to_rfc3339(),
        }
    }
}

/// List response envelope: one page of members plus pagination metadata.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MembersPage {
    pub data: Vec<MemberDto>,
    pub pagination: PageInfo,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub last_name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub phone: String,
    #[validate(range(min = 1, max = 150, message = "must be between 1 and 150"))]
    pub age: i32,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub city: String,
    /// Defaults to `active` when omitted.
    #[schema(value_type = Option<String>, example = "active")]
    pub status: Option<MemberStatus>,
    /// Defaults to the creation date when omitted.
    pub join_date: Option<NaiveDate>,
}

impl From<CreateMemberRequest> for CreateMemberDto {
    fn from(r: CreateMemberRequest) -> Self {
        Self {
            first_name: r.first_name,
            last_name: r.last_name,
            email: r.email,
            phone: r.phone,
            age: r.age,
            city: r.city,
            status: r.status,
            join_date: r.join_date,
        }
    }
}

/// Partial update body. Every field is tri-state: an omitted field leaves
/// the stored value untouched; JSON `null` is rejected because no member
/// column is nullable.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateMemberRequest {
    #[schema(value_type = Option<String>)]
    pub first_name: Patch<String>,
    #[schema(value_type = Option<String>)]
    pub last_name: Patch<String>,
    #[schema(value_type = Option<String>)]
    pub email: Patch<String>,
    #[schema(value_type = Option<String>)]
    pub phone: Patch<String>,
    #[schema(value_type = Option<i32>)]
    pub age: Patch<i32>,
    #[schema(value_type = Option<String>)]
    pub city: Patch<String>,
    #[schema(value_type = Option<String>, example = "inactive")]
    pub status: Patch<MemberStatus>,
    #[schema(value_type = Option<String>, example = "2024-01-15")]
    pub join_date: Patch<NaiveDate>,
}

impl UpdateMemberRequest {
    /// Names of fields sent as explicit `null`.
    pub fn null_fields(&self) -> Vec<&'static str> {
        let mut nulls = Vec::new();
        if self.first_name.is_null() {
            nulls.push("firstName");
        }
        if self.last_name.is_null() {
            nulls.push("lastName");
        }
        if self.email.is_null() {
            nulls.push("email");
        }
        if self.phone.is_null() {
            nulls.push("phone");
        }
        if self.age.is_null() {
            nulls.push("age");
        }
        if self.city.is_null() {
            nulls.push("city");
        }
        if self.status.is_null() {
            nulls.push("status");
        }
        if self.join_date.is_null() {
            nulls.push("joinDate");
        }
        nulls
    }

    /// Validate supplied values against the same rules as creation.
    pub fn validate_fields(&self) -> Result<(), String> {
        for (name, value) in [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("phone", &self.phone),
            ("city", &self.city),
        ] {
            if let Some(v) = value.as_value() {
                if v.is_empty() {
                    return Err(format!("{}: must not be empty", name));
                }
            }
        }
        if let Some(email) = self.email.as_value() {
            if !email.validate_email() {
                return Err("email: must be a valid email address".to_string());
            }
        }
        if let Some(age) = self.age.as_value() {
            if !(1..=150).contains(age) {
                return Err("age: must be between 1 and 150".to_string());
            }
        }
        Ok(())
    }

    pub fn into_patch(self) -> UpdateMemberPatch {
        UpdateMemberPatch {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            age: self.age,
            city: self.city,
            status: self.status,
            join_date: self.join_date,
        }
    }
}

/// Raw list query parameters.
///
/// Numeric fields arrive as raw strings so malformed values can fall back
/// to their defaults instead of rejecting the request; the endpoint never
/// 400s over paging input.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListMembersParams {
    /// Page number, 1-based. Default: 1
    pub page: Option<String>,
    /// Page size. Default: 10
    pub limit: Option<String>,
    /// Substring match over firstName, lastName, email and city
    pub search: Option<String>,
    /// Sort column; unknown names fall back to `id`
    pub sort_by: Option<String>,
    /// `asc` or `desc` (case-sensitive). Default: `asc`
    pub sort_order: Option<String>,
}

impl ListMembersParams {
    pub fn into_query(self) -> ListMembersDto {
        ListMembersDto::from_raw(
            self.page.as_deref(),
            self.limit.as_deref(),
            self.search,
            self.sort_by.as_deref(),
            self.sort_order.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_fields_are_reported_by_wire_name() {
        let req: UpdateMemberRequest =
            serde_json::from_str(r#"{"firstName": null, "joinDate": null}"#).unwrap();
        assert_eq!(req.null_fields(), vec!["firstName", "joinDate"]);
    }

    #[test]
    fn patch_values_are_validated_like_create() {
        let req: UpdateMemberRequest = serde_json::from_str(r#"{"age": 200}"#).unwrap();
        assert!(req.validate_fields().is_err());

        let req: UpdateMemberRequest = serde_json::from_str(r#"{"email": "nope"}"#).unwrap();
        assert!(req.validate_fields().is_err());

        let req: UpdateMemberRequest = serde_json::from_str(r#"{"city": ""}"#).unwrap();
        assert!(req.validate_fields().is_err());

        let req: UpdateMemberRequest =
            serde_json::from_str(r#"{"email": "ok@example.com", "age": 30}"#).unwrap();
        assert!(req.validate_fields().is_ok());
    }

    #[test]
    fn member_dto_serializes_camel_case() {
        let member = Member {
            id: 1,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            phone: "0812345678".into(),
            age: 36,
            city: "London".into(),
            status: MemberStatus::Active,
            join_date: NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
            created_at: chrono::Utc::now(),
        };
        let json = serde_json::to_value(MemberDto::from(member)).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["joinDate"], "2023-05-01");
        assert_eq!(json["status"], "active");
    }
}
