//! Member management handlers
//!
//! Thin wrappers over `MemberService`: parameter normalization and the
//! domain-error → status-code mapping happen here, business logic does not.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    CreateMemberRequest, ListMembersParams, MemberDto, MembersPage, UpdateMemberRequest,
};
use crate::application::members::{parse_member_id, MemberService};
use crate::infrastructure::database::repositories::MemberRepository;
use crate::interfaces::http::common::{error_response, DeleteAck, ErrorBody, ValidatedJson};

/// Member handler state — concrete over `MemberRepository` for Axum
/// compatibility.
#[derive(Clone)]
pub struct MemberHandlerState {
    pub members: Arc<MemberService<MemberRepository>>,
}

#[utoipa::path(
    get,
    path = "/members",
    tag = "Members",
    params(ListMembersParams),
    responses(
        (status = 200, description = "One page of members with pagination metadata", body = MembersPage)
    )
)]
pub async fn list_members(
    State(state): State<MemberHandlerState>,
    Query(params): Query<ListMembersParams>,
) -> Result<Json<MembersPage>, (StatusCode, Json<ErrorBody>)> {
    let dto = params.into_query();

    match state.members.list_members(dto).await {
        Ok(result) => {
            let data: Vec<MemberDto> = result.items.into_iter().map(MemberDto::from).collect();
            Ok(Json(MembersPage {
                data,
                pagination: result.pagination,
            }))
        }
        Err(e) => Err(error_response(&e)),
    }
}

#[utoipa::path(
    get,
    path = "/members/{id}",
    tag = "Members",
    params(("id" = String, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Member details", body = MemberDto),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn get_member(
    State(state): State<MemberHandlerState>,
    Path(raw_id): Path<String>,
) -> Result<Json<MemberDto>, (StatusCode, Json<ErrorBody>)> {
    let id = parse_member_id(&raw_id).map_err(|e| error_response(&e))?;

    match state.members.get_member(id).await {
        Ok(Some(member)) => Ok(Json(MemberDto::from(member))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorBody::new(format!("Member with id={} not found", id))),
        )),
        Err(e) => Err(error_response(&e)),
    }
}

#[utoipa::path(
    post,
    path = "/members",
    tag = "Members",
    request_body = CreateMemberRequest,
    responses(
        (status = 201, description = "Member created", body = MemberDto),
        (status = 409, description = "Email already exists", body = ErrorBody),
        (status = 422, description = "Validation error", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn create_member(
    State(state): State<MemberHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateMemberRequest>,
) -> Result<(StatusCode, Json<MemberDto>), (StatusCode, Json<ErrorBody>)> {
    match state.members.create_member(request.into()).await {
        Ok(member) => Ok((StatusCode::CREATED, Json(MemberDto::from(member)))),
        Err(e) => Err(error_response(&e)),
    }
}

#[utoipa::path(
    patch,
    path = "/members/{id}",
    tag = "Members",
    params(("id" = String, Path, description = "Member ID")),
    request_body = UpdateMemberRequest,
    responses(
        (status = 200, description = "Member updated", body = MemberDto),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody),
        (status = 409, description = "Email already exists", body = ErrorBody),
        (status = 422, description = "Validation error", body = ErrorBody)
    )
)]
pub async fn update_member(
    State(state): State<MemberHandlerState>,
    Path(raw_id): Path<String>,
    Json(request): Json<UpdateMemberRequest>,
) -> Result<Json<MemberDto>, (StatusCode, Json<ErrorBody>)> {
    let id = parse_member_id(&raw_id).map_err(|e| error_response(&e))?;

    // No member column is nullable; an explicit null is a caller mistake,
    // not a "clear this field" instruction.
    let nulls = request.null_fields();
    if !nulls.is_empty() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorBody::new(format!(
                "{}: must not be null",
                nulls.join(", ")
            ))),
        ));
    }

    if let Err(message) = request.validate_fields() {
        return Err((StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorBody::new(message))));
    }

    match state.members.update_member(id, request.into_patch()).await {
        Ok(Some(member)) => Ok(Json(MemberDto::from(member))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorBody::new(format!("Member with id={} not found", id))),
        )),
        Err(e) => Err(error_response(&e)),
    }
}

#[utoipa::path(
    delete,
    path = "/members/{id}",
    tag = "Members",
    params(("id" = String, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Member deleted", body = DeleteAck),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn delete_member(
    State(state): State<MemberHandlerState>,
    Path(raw_id): Path<String>,
) -> Result<Json<DeleteAck>, (StatusCode, Json<ErrorBody>)> {
    let id = parse_member_id(&raw_id).map_err(|e| error_response(&e))?;

    match state.members.delete_member(id).await {
        Ok(()) => Ok(Json(DeleteAck::deleted("Member deleted successfully"))),
        Err(e) => Err(error_response(&e)),
    }
}

// ── Tests ──────────────────────────────────────────────────────
