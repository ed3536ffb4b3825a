//! Member API handlers
//!
//! Contains HTTP request handlers for member CRUD operations. Handlers stay
//! thin: extraction on the way in, the service does validation and error
//! classification, `AppError: IntoResponse` renders failures.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Serialize;

use crate::error::AppError;
use crate::members::{Member, MemberPayload, MemberService};

/// Message response
#[derive(Serialize)]
pub struct MessageResponse {
    /// Human-readable message
    pub message: String,
}

/// GET /api/members - List all members ordered by member_no
pub async fn list_members(
    State(service): State<MemberService>,
) -> Result<Json<Vec<Member>>, AppError> {
    let members = service.list().await?;
    Ok(Json(members))
}

/// GET /api/members/:id - Get a specific member
pub async fn get_member(
    State(service): State<MemberService>,
    Path(id): Path<i64>,
) -> Result<Json<Member>, AppError> {
    let member = service.get(id).await?;
    Ok(Json(member))
}

/// POST /api/members - Create a new member
pub async fn create_member(
    State(service): State<MemberService>,
    Json(payload): Json<MemberPayload>,
) -> Result<(StatusCode, Json<Member>), AppError> {
    let member = service.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// PUT /api/members/:id - Update a member (replaces both fields)
pub async fn update_member(
    State(service): State<MemberService>,
    Path(id): Path<i64>,
    Json(payload): Json<MemberPayload>,
) -> Result<Json<Member>, AppError> {
    let member = service.update(id, &payload).await?;
    Ok(Json(member))
}

/// DELETE /api/members/:id - Delete a member
pub async fn delete_member(
    State(service): State<MemberService>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    service.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Member deleted successfully".to_string(),
    }))
}
