//! Member API Handlers

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use validator::Validate;

use super::merge::{apply_patch, apply_replace};
use crate::core::ServerState;
use crate::utils::extract::{IdPath, JsonBody, ValidatedJson};
use crate::utils::{AppError, AppResult};
use shared::models::{Member, MemberCreate, MemberPatch, MemberReplace};

/// GET /members - 获取所有会员
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Member>>> {
    let members = state.members.get_all().await?;
    Ok(Json(members))
}

/// GET /members/{id} - 获取单个会员
pub async fn get_by_id(
    State(state): State<ServerState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Member>> {
    let member = state
        .members
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::member_not_found(id))?;
    Ok(Json(member))
}

/// HEAD /members/{id} - 会员是否存在
pub async fn exists(
    State(state): State<ServerState>,
    IdPath(id): IdPath,
) -> AppResult<StatusCode> {
    if state.members.exists(id).await? {
        Ok(StatusCode::OK)
    } else {
        Err(AppError::member_not_found(id))
    }
}

/// POST /members - 创建会员
pub async fn create(
    State(state): State<ServerState>,
    ValidatedJson(payload): ValidatedJson<MemberCreate>,
) -> AppResult<impl IntoResponse> {
    let member = state.members.create(payload.into()).await?;
    let location = format!("/members/{}", member.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(member),
    ))
}

/// PUT /members/{id} - 整体更新会员
pub async fn update(
    State(state): State<ServerState>,
    IdPath(id): IdPath,
    ValidatedJson(payload): ValidatedJson<MemberReplace>,
) -> AppResult<StatusCode> {
    let mut member = state
        .members
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::member_not_found(id))?;

    apply_replace(&mut member, payload);
    save(&state, id, member).await
}

/// PATCH /members/{id} - 部分更新会员
pub async fn patch(
    State(state): State<ServerState>,
    IdPath(id): IdPath,
    JsonBody(payload): JsonBody<MemberPatch>,
) -> AppResult<StatusCode> {
    let mut member = state
        .members
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::member_not_found(id))?;

    apply_patch(&mut member, payload)?;
    member.validate()?;
    save(&state, id, member).await
}

/// DELETE /members/{id} - 删除会员
pub async fn delete(
    State(state): State<ServerState>,
    IdPath(id): IdPath,
) -> AppResult<StatusCode> {
    if state.members.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::member_not_found(id))
    }
}

/// 写入合并后的会员; 读取之后被删除时返回 404
async fn save(state: &ServerState, id: i64, member: Member) -> AppResult<StatusCode> {
    if state.members.update(id, member).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::member_not_found(id))
    }
}
