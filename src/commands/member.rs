//! Member Commands
//!
//! All member endpoints answer with a `success` flag, so every call here
//! requires it.

use serde::Serialize;

use super::{ApiCall, Backend, Reply};
use crate::error::ApiResult;
use crate::models::{NewMember, GROUP_CAPACITY};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct AddMemberArgs<'a> {
    group_id: u32,
    username: &'a str,
}

#[derive(Serialize)]
struct MoveMemberArgs {
    member_id: u32,
    target_group_id: u32,
}

#[derive(Serialize)]
struct MemberStatusArgs {
    member_id: u32,
    status: bool,
}

#[derive(Serialize)]
struct MemberIdArgs {
    member_id: u32,
}

#[derive(Serialize)]
struct ImportMembersArgs<'a> {
    members: &'a [String],
}

#[derive(Serialize)]
struct AutoGroupArgs {
    members_per_group: usize,
}

// ========================
// Commands
// ========================

pub async fn add_member<B: Backend + ?Sized>(backend: &B, member: &NewMember) -> ApiResult<Reply> {
    let call = ApiCall::post("/api/members")
        .json(&AddMemberArgs { group_id: member.group_id, username: &member.username })?
        .fallback("添加失败")
        .requiring_success();
    backend.send(call).await
}

/// Set a member's group
pub async fn move_member<B: Backend + ?Sized>(backend: &B, member_id: u32, target_group_id: u32) -> ApiResult<Reply> {
    let call = ApiCall::post("/api/members/move")
        .json(&MoveMemberArgs { member_id, target_group_id })?
        .fallback("移动失败")
        .requiring_success();
    backend.send(call).await
}

pub async fn set_member_status<B: Backend + ?Sized>(backend: &B, member_id: u32, status: bool) -> ApiResult<Reply> {
    let call = ApiCall::post("/api/members/status")
        .json(&MemberStatusArgs { member_id, status })?
        .fallback("更新状态失败")
        .requiring_success();
    backend.send(call).await
}

pub async fn delete_member<B: Backend + ?Sized>(backend: &B, member_id: u32) -> ApiResult<Reply> {
    let call = ApiCall::post("/api/members/delete")
        .json(&MemberIdArgs { member_id })?
        .fallback("删除失败")
        .requiring_success();
    backend.send(call).await
}

/// Bulk-create members in the ungrouped bucket
pub async fn import_members<B: Backend + ?Sized>(backend: &B, names: &[String]) -> ApiResult<Reply> {
    let call = ApiCall::post("/api/members/import")
        .json(&ImportMembersArgs { members: names })?
        .fallback("导入失败")
        .requiring_success();
    backend.send(call).await
}

/// Spread ungrouped members over new groups of at most `GROUP_CAPACITY`
pub async fn auto_group<B: Backend + ?Sized>(backend: &B) -> ApiResult<Reply> {
    let call = ApiCall::post("/api/members/auto-group")
        .json(&AutoGroupArgs { members_per_group: GROUP_CAPACITY })?
        .fallback("分组失败")
        .requiring_success();
    backend.send(call).await
}
