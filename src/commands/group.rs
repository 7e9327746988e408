//! Group Commands

use serde::Serialize;

use super::{ApiCall, Backend, Reply};
use crate::error::ApiResult;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct CreateGroupArgs<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct RenameGroupArgs<'a> {
    id: u32,
    name: &'a str,
}

// ========================
// Commands
// ========================

pub async fn reset_groups<B: Backend + ?Sized>(backend: &B) -> ApiResult<Reply> {
    backend.send(ApiCall::post("/api/groups/reset").fallback("重置失败")).await
}

pub async fn create_group<B: Backend + ?Sized>(backend: &B, name: &str) -> ApiResult<Reply> {
    let call = ApiCall::post("/api/groups")
        .json(&CreateGroupArgs { name })?
        .fallback("创建失败");
    backend.send(call).await
}

pub async fn rename_group<B: Backend + ?Sized>(backend: &B, id: u32, name: &str) -> ApiResult<Reply> {
    let call = ApiCall::put("/api/groups")
        .json(&RenameGroupArgs { id, name })?
        .fallback("更新失败");
    backend.send(call).await
}

pub async fn delete_group<B: Backend + ?Sized>(backend: &B, id: u32) -> ApiResult<Reply> {
    backend.send(ApiCall::delete(format!("/api/groups/{}", id)).fallback("删除失败")).await
}
