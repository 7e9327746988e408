//! Task Commands

use serde::Serialize;

use super::{ApiCall, Backend, Reply};
use crate::error::ApiResult;
use crate::models::TaskDraft;

#[derive(Serialize)]
struct CreateTaskArgs<'a> {
    title: &'a str,
    content: &'a str,
    deadline: Option<&'a str>,
}

/// Publish a task. Empty deadline goes out as `null`.
pub async fn create_task<B: Backend + ?Sized>(backend: &B, draft: &TaskDraft) -> ApiResult<Reply> {
    let deadline = Some(draft.deadline.trim()).filter(|d| !d.is_empty());
    let call = ApiCall::post("/api/tasks")
        .json(&CreateTaskArgs { title: &draft.title, content: &draft.content, deadline })?
        .fallback("发布失败");
    backend.send(call).await
}
