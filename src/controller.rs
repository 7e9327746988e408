//! UI Controller
//!
//! One method per user action on the admin page. Each method checks the
//! local rules, issues at most one request, and then either patches the
//! board with the confirmed result or reloads the page. Failures always
//! end in a blocking alert.

use crate::board::MoveRejection;
use crate::commands::{self, Backend};
use crate::error::ApiError;
use crate::models::{NewMember, TaskDraft};
use crate::page::Page;
use crate::store::{
    store_begin_request, store_end_request, store_move_member, store_remove_member,
    store_rename_group, store_set_status, StateCell,
};

const RESET_PROMPT: &str = "确定要重置所有分组吗？这将清除所有现有的分组信息。";
const DELETE_GROUP_PROMPT: &str = "确定要删除这个小组吗？";
const DELETE_MEMBER_PROMPT: &str = "确定要删除该成员吗？";
const AUTO_GROUP_PROMPT: &str = "确定要将未分组成员自动分组吗？";

/// Proof that the add-member dialog was opened for a group with room.
/// Consumed when the dialog is accepted.
#[derive(Debug, PartialEq, Eq)]
pub struct AddMemberTicket {
    group_id: u32,
}

impl AddMemberTicket {
    pub fn group_id(&self) -> u32 {
        self.group_id
    }
}

#[derive(Clone)]
pub struct Controller<B, P, S> {
    backend: B,
    page: P,
    state: S,
    export_url: String,
}

impl<B: Backend, P: Page, S: StateCell> Controller<B, P, S> {
    pub fn new(backend: B, page: P, state: S, export_url: impl Into<String>) -> Self {
        Self { backend, page, state, export_url: export_url.into() }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    #[cfg(test)]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[cfg(test)]
    pub fn page(&self) -> &P {
        &self.page
    }

    fn fail(&self, prefix: &str, err: &ApiError) {
        log::warn!("[PANEL] {}: {:?}", prefix, err);
        self.page.alert(&format!("{}: {}", prefix, err));
    }

    // ========================
    // Tasks
    // ========================

    pub async fn create_task(&self, draft: &TaskDraft) {
        match commands::create_task(&self.backend, draft).await {
            Ok(reply) => match reply.message() {
                Some(message) => {
                    log::info!("[TASK] {}", message);
                    self.page.reload();
                }
                None => log::warn!("[TASK] reply carried no message, staying on page"),
            },
            Err(e) => self.fail("发布作业失败", &e),
        }
    }

    // ========================
    // Groups
    // ========================

    /// Wipe all groups. The page reloads once the request settles either way.
    pub async fn reset_groups(&self) {
        if !self.page.confirm(RESET_PROMPT) {
            return;
        }
        if let Err(e) = commands::reset_groups(&self.backend).await {
            self.fail("重置分组失败", &e);
        }
        self.page.reload();
    }

    pub fn export_data(&self) {
        log::info!("[EXPORT] {}", self.export_url);
        self.page.navigate(&self.export_url);
    }

    /// Delete a group. The page reloads once the request settles either way.
    pub async fn delete_group(&self, group_id: u32) {
        if !self.page.confirm(DELETE_GROUP_PROMPT) {
            return;
        }
        if let Err(e) = commands::delete_group(&self.backend, group_id).await {
            self.fail("删除小组失败", &e);
        }
        self.page.reload();
    }

    /// Validate the new-group dialog
    pub fn accept_group_name(&self, name: &str) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            self.page.alert("请输入小组名称");
            return None;
        }
        Some(name.to_string())
    }

    pub async fn create_group(&self, name: String) {
        match commands::create_group(&self.backend, &name).await {
            Ok(reply) => {
                log::info!("[GROUP] created {:?} as {:?}", name, reply.id);
                self.page.reload();
            }
            Err(e) => self.fail("创建小组失败", &e),
        }
    }

    /// Commit an inline name edit. Blank or unchanged input sends nothing;
    /// the board keeps the last confirmed name unless the server accepts.
    pub async fn rename_group(&self, group_id: u32, draft: &str) {
        let Some(current) = self.state.read_state(|s| s.board.group(group_id).map(|g| g.name.clone())) else {
            log::warn!("[GROUP] rename of unknown group {}", group_id);
            return;
        };
        let name = draft.trim();
        if name.is_empty() || name == current {
            return;
        }
        match commands::rename_group(&self.backend, group_id, name).await {
            Ok(_) => store_rename_group(&self.state, group_id, name),
            Err(e) => self.fail("更新组名失败", &e),
        }
    }

    // ========================
    // Members
    // ========================

    /// Set a member's group, from a drop onto a group container
    pub async fn move_member(&self, member_id: u32, target_group_id: u32) {
        let plan = match self.state.read_state(|s| s.board.plan_move(member_id, target_group_id)) {
            Ok(plan) => plan,
            Err(rejection) => {
                self.reject_move(member_id, rejection);
                return;
            }
        };
        if !store_begin_request(&self.state, member_id) {
            log::warn!("[MOVE] member {} already has a request in flight", member_id);
            return;
        }
        let result = commands::move_member(&self.backend, member_id, target_group_id).await;
        store_end_request(&self.state, member_id);

        match result {
            Ok(_) => {
                log::info!("[MOVE] member {}: group {} -> {}", member_id, plan.source_group_id, plan.target_group_id);
                store_move_member(&self.state, member_id, target_group_id);
            }
            Err(e) => self.fail("移动成员失败", &e),
        }
    }

    fn reject_move(&self, member_id: u32, rejection: MoveRejection) {
        if rejection.is_silent() {
            log::debug!("[MOVE] member {} ignored: {}", member_id, rejection);
        } else {
            self.page.alert(&rejection.to_string());
        }
    }

    /// Flip a member between completed and incomplete
    pub async fn toggle_status(&self, member_id: u32) {
        let Some(current) = self.state.read_state(|s| s.board.member(member_id).map(|m| m.completed)) else {
            return;
        };
        if !store_begin_request(&self.state, member_id) {
            log::warn!("[STATUS] member {} already has a request in flight", member_id);
            return;
        }
        let result = commands::set_member_status(&self.backend, member_id, !current).await;
        store_end_request(&self.state, member_id);

        match result {
            Ok(_) => store_set_status(&self.state, member_id, !current),
            Err(e) => self.fail("更新状态失败", &e),
        }
    }

    pub async fn delete_member(&self, member_id: u32) {
        if !self.page.confirm(DELETE_MEMBER_PROMPT) {
            return;
        }
        if !store_begin_request(&self.state, member_id) {
            log::warn!("[DELETE] member {} already has a request in flight", member_id);
            return;
        }
        let result = commands::delete_member(&self.backend, member_id).await;
        store_end_request(&self.state, member_id);

        match result {
            Ok(_) => store_remove_member(&self.state, member_id),
            Err(e) => self.fail("删除成员失败", &e),
        }
    }

    /// Open the add-member dialog for a group, unless it is already full
    pub fn open_add_member(&self, group_id: u32) -> Option<AddMemberTicket> {
        let full = self.state.read_state(|s| s.board.group(group_id).map(|g| g.is_full()))?;
        if full {
            self.page.alert(&MoveRejection::TargetFull.to_string());
            return None;
        }
        Some(AddMemberTicket { group_id })
    }

    /// Validate the dialog input. On blank input the ticket is handed back
    /// so the dialog stays open.
    pub fn accept_add_member(&self, ticket: AddMemberTicket, username: &str) -> Result<NewMember, AddMemberTicket> {
        let username = username.trim();
        if username.is_empty() {
            self.page.alert("请输入学生姓名");
            return Err(ticket);
        }
        Ok(NewMember { group_id: ticket.group_id, username: username.to_string() })
    }

    pub async fn add_member(&self, member: NewMember) {
        match commands::add_member(&self.backend, &member).await {
            Ok(_) => self.page.reload(),
            Err(e) => {
                log::warn!("[ADD] {:?} into group {}: {:?}", member.username, member.group_id, e);
                self.page.alert(&e.to_string());
            }
        }
    }

    /// Split pasted names, one per line
    pub fn accept_import(&self, text: &str) -> Option<Vec<String>> {
        let names: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        if names.is_empty() {
            self.page.alert("请输入要导入的成员名单");
            return None;
        }
        Some(names)
    }

    pub async fn import_members(&self, names: Vec<String>) {
        match commands::import_members(&self.backend, &names).await {
            Ok(reply) => {
                let mut summary = reply.message().unwrap_or("导入完成").to_string();
                for error in &reply.errors {
                    summary.push('\n');
                    summary.push_str(error);
                }
                self.page.alert(&summary);
                self.page.reload();
            }
            Err(e) => self.fail("批量导入失败", &e),
        }
    }

    pub async fn auto_group(&self) {
        if !self.page.confirm(AUTO_GROUP_PROMPT) {
            return;
        }
        match commands::auto_group(&self.backend).await {
            Ok(reply) => {
                if let Some(message) = reply.message() {
                    self.page.alert(message);
                }
                self.page.reload();
            }
            Err(e) => self.fail("自动分组失败", &e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    use async_trait::async_trait;
    use futures::executor::block_on;
    use serde_json::json;

    use crate::board::tests::sample_board;
    use crate::board::Board;
    use crate::commands::{interpret, ApiCall, Method, Reply};
    use crate::error::ApiResult;
    use crate::store::tests::TestCell;

    /// Answers with queued (status, body) pairs, `{"success":true}` when empty
    #[derive(Default)]
    struct FakeBackend {
        calls: RefCell<Vec<ApiCall>>,
        replies: RefCell<VecDeque<(u16, &'static str)>>,
        offline: Cell<bool>,
    }

    impl FakeBackend {
        fn answer(self, status: u16, body: &'static str) -> Self {
            self.replies.borrow_mut().push_back((status, body));
            self
        }

        fn calls(&self) -> Vec<ApiCall> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl Backend for FakeBackend {
        async fn send(&self, call: ApiCall) -> ApiResult<Reply> {
            self.calls.borrow_mut().push(call.clone());
            if self.offline.get() {
                return Err(ApiError::Network("Failed to fetch".to_string()));
            }
            let (status, body) = self.replies.borrow_mut().pop_front().unwrap_or((200, r#"{"success":true}"#));
            interpret(status, body, call.fallback, call.requires_success)
        }
    }

    #[derive(Default)]
    struct FakePage {
        alerts: RefCell<Vec<String>>,
        confirms: RefCell<Vec<String>>,
        decline: Cell<bool>,
        reloads: Cell<u32>,
        visited: RefCell<Vec<String>>,
    }

    impl Page for FakePage {
        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }

        fn confirm(&self, message: &str) -> bool {
            self.confirms.borrow_mut().push(message.to_string());
            !self.decline.get()
        }

        fn reload(&self) {
            self.reloads.set(self.reloads.get() + 1);
        }

        fn navigate(&self, url: &str) {
            self.visited.borrow_mut().push(url.to_string());
        }
    }

    type TestController = Controller<FakeBackend, FakePage, TestCell>;

    fn controller_with(backend: FakeBackend, board: Board) -> TestController {
        Controller::new(backend, FakePage::default(), TestCell::with_board(board), "/api/export")
    }

    fn controller() -> TestController {
        controller_with(FakeBackend::default(), sample_board())
    }

    fn alerts(c: &TestController) -> Vec<String> {
        c.page().alerts.borrow().clone()
    }

    // ---- moves ----

    #[test]
    fn move_into_full_group_sends_nothing_and_alerts() {
        let c = controller();
        block_on(c.move_member(20, 1));

        assert!(c.backend().calls().is_empty());
        assert_eq!(alerts(&c), vec!["该小组已达到最大人数限制（5人）".to_string()]);
        assert_eq!(c.state().snapshot().board, sample_board());
    }

    #[test]
    fn move_within_group_is_ignored_quietly() {
        let c = controller();
        block_on(c.move_member(21, 2));

        assert!(c.backend().calls().is_empty());
        assert!(alerts(&c).is_empty());
        assert_eq!(c.state().snapshot().board, sample_board());
    }

    #[test]
    fn confirmed_move_updates_both_counts() {
        let c = controller();
        block_on(c.move_member(20, 9));

        let calls = c.backend().calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, Method::Post);
        assert_eq!(calls[0].path, "/api/members/move");
        assert_eq!(calls[0].body, Some(json!({"member_id": 20, "target_group_id": 9})));

        let state = c.state().snapshot();
        assert_eq!(state.board.group_of(20), Some(9));
        assert_eq!(state.board.group(2).unwrap().count_line(), "成员：2/5 | 完成：0/2");
        assert!(state.in_flight.is_empty());
    }

    #[test]
    fn failed_move_leaves_board_untouched() {
        let backend = FakeBackend::default().answer(400, r#"{"error":"目标组已满(最多5人)"}"#);
        let c = controller_with(backend, sample_board());
        block_on(c.move_member(90, 2));

        assert_eq!(alerts(&c), vec!["移动成员失败: 目标组已满(最多5人)".to_string()]);
        let state = c.state().snapshot();
        assert_eq!(state.board, sample_board());
        assert!(state.in_flight.is_empty());
    }

    #[test]
    fn member_with_request_in_flight_is_not_moved_again() {
        let c = controller();
        c.state().write_state(|s| {
            s.in_flight.insert(20);
        });
        block_on(c.move_member(20, 9));

        assert!(c.backend().calls().is_empty());
        assert_eq!(c.state().snapshot().board.group_of(20), Some(2));
    }

    // ---- status ----

    #[test]
    fn confirmed_toggle_flips_once() {
        let c = controller();
        block_on(c.toggle_status(21));

        let calls = c.backend().calls();
        assert_eq!(calls[0].path, "/api/members/status");
        assert_eq!(calls[0].body, Some(json!({"member_id": 21, "status": true})));

        let state = c.state().snapshot();
        let group = state.board.group(2).unwrap();
        assert!(state.board.member(21).unwrap().completed);
        assert_eq!(group.completed_count(), 1);
        assert_eq!(group.count_line(), "成员：3/5 | 完成：1/3");

        block_on(c.toggle_status(21));
        assert_eq!(c.backend().calls()[1].body, Some(json!({"member_id": 21, "status": false})));
        assert_eq!(c.state().snapshot().board.group(2).unwrap().completed_count(), 0);
    }

    #[test]
    fn rejected_toggle_alerts_with_server_error() {
        let backend = FakeBackend::default().answer(200, r#"{"success":false,"error":"not found"}"#);
        let c = controller_with(backend, sample_board());
        block_on(c.toggle_status(21));

        let shown = alerts(&c);
        assert_eq!(shown.len(), 1);
        assert!(shown[0].contains("not found"));
        assert!(!c.state().snapshot().board.member(21).unwrap().completed);
    }

    #[test]
    fn network_failure_releases_the_guard() {
        let backend = FakeBackend::default();
        backend.offline.set(true);
        let c = controller_with(backend, sample_board());
        block_on(c.toggle_status(21));

        assert_eq!(alerts(&c), vec!["更新状态失败: Failed to fetch".to_string()]);
        assert!(c.state().snapshot().in_flight.is_empty());
    }

    // ---- delete member ----

    #[test]
    fn confirmed_delete_removes_exactly_one() {
        let c = controller();
        block_on(c.delete_member(22));

        assert_eq!(c.backend().calls()[0].body, Some(json!({"member_id": 22})));
        let state = c.state().snapshot();
        assert!(state.board.member(22).is_none());
        assert_eq!(state.board.group(2).unwrap().members.len(), 2);
    }

    #[test]
    fn declined_delete_sends_nothing() {
        let c = controller();
        c.page().decline.set(true);
        block_on(c.delete_member(22));

        assert!(c.backend().calls().is_empty());
        assert_eq!(c.page().confirms.borrow().as_slice(), ["确定要删除该成员吗？".to_string()]);
    }

    #[test]
    fn delete_without_success_flag_keeps_member() {
        let backend = FakeBackend::default().answer(404, r#"{"error":"成员不存在"}"#);
        let c = controller_with(backend, sample_board());
        block_on(c.delete_member(22));

        assert_eq!(alerts(&c), vec!["删除成员失败: 成员不存在".to_string()]);
        assert!(c.state().snapshot().board.member(22).is_some());
    }

    // ---- rename ----

    #[test]
    fn blank_rename_keeps_name_without_request() {
        let c = controller();
        block_on(c.rename_group(2, "   "));

        assert!(c.backend().calls().is_empty());
        assert_eq!(c.state().snapshot().board.group(2).unwrap().name, "第2组");
    }

    #[test]
    fn unchanged_rename_sends_nothing() {
        let c = controller();
        block_on(c.rename_group(2, " 第2组 "));
        assert!(c.backend().calls().is_empty());
    }

    #[test]
    fn rename_is_trimmed_and_applied_after_confirmation() {
        let backend = FakeBackend::default().answer(200, r#"{"message":"Group updated successfully"}"#);
        let c = controller_with(backend, sample_board());
        block_on(c.rename_group(2, "  火箭队 "));

        let calls = c.backend().calls();
        assert_eq!(calls[0].method, Method::Put);
        assert_eq!(calls[0].body, Some(json!({"id": 2, "name": "火箭队"})));
        assert_eq!(c.state().snapshot().board.group(2).unwrap().name, "火箭队");
    }

    #[test]
    fn failed_rename_keeps_confirmed_name() {
        let backend = FakeBackend::default().answer(403, r#"{"error":"Unauthorized"}"#);
        let c = controller_with(backend, sample_board());
        block_on(c.rename_group(2, "火箭队"));

        assert_eq!(alerts(&c), vec!["更新组名失败: Unauthorized".to_string()]);
        assert_eq!(c.state().snapshot().board.group(2).unwrap().name, "第2组");
    }

    // ---- tasks, reset, export, delete group ----

    #[test]
    fn task_with_message_reloads() {
        let backend = FakeBackend::default().answer(200, r#"{"message":"created"}"#);
        let c = controller_with(backend, sample_board());
        let draft = TaskDraft {
            title: "第一周作业".to_string(),
            content: "<p>阅读第一章</p>".to_string(),
            deadline: String::new(),
        };
        block_on(c.create_task(&draft));

        assert_eq!(c.page().reloads.get(), 1);
        assert_eq!(
            c.backend().calls()[0].body,
            Some(json!({"title": "第一周作业", "content": "<p>阅读第一章</p>", "deadline": null}))
        );
    }

    #[test]
    fn task_failure_alerts_instead_of_reloading() {
        let backend = FakeBackend::default().answer(400, r#"{"error":"标题和内容不能为空"}"#);
        let c = controller_with(backend, sample_board());
        let draft = TaskDraft { deadline: "2026-10-20T18:00".to_string(), ..TaskDraft::default() };
        block_on(c.create_task(&draft));

        assert_eq!(c.page().reloads.get(), 0);
        assert_eq!(alerts(&c), vec!["发布作业失败: 标题和内容不能为空".to_string()]);
        assert_eq!(c.backend().calls()[0].body.as_ref().unwrap()["deadline"], json!("2026-10-20T18:00"));
    }

    #[test]
    fn reset_reloads_even_when_it_fails() {
        let backend = FakeBackend::default().answer(500, r#"{"error":"db locked"}"#);
        let c = controller_with(backend, sample_board());
        block_on(c.reset_groups());

        assert_eq!(c.backend().calls()[0].path, "/api/groups/reset");
        assert_eq!(c.backend().calls()[0].body, None);
        assert_eq!(alerts(&c), vec!["重置分组失败: db locked".to_string()]);
        assert_eq!(c.page().reloads.get(), 1);
    }

    #[test]
    fn declined_reset_does_nothing() {
        let c = controller();
        c.page().decline.set(true);
        block_on(c.reset_groups());

        assert!(c.backend().calls().is_empty());
        assert_eq!(c.page().reloads.get(), 0);
    }

    #[test]
    fn delete_group_uses_path_id_and_reloads() {
        let backend = FakeBackend::default().answer(200, r#"{"message":"Group deleted successfully"}"#);
        let c = controller_with(backend, sample_board());
        block_on(c.delete_group(2));

        let calls = c.backend().calls();
        assert_eq!(calls[0].method, Method::Delete);
        assert_eq!(calls[0].path, "/api/groups/2");
        assert_eq!(c.page().reloads.get(), 1);
    }

    #[test]
    fn export_navigates_without_request() {
        let c = controller();
        c.export_data();

        assert!(c.backend().calls().is_empty());
        assert_eq!(c.page().visited.borrow().as_slice(), ["/api/export".to_string()]);
    }

    // ---- add member dialog ----

    #[test]
    fn full_group_cannot_open_dialog() {
        let c = controller();
        assert!(c.open_add_member(1).is_none());
        assert_eq!(alerts(&c), vec!["该小组已达到最大人数限制（5人）".to_string()]);
        assert!(c.open_add_member(404).is_none());
    }

    #[test]
    fn blank_name_hands_ticket_back() {
        let c = controller();
        let ticket = c.open_add_member(2).expect("group 2 has room");
        let ticket = c.accept_add_member(ticket, "  ").unwrap_err();
        assert_eq!(ticket.group_id(), 2);
        assert_eq!(alerts(&c), vec!["请输入学生姓名".to_string()]);

        let member = c.accept_add_member(ticket, " 王五 ").unwrap();
        assert_eq!(member, NewMember { group_id: 2, username: "王五".to_string() });
    }

    #[test]
    fn added_member_reloads_page() {
        let c = controller();
        block_on(c.add_member(NewMember { group_id: 2, username: "王五".to_string() }));

        assert_eq!(c.backend().calls()[0].body, Some(json!({"group_id": 2, "username": "王五"})));
        assert_eq!(c.page().reloads.get(), 1);
    }

    #[test]
    fn add_member_failure_shows_bare_server_message() {
        let backend = FakeBackend::default().answer(400, r#"{"success":false,"error":"该用户已在其他组中"}"#);
        let c = controller_with(backend, sample_board());
        block_on(c.add_member(NewMember { group_id: 2, username: "张三".to_string() }));

        assert_eq!(alerts(&c), vec!["该用户已在其他组中".to_string()]);
        assert_eq!(c.page().reloads.get(), 0);
    }

    // ---- group dialog, import, auto-group ----

    #[test]
    fn blank_group_name_is_refused() {
        let c = controller();
        assert_eq!(c.accept_group_name(" "), None);
        assert_eq!(c.accept_group_name(" 第13组 "), Some("第13组".to_string()));

        let backend = FakeBackend::default().answer(200, r#"{"id":14,"message":"Group created successfully"}"#);
        let c = controller_with(backend, sample_board());
        block_on(c.create_group("第13组".to_string()));
        assert_eq!(c.backend().calls()[0].body, Some(json!({"name": "第13组"})));
        assert_eq!(c.page().reloads.get(), 1);
    }

    #[test]
    fn import_lists_server_errors_then_reloads() {
        let backend = FakeBackend::default().answer(
            200,
            r#"{"success":true,"message":"成功导入 1 名成员，但有 1 个错误","errors":["用户 张三 已在其他组中"]}"#,
        );
        let c = controller_with(backend, sample_board());
        let names = c.accept_import("张三\n\n  李四  \n").unwrap();
        assert_eq!(names, vec!["张三".to_string(), "李四".to_string()]);

        block_on(c.import_members(names));
        assert_eq!(c.backend().calls()[0].body, Some(json!({"members": ["张三", "李四"]})));
        assert_eq!(alerts(&c), vec!["成功导入 1 名成员，但有 1 个错误\n用户 张三 已在其他组中".to_string()]);
        assert_eq!(c.page().reloads.get(), 1);
    }

    #[test]
    fn empty_import_is_refused() {
        let c = controller();
        assert_eq!(c.accept_import(" \n \n"), None);
        assert_eq!(alerts(&c), vec!["请输入要导入的成员名单".to_string()]);
    }

    #[test]
    fn auto_group_failure_does_not_reload() {
        let backend = FakeBackend::default().answer(400, r#"{"error":"没有未分组的成员"}"#);
        let c = controller_with(backend, sample_board());
        block_on(c.auto_group());

        assert_eq!(c.backend().calls()[0].body, Some(json!({"members_per_group": 5})));
        assert_eq!(alerts(&c), vec!["自动分组失败: 没有未分组的成员".to_string()]);
        assert_eq!(c.page().reloads.get(), 0);
    }
}
