//! Group Board App
//!
//! Boots the panel over the server-rendered markup and lays out the
//! task form, toolbar, board and dialogs.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::board::Board;
use crate::commands::HttpBackend;
use crate::components::{AddMemberDialog, GroupBoard, GroupDialog, ImportDialog, TaskForm, Toolbar};
use crate::config::{PanelConfig, ROOT_ID};
use crate::context::PanelContext;
use crate::controller::Controller;
use crate::page::BrowserPage;
use crate::snapshot;
use crate::store::PanelState;

#[component]
pub fn App(board: Board, config: PanelConfig) -> impl IntoView {
    let state = RwSignal::new(PanelState::new(board));
    let controller = Controller::new(
        HttpBackend::new(config.api_base.clone()),
        BrowserPage,
        state,
        config.export_url.clone(),
    );

    // Provide context to all children
    provide_context(PanelContext::new(controller, state));

    let totals = move || {
        state.with(|s| {
            let members: usize = s.board.regular_groups().map(|g| g.members.len()).sum();
            let completed: usize = s.board.regular_groups().map(|g| g.completed_count()).sum();
            format!("已分组 {} 人，完成 {} 人", members, completed)
        })
    };

    view! {
        <div class="admin-panel">
            <TaskForm />
            <Toolbar />
            <p class="board-totals">{totals}</p>
            <GroupBoard />

            <AddMemberDialog />
            <GroupDialog />
            <ImportDialog />
        </div>
    }
}

/// Read the server markup under `#admin-root`, then mount the panel there
pub fn boot() {
    let root = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(ROOT_ID));
    let Some(root) = root else {
        log::error!("[BOOT] #{} not found, panel not mounted", ROOT_ID);
        return;
    };

    let config = PanelConfig::from_element(&root);
    let board = snapshot::read_board(&root);
    log::info!("[BOOT] api base {:?}, export {:?}", config.api_base, config.export_url);

    let root = match root.dyn_into::<web_sys::HtmlElement>() {
        Ok(root) => root,
        Err(_) => {
            log::error!("[BOOT] #{} is not an HTML element", ROOT_ID);
            return;
        }
    };
    root.set_inner_html("");
    leptos::mount::mount_to(root, move || view! { <App board=board config=config /> }).forget();
}
