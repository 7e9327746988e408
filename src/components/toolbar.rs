//! Board Toolbar
//!
//! Group-wide actions: new group, import, auto-group, reset, export.

use leptos::prelude::*;

use crate::context::{use_panel_context, PanelDialog};

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_panel_context();

    view! {
        <div class="panel-toolbar">
            <button class="btn btn-primary" on:click=move |_| ctx.dialog.set(Some(PanelDialog::CreateGroup))>
                "新建小组"
            </button>
            <button class="btn btn-outline-primary" on:click=move |_| ctx.dialog.set(Some(PanelDialog::Import))>
                "批量导入"
            </button>
            <button class="btn btn-outline-primary" on:click=move |_| ctx.spawn(|c| async move { c.auto_group().await })>
                "自动分组"
            </button>
            <button id="resetGroups" class="btn btn-danger" on:click=move |_| ctx.spawn(|c| async move { c.reset_groups().await })>
                "重置分组"
            </button>
            <button id="exportData" class="btn btn-success" on:click=move |_| ctx.controller().export_data()>
                "导出数据"
            </button>
        </div>
    }
}
