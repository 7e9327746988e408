//! Dialog Components
//!
//! Add-member, new-group and bulk-import dialogs. The add-member dialog
//! is open exactly while it holds an `AddMemberTicket`.

use leptos::prelude::*;

use crate::context::{use_panel_context, PanelDialog};

#[component]
pub fn AddMemberDialog() -> impl IntoView {
    let ctx = use_panel_context();
    let (name, set_name) = signal(String::new());

    let is_open = move || ctx.add_member.with(|t| t.is_some());
    let group_name = move || {
        ctx.add_member
            .with(|t| t.as_ref().map(|t| t.group_id()))
            .and_then(|id| ctx.state.with(|s| s.board.group(id).map(|g| g.name.clone())))
            .unwrap_or_default()
    };

    let save = move |_| {
        let mut ticket = None;
        ctx.add_member.update(|t| ticket = t.take());
        let Some(ticket) = ticket else { return };

        match ctx.controller().accept_add_member(ticket, &name.get_untracked()) {
            Ok(member) => {
                set_name.set(String::new());
                ctx.spawn(move |c| async move { c.add_member(member).await });
            }
            // Blank name: keep the dialog open
            Err(ticket) => ctx.add_member.set(Some(ticket)),
        }
    };

    let cancel = move |_| {
        ctx.add_member.set(None);
        set_name.set(String::new());
    };

    view! {
        <Show when=is_open>
            <div class="modal-backdrop">
                <div id="memberModal" class="modal-dialog">
                    <div class="modal-header">
                        <h5 class="modal-title">"添加成员：" {group_name}</h5>
                    </div>
                    <div class="modal-body">
                        <input
                            id="memberName"
                            class="form-control"
                            type="text"
                            placeholder="学生姓名"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="modal-footer">
                        <button class="btn btn-secondary" on:click=cancel>"取消"</button>
                        <button id="saveMember" class="btn btn-primary" on:click=save>"保存"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn GroupDialog() -> impl IntoView {
    let ctx = use_panel_context();
    let (name, set_name) = signal(String::new());

    let close = move || {
        ctx.dialog.set(None);
        set_name.set(String::new());
    };

    let save = move |_| {
        if let Some(name) = ctx.controller().accept_group_name(&name.get_untracked()) {
            close();
            ctx.spawn(move |c| async move { c.create_group(name).await });
        }
    };

    view! {
        <Show when=move || ctx.dialog.get() == Some(PanelDialog::CreateGroup)>
            <div class="modal-backdrop">
                <div id="groupModal" class="modal-dialog">
                    <div class="modal-header">
                        <h5 class="modal-title">"新建小组"</h5>
                    </div>
                    <div class="modal-body">
                        <input
                            class="form-control"
                            type="text"
                            placeholder="小组名称"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="modal-footer">
                        <button class="btn btn-secondary" on:click=move |_| close()>"取消"</button>
                        <button class="btn btn-primary" on:click=save>"创建"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn ImportDialog() -> impl IntoView {
    let ctx = use_panel_context();
    let (text, set_text) = signal(String::new());

    let close = move || {
        ctx.dialog.set(None);
        set_text.set(String::new());
    };

    let import = move |_| {
        if let Some(names) = ctx.controller().accept_import(&text.get_untracked()) {
            close();
            ctx.spawn(move |c| async move { c.import_members(names).await });
        }
    };

    view! {
        <Show when=move || ctx.dialog.get() == Some(PanelDialog::Import)>
            <div class="modal-backdrop">
                <div id="importModal" class="modal-dialog">
                    <div class="modal-header">
                        <h5 class="modal-title">"批量导入成员"</h5>
                    </div>
                    <div class="modal-body">
                        <textarea
                            class="form-control"
                            rows="10"
                            placeholder="每行一个学生姓名"
                            prop:value=move || text.get()
                            on:input=move |ev| set_text.set(event_target_value(&ev))
                        ></textarea>
                        <small class="form-text">"导入的成员会放入未分组"</small>
                    </div>
                    <div class="modal-footer">
                        <button class="btn btn-secondary" on:click=move |_| close()>"取消"</button>
                        <button class="btn btn-primary" on:click=import>"导入"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
