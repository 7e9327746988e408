//! Group Board Component
//!
//! One card per group with an inline name field, its count line and the
//! member list. Members are dragged between cards with leptos-dragdrop;
//! a drop becomes a single "set member's group" request.

use leptos::prelude::*;

use crate::components::MemberRow;
use crate::context::use_panel_context;
use crate::store::StateCell;

use leptos_dragdrop::*;

#[component]
pub fn GroupBoard() -> impl IntoView {
    let ctx = use_panel_context();

    let dnd = create_dnd_signals();
    bind_global_mouseup(dnd, move |member_id, target| {
        let DropTarget::Container(group_id) = target;
        log::debug!("[DND] drop member {} on group {}", member_id, group_id);
        ctx.spawn(move |c| async move { c.move_member(member_id, group_id).await });
    });

    let group_ids = move || ctx.state.with(|s| s.board.groups().iter().map(|g| g.id).collect::<Vec<_>>());

    view! {
        <div id="groupContainer" class="group-board">
            <For
                each=group_ids
                key=|id| *id
                children=move |group_id| view! { <GroupCard group_id=group_id dnd=dnd /> }
            />
        </div>
    }
}

#[component]
fn GroupCard(group_id: u32, dnd: DndSignals) -> impl IntoView {
    let ctx = use_panel_context();

    let is_ungrouped = ctx
        .state
        .with_untracked(|s| s.board.group(group_id).map(|g| g.is_ungrouped))
        .unwrap_or(false);
    let name = move || ctx.state.with(|s| s.board.group(group_id).map(|g| g.name.clone()).unwrap_or_default());
    let count_line = move || ctx.state.with(|s| s.board.group(group_id).map(|g| g.count_line()).unwrap_or_default());
    let is_full = move || ctx.state.with(|s| s.board.group(group_id).map(|g| g.is_full()).unwrap_or(false));
    let member_ids = move || {
        ctx.state.with(|s| {
            s.board
                .group(group_id)
                .map(|g| g.members.iter().map(|m| m.id).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };

    // Name field shows the draft while editing, the confirmed name otherwise
    let (draft, set_draft) = signal(
        ctx.state
            .with_untracked(|s| s.board.group(group_id).map(|g| g.name.clone()))
            .unwrap_or_default(),
    );
    let name_input = NodeRef::<leptos::html::Input>::new();

    let commit_name = move |_| {
        let text = draft.get_untracked();
        ctx.spawn(move |c| async move {
            c.rename_group(group_id, &text).await;
            if let Some(confirmed) = c.state().read_state(|s| s.board.group(group_id).map(|g| g.name.clone())) {
                set_draft.set(confirmed);
            }
        });
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            if let Some(input) = name_input.get() {
                let _ = input.blur();
            }
        }
    };

    let open_add_member = move |_| {
        if let Some(ticket) = ctx.controller().open_add_member(group_id) {
            ctx.add_member.set(Some(ticket));
        }
    };

    let container_class = move || {
        let mut c = String::from("member-container droppable");
        if is_ungrouped { c.push_str(" ungrouped"); }
        if is_full() { c.push_str(" full"); }
        if dnd.drop_target_read.get() == Some(DropTarget::Container(group_id)) { c.push_str(" drag-over"); }
        c
    };

    let card_class = if is_ungrouped { "card group-card ungrouped-card" } else { "card group-card" };

    view! {
        <div class=card_class data-group-id=group_id>
            <div class="card-header">
                {if is_ungrouped {
                    view! { <span class="group-title">{name}</span> }.into_any()
                } else {
                    view! {
                        <input
                            class="group-name"
                            type="text"
                            node_ref=name_input
                            prop:value=move || draft.get()
                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                            on:focus=move |_| {
                                if let Some(input) = name_input.get() {
                                    input.select();
                                }
                            }
                            on:blur=commit_name
                            on:keydown=on_keydown
                        />
                        <button
                            class="btn btn-sm btn-outline-danger delete-group"
                            on:click=move |_| ctx.spawn(move |c| async move { c.delete_group(group_id).await })
                        >
                            "删除"
                        </button>
                    }.into_any()
                }}
            </div>

            <div
                class=container_class
                data-group-id=group_id
                on:mouseenter=make_on_container_mouseenter(dnd, group_id)
                on:mouseleave=make_on_mouseleave(dnd)
            >
                <For
                    each=member_ids
                    key=|id| *id
                    children=move |member_id| view! { <MemberRow member_id=member_id dnd=dnd /> }
                />
            </div>

            <div class="card-footer">
                <span class="member-count">{count_line}</span>
                <button class="btn btn-sm btn-outline-primary add-member-btn" on:click=open_add_member>
                    "添加成员"
                </button>
            </div>
        </div>
    }
}
