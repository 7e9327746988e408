//! Member Row Component
//!
//! A draggable member entry with its status badge and delete button.

use leptos::prelude::*;

use crate::context::use_panel_context;
use crate::models::{status_class, status_label};

use leptos_dragdrop::{make_on_mousedown, DndSignals};

#[component]
pub fn MemberRow(member_id: u32, dnd: DndSignals) -> impl IntoView {
    let ctx = use_panel_context();

    let username = move || {
        ctx.state
            .with(|s| s.board.member(member_id).map(|m| m.username.clone()))
            .unwrap_or_default()
    };
    let completed = move || ctx.state.with(|s| s.board.member(member_id).map(|m| m.completed).unwrap_or(false));
    let pending = move || ctx.state.with(|s| s.is_pending(member_id));

    let row_class = move || {
        let mut c = String::from("member-item draggable");
        if dnd.dragging_id_read.get() == Some(member_id) { c.push_str(" dragging"); }
        if pending() { c.push_str(" pending"); }
        c
    };

    let toggle = move |_| {
        // The mouseup that ends a drag also clicks whatever is underneath
        if dnd.drag_just_ended_read.get_untracked() {
            return;
        }
        ctx.spawn(move |c| async move { c.toggle_status(member_id).await });
    };

    view! {
        <div class=row_class data-member-id=member_id on:mousedown=make_on_mousedown(dnd, member_id)>
            <span class="member-name">{username}</span>
            <span class=move || status_class(completed()) data-member-id=member_id on:click=toggle>
                {move || status_label(completed())}
            </span>
            <button
                class="btn btn-sm btn-link delete-member"
                on:click=move |_| ctx.spawn(move |c| async move { c.delete_member(member_id).await })
            >
                "×"
            </button>
        </div>
    }
}
