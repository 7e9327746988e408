//! Task Form Component
//!
//! Publishes a task: title, rich-text content and optional deadline.

use leptos::prelude::*;

use crate::context::use_panel_context;
use crate::editor;
use crate::models::TaskDraft;

/// Id of the textarea the rich-text editor binds to
const CONTENT_ID: &str = "content";

#[component]
pub fn TaskForm() -> impl IntoView {
    let ctx = use_panel_context();

    let (title, set_title) = signal(String::new());
    let (content, set_content) = signal(String::new());
    let (deadline, set_deadline) = signal(String::new());

    // Runs once after the textarea is in the DOM
    Effect::new(move |_| editor::attach(CONTENT_ID));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = TaskDraft {
            title: title.get_untracked(),
            content: editor::content(CONTENT_ID).unwrap_or_else(|| content.get_untracked()),
            deadline: deadline.get_untracked(),
        };
        ctx.spawn(move |c| async move { c.create_task(&draft).await });
    };

    view! {
        <form id="taskForm" class="task-form card" on:submit=submit>
            <div class="card-header">"发布作业"</div>
            <div class="card-body">
                <input
                    id="title"
                    class="form-control"
                    type="text"
                    placeholder="作业标题"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <textarea
                    id=CONTENT_ID
                    class="form-control"
                    prop:value=move || content.get()
                    on:input=move |ev| set_content.set(event_target_value(&ev))
                ></textarea>
                <label for="deadline">"截止时间"</label>
                <input
                    id="deadline"
                    class="form-control"
                    type="datetime-local"
                    prop:value=move || deadline.get()
                    on:input=move |ev| set_deadline.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary">"发布"</button>
            </div>
        </form>
    }
}
