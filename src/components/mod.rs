//! UI Components
//!
//! Leptos components for the admin panel.

mod task_form;
mod toolbar;
mod group_board;
mod member_row;
mod dialogs;

pub use task_form::TaskForm;
pub use toolbar::Toolbar;
pub use group_board::GroupBoard;
pub use member_row::MemberRow;
pub use dialogs::{AddMemberDialog, GroupDialog, ImportDialog};
