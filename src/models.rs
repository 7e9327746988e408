//! Frontend Models
//!
//! Presentational projections of the server-owned records.

/// Maximum members in a regular group (the ungrouped bucket has no limit)
pub const GROUP_CAPACITY: usize = 5;

/// A student entry inside a group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: u32,
    pub username: String,
    pub completed: bool,
}

/// A group of members, displayed as one card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: u32,
    pub name: String,
    pub is_ungrouped: bool,
    pub members: Vec<Member>,
}

impl Group {
    pub fn is_full(&self) -> bool {
        !self.is_ungrouped && self.members.len() >= GROUP_CAPACITY
    }

    pub fn completed_count(&self) -> usize {
        self.members.iter().filter(|m| m.completed).count()
    }

    /// `成员：3/5 | 完成：1/3`, or `成员：8 | 完成：1/8` for the uncapped bucket
    pub fn count_line(&self) -> String {
        let total = self.members.len();
        let completed = self.completed_count();
        if self.is_ungrouped {
            format!("成员：{} | 完成：{}/{}", total, completed, total)
        } else {
            format!("成员：{}/{} | 完成：{}/{}", total, GROUP_CAPACITY, completed, total)
        }
    }
}

/// Task form contents
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskDraft {
    pub title: String,
    pub content: String,
    /// Raw `datetime-local` value, empty when unset
    pub deadline: String,
}

/// Validated add-member request, produced by accepting the dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub group_id: u32,
    pub username: String,
}

/// Status badge label
pub fn status_label(completed: bool) -> &'static str {
    if completed { "已完成" } else { "未完成" }
}

/// Status badge class
pub fn status_class(completed: bool) -> &'static str {
    if completed { "badge status-badge bg-success" } else { "badge status-badge bg-secondary" }
}
