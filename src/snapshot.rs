//! Server Markup Snapshot
//!
//! The server renders the board as HTML. At boot the data attributes are
//! read into a `Board` before the Leptos view replaces that markup.

use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::board::Board;
use crate::models::{Group, Member};

/// Class that marks the ungrouped bucket's container
const UNGROUPED_CLASS: &str = "ungrouped";
/// Present inside a member item when the member has completed the task
const COMPLETED_BADGE: &str = ".badge.bg-success";

fn parse_id(raw: Option<String>) -> Option<u32> {
    raw?.trim().parse().ok()
}

/// Build a member from its item's attributes. `data-username` wins over
/// the `.member-name` text; an item without a numeric id is dropped.
pub fn member_from_attrs(
    id: Option<String>,
    username: Option<String>,
    name_text: Option<String>,
    completed: bool,
) -> Option<Member> {
    let id = parse_id(id)?;
    let username = username
        .or(name_text)
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    Some(Member { id, username, completed })
}

pub fn group_from_attrs(
    id: Option<String>,
    name: Option<String>,
    is_ungrouped: bool,
    members: Vec<Member>,
) -> Option<Group> {
    Some(Group {
        id: parse_id(id)?,
        name: name.unwrap_or_default(),
        is_ungrouped,
        members,
    })
}

fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn read_member(el: &Element) -> Option<Member> {
    let name_text = el
        .query_selector(".member-name")
        .ok()
        .flatten()
        .and_then(|n| n.text_content());
    member_from_attrs(
        el.get_attribute("data-member-id"),
        el.get_attribute("data-username"),
        name_text,
        el.query_selector(COMPLETED_BADGE).ok().flatten().is_some(),
    )
}

fn read_group(el: &Element) -> Option<Group> {
    let members = query_all(el, ".member-item[data-member-id]")
        .iter()
        .filter_map(read_member)
        .collect();
    group_from_attrs(
        el.get_attribute("data-group-id"),
        el.get_attribute("data-group-name"),
        el.class_list().contains(UNGROUPED_CLASS),
        members,
    )
}

/// Read every `.member-container` under `root`. Malformed entries are
/// skipped with a warning.
pub fn read_board(root: &Element) -> Board {
    let containers = query_all(root, ".member-container");
    let total = containers.len();
    let groups: Vec<Group> = containers.iter().filter_map(read_group).collect();
    if groups.len() != total {
        log::warn!("[BOOT] skipped {} containers without a usable data-group-id", total - groups.len());
    }
    log::info!(
        "[BOOT] read {} groups, {} members",
        groups.len(),
        groups.iter().map(|g| g.members.len()).sum::<usize>()
    );
    Board::new(groups)
}
