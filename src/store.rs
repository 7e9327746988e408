//! Panel State Store
//!
//! The board as last confirmed by the server, plus which members have a
//! request outstanding.

use std::collections::BTreeSet;

use leptos::prelude::*;

use crate::board::Board;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PanelState {
    pub board: Board,
    /// Members with a move/status/delete request in flight
    pub in_flight: BTreeSet<u32>,
}

impl PanelState {
    pub fn new(board: Board) -> Self {
        Self { board, in_flight: BTreeSet::new() }
    }

    pub fn is_pending(&self, member_id: u32) -> bool {
        self.in_flight.contains(&member_id)
    }
}

/// Read/write access to the panel state
pub trait StateCell {
    fn read_state<R>(&self, f: impl FnOnce(&PanelState) -> R) -> R;
    fn write_state(&self, f: impl FnOnce(&mut PanelState));
}

impl StateCell for RwSignal<PanelState> {
    fn read_state<R>(&self, f: impl FnOnce(&PanelState) -> R) -> R {
        self.with_untracked(f)
    }

    fn write_state(&self, f: impl FnOnce(&mut PanelState)) {
        self.update(f);
    }
}

// ========================
// Store Helper Functions
// ========================

/// Mark a member busy. Returns false if it already was.
pub fn store_begin_request<S: StateCell>(state: &S, member_id: u32) -> bool {
    let busy = state.read_state(|s| s.is_pending(member_id));
    if !busy {
        state.write_state(|s| {
            s.in_flight.insert(member_id);
        });
    }
    !busy
}

pub fn store_end_request<S: StateCell>(state: &S, member_id: u32) {
    state.write_state(|s| {
        s.in_flight.remove(&member_id);
    });
}

pub fn store_move_member<S: StateCell>(state: &S, member_id: u32, target_group_id: u32) {
    state.write_state(|s| {
        if !s.board.apply_move(member_id, target_group_id) {
            log::warn!("[STORE] member {} or group {} vanished before move applied", member_id, target_group_id);
        }
    });
}

pub fn store_set_status<S: StateCell>(state: &S, member_id: u32, completed: bool) {
    state.write_state(|s| {
        s.board.set_status(member_id, completed);
    });
}

pub fn store_remove_member<S: StateCell>(state: &S, member_id: u32) {
    state.write_state(|s| {
        s.board.remove_member(member_id);
    });
}

pub fn store_rename_group<S: StateCell>(state: &S, group_id: u32, name: &str) {
    state.write_state(|s| {
        s.board.rename_group(group_id, name);
    });
}
