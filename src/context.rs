//! Panel Context
//!
//! Shared state provided via Leptos Context API.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::HttpBackend;
use crate::controller::{AddMemberTicket, Controller};
use crate::page::BrowserPage;
use crate::store::PanelState;

pub type PanelController = Controller<HttpBackend, BrowserPage, RwSignal<PanelState>>;

/// Which of the simple dialogs is open
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelDialog {
    CreateGroup,
    Import,
}

/// Panel-wide handles provided via context
#[derive(Clone, Copy)]
pub struct PanelContext {
    controller: StoredValue<PanelController>,
    /// Board and in-flight members
    pub state: RwSignal<PanelState>,
    /// Ticket held while the add-member dialog is open
    pub add_member: RwSignal<Option<AddMemberTicket>>,
    pub dialog: RwSignal<Option<PanelDialog>>,
}

impl PanelContext {
    pub fn new(controller: PanelController, state: RwSignal<PanelState>) -> Self {
        Self {
            controller: StoredValue::new(controller),
            state,
            add_member: RwSignal::new(None),
            dialog: RwSignal::new(None),
        }
    }

    pub fn controller(&self) -> PanelController {
        self.controller.get_value()
    }

    /// Run a controller operation on the local task queue
    pub fn spawn<F, Fut>(&self, op: F)
    where
        F: FnOnce(PanelController) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(op(self.controller()));
    }
}

pub fn use_panel_context() -> PanelContext {
    use_context::<PanelContext>().expect("PanelContext should be provided")
}
