//! Page Effects
//!
//! Blocking dialogs and navigation, behind a trait so the controller can
//! be driven without a browser.

pub trait Page {
    fn alert(&self, message: &str);
    /// `false` when the user cancels or no dialog can be shown
    fn confirm(&self, message: &str) -> bool;
    fn reload(&self);
    fn navigate(&self, url: &str);
}

/// `window.alert`, `window.confirm` and `window.location`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPage;

impl Page for BrowserPage {
    fn alert(&self, message: &str) {
        if let Some(win) = web_sys::window() {
            let _ = win.alert_with_message(message);
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|win| win.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn reload(&self) {
        if let Some(win) = web_sys::window() {
            if let Err(e) = win.location().reload() {
                log::error!("[PAGE] reload failed: {:?}", e);
            }
        }
    }

    fn navigate(&self, url: &str) {
        if let Some(win) = web_sys::window() {
            if let Err(e) = win.location().set_href(url) {
                log::error!("[PAGE] navigate to {} failed: {:?}", url, e);
            }
        }
    }
}
