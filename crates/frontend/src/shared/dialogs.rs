//! Blocking browser dialogs used for confirmations and error reports.

/// `window.confirm`; `false` when no window is available.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn alert(message: &str) {
    if let Some(w) = web_sys::window() {
        let _ = w.alert_with_message(message);
    }
}

pub fn reload_page() {
    if let Some(w) = web_sys::window() {
        if let Err(e) = w.location().reload() {
            log::error!("Failed to reload page: {:?}", e);
        }
    }
}
