pub const LOGIN_PATH: &str = "/login";

/// Where the client sends the browser after a 401.
pub trait Navigator {
    fn redirect_to_login(&self);
}

/// Hard navigation through `window.location`, which also drops all
/// in-memory page state.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect_to_login(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        // Reloading the login page would wipe the error the form is about to show.
        if location.pathname().ok().as_deref() == Some(LOGIN_PATH) {
            return;
        }
        if let Err(e) = location.set_href(LOGIN_PATH) {
            log::error!("Failed to redirect to login: {:?}", e);
        }
    }
}
