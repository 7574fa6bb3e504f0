use std::sync::Mutex;

use contracts::system::auth::TOKEN_STORAGE_KEY;
use web_sys::window;

pub(crate) fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Where the session token lives between requests and page loads.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Persists the token in `localStorage` under [`TOKEN_STORAGE_KEY`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokenStore;

impl TokenStore for LocalStorageTokenStore {
    fn get(&self) -> Option<String> {
        get_local_storage()?
            .get_item(TOKEN_STORAGE_KEY)
            .ok()?
            .filter(|token| !token.is_empty())
    }

    fn set(&self, token: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}

/// Process-local token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.lock().ok()?.clone()
    }

    fn set(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}
