use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Storage keys shared with the rest of the storefront.
pub mod keys {
    pub const ACCESS_TOKEN: &str = "access_token";
    pub const REFRESH_TOKEN: &str = "refresh_token";
    pub const ADMIN_LOGGED_IN: &str = "isAdminLoggedIn";
    pub const ADMIN_EMAIL: &str = "adminEmail";
}

/// Key/value persistence for session data (browser `localStorage` or memory).
pub trait TokenStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// `window.localStorage`. Every call is a no-op when storage is unavailable
/// (private mode, sandboxed iframes).
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl TokenStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                leptos::logging::warn!("[STORAGE] Failed to write key {}", key);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn default_storage() -> Rc<dyn TokenStorage> {
    Rc::new(LocalStorage)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_storage() -> Rc<dyn TokenStorage> {
    Rc::new(MemoryStorage::new())
}

/// Typed access to the session entries of a [`TokenStorage`].
#[derive(Clone)]
pub struct TokenStore {
    inner: Rc<dyn TokenStorage>,
}

impl TokenStore {
    pub fn new(inner: Rc<dyn TokenStorage>) -> Self {
        Self { inner }
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStorage::new()))
    }

    pub fn access_token(&self) -> Option<String> {
        self.inner
            .get(keys::ACCESS_TOKEN)
            .filter(|token| !token.is_empty())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.inner
            .get(keys::REFRESH_TOKEN)
            .filter(|token| !token.is_empty())
    }

    pub fn has_token(&self) -> bool {
        self.access_token().is_some()
    }

    pub fn save_tokens(&self, access: &str, refresh: Option<&str>) {
        self.inner.set(keys::ACCESS_TOKEN, access);
        if let Some(refresh) = refresh.filter(|r| !r.is_empty()) {
            self.inner.set(keys::REFRESH_TOKEN, refresh);
        }
    }

    pub fn clear_tokens(&self) {
        self.inner.remove(keys::ACCESS_TOKEN);
        self.inner.remove(keys::REFRESH_TOKEN);
    }

    pub fn mark_admin(&self, email: &str) {
        self.inner.set(keys::ADMIN_LOGGED_IN, "true");
        self.inner.set(keys::ADMIN_EMAIL, email);
    }

    pub fn admin_flagged(&self) -> bool {
        self.inner.get(keys::ADMIN_LOGGED_IN).as_deref() == Some("true")
    }

    pub fn admin_email(&self) -> Option<String> {
        self.inner.get(keys::ADMIN_EMAIL)
    }

    pub fn clear_admin(&self) {
        self.inner.remove(keys::ADMIN_LOGGED_IN);
        self.inner.remove(keys::ADMIN_EMAIL);
    }

    /// Removes everything the session ever writes.
    pub fn clear_all(&self) {
        self.clear_tokens();
        self.clear_admin();
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore")
            .field("has_token", &self.has_token())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_token_is_optional() {
        let store = TokenStore::in_memory();
        store.save_tokens("access-1", None);
        assert_eq!(store.access_token().as_deref(), Some("access-1"));
        assert_eq!(store.refresh_token(), None);

        store.save_tokens("access-2", Some("refresh-2"));
        assert_eq!(store.refresh_token().as_deref(), Some("refresh-2"));
    }

    #[test]
    fn clear_all_drops_tokens_and_admin_flags() {
        let store = TokenStore::in_memory();
        store.save_tokens("a", Some("r"));
        store.mark_admin("owner@cupcakery.test");
        assert!(store.admin_flagged());

        store.clear_all();
        assert!(!store.has_token());
        assert!(store.refresh_token().is_none());
        assert!(!store.admin_flagged());
        assert!(store.admin_email().is_none());
    }

    #[test]
    fn empty_token_counts_as_missing() {
        let store = TokenStore::in_memory();
        store.save_tokens("", None);
        assert!(!store.has_token());
    }
}
