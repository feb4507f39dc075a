use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Key for the bearer-token string.
pub const TOKEN_KEY: &str = "boxtraining_token";
/// Key for the serialized logged-in user.
pub const USER_KEY: &str = "boxtraining_user";

/// String key/value session storage, the shape of the browser storage the
/// original kept its token and user record in.
pub trait SessionStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

#[derive(Clone, Default)]
pub struct MemorySessionStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySessionStore {
    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries().remove(key);
    }
}
