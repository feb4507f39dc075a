pub mod auth;
pub mod instructors;
pub mod notifications;
pub mod plans;
pub mod reservations;
pub mod schedules;
pub mod students;

use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError};

use regex::Regex;

use crate::datastore::DataStore;

/// The one store instance shared by every usecase. Operations are
/// synchronous and run to completion under the lock, so a poisoned mutex
/// only means a previous panic mid-operation; we keep whatever state is
/// there rather than propagating the panic.
pub type SharedStore = Arc<Mutex<DataStore>>;

pub(crate) fn lock(store: &SharedStore) -> MutexGuard<'_, DataStore> {
    store.lock().unwrap_or_else(PoisonError::into_inner)
}

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

/// Shape check for email addresses: one `@`, a dotted domain, no whitespace.
pub(crate) fn email_is_valid(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
