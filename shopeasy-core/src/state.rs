use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

/// Conversational state for a single user.
///
/// Not persisted anywhere; everything is volatile and lost on restart.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct UserState {
    pub user_id: String,
    pub last_intent: Option<String>,
    pub last_order_id: Option<String>,
    pub message_count: u64,
}

impl UserState {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Self::default()
        }
    }

    /// Record what a tool learned from the current message. Empty strings
    /// are treated as absent and never overwrite a stored value.
    ///
    /// Every tool invocation counts as a message, on top of the increment
    /// the processor applies after a completed turn.
    pub fn update(&mut self, intent: Option<&str>, order_id: Option<&str>) {
        if let Some(intent) = intent.filter(|value| !value.is_empty()) {
            self.last_intent = Some(intent.to_string());
        }
        if let Some(order_id) = order_id.filter(|value| !value.is_empty()) {
            self.last_order_id = Some(order_id.to_string());
        }
        self.message_count += 1;
    }
}

/// Shared handle to one user's record. Cloning shares the record; access
/// for the same user serializes through the inner mutex.
pub type UserStateHandle = Arc<Mutex<UserState>>;

/// Injectable in-memory store of per-user conversational state.
///
/// No eviction, no expiry, no size bound: unbounded growth is an accepted
/// limitation of the demo scope.
#[derive(Clone, Default)]
pub struct StateStore {
    users: Arc<Mutex<HashMap<String, UserStateHandle>>>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Existing handle for `user_id`, or a freshly inserted zero-valued
    /// record. Never fails; at most one record exists per user id.
    pub fn get_or_create(&self, user_id: &str) -> UserStateHandle {
        let mut users = lock(&self.users);
        users
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(UserState::new(user_id))))
            .clone()
    }

    /// Delete the record if present; no-op otherwise.
    pub fn remove(&self, user_id: &str) {
        lock(&self.users).remove(user_id);
    }

    /// Point-in-time copy of every tracked record, for diagnostics.
    /// Mutations after the call are not visible in the returned map.
    pub fn snapshot(&self) -> BTreeMap<String, UserState> {
        lock(&self.users)
            .iter()
            .map(|(user_id, handle)| (user_id.clone(), lock(handle).clone()))
            .collect()
    }
}

/// Lock a user record, recovering from poisoning.
pub fn lock_state(handle: &UserStateHandle) -> MutexGuard<'_, UserState> {
    lock(handle)
}

// A poisoned lock only means another request panicked mid-update; the state
// itself is still usable for a demo store, so recover the guard.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
