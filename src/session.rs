//! Per-client session state.
//!
//! A [`Session`] is constructed once per request context and owns its own
//! identifier and regeneration flag; there is no process-wide session truth.
//! The backing [`SessionStore`] maps identifiers to value maps and provides
//! the locking; the framework core only sees one session at a time.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

const AUTH_KEY: &str = "_authenticated";

fn new_session_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Mutable key/value store for a single client, with an authentication flag.
pub struct Session {
    id: String,
    previous_id: Option<String>,
    values: HashMap<String, Value>,
    regenerated: bool,
    fresh: bool,
}

impl Session {
    /// Starts a brand new session with a fresh identifier.
    pub fn new() -> Self {
        Self {
            id: new_session_id(),
            previous_id: None,
            values: HashMap::new(),
            regenerated: false,
            fresh: true,
        }
    }

    /// Restores a session previously persisted under `id`.
    pub fn restore(id: String, values: HashMap<String, Value>) -> Self {
        Self {
            id,
            previous_id: None,
            values,
            regenerated: false,
            fresh: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Typed lookup; `None` when the key is absent or holds another shape.
    pub fn get_as<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        self.get(name)
            .cloned()
            .and_then(|value| serde_json::from_value(value).ok())
    }

    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    pub fn remove(&mut self, name: &str) {
        self.values.remove(name);
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn values(&self) -> &HashMap<String, Value> {
        &self.values
    }

    /// Replaces the session identifier, at most once per session lifetime.
    /// Repeated calls keep the identifier from the first regeneration.
    pub fn regenerate(&mut self) {
        if !self.regenerated {
            self.previous_id = Some(std::mem::replace(&mut self.id, new_session_id()));
            self.regenerated = true;
        }
    }

    pub fn was_regenerated(&self) -> bool {
        self.regenerated
    }

    /// The identifier this session was restored under, if it has since been
    /// regenerated. The store drops the stale entry on persist.
    pub fn previous_id(&self) -> Option<&str> {
        self.previous_id.as_deref()
    }

    /// Whether the client must be told the (new) identifier.
    pub fn needs_cookie(&self) -> bool {
        self.fresh || self.regenerated
    }

    /// Sets the authentication flag. Regenerates the session identifier as a
    /// session-fixation mitigation; the regeneration happens at most once per
    /// session lifetime even if this is called repeatedly.
    pub fn set_authenticated(&mut self, authenticated: bool) {
        self.set(AUTH_KEY, Value::Bool(authenticated));
        self.regenerate();
    }

    /// Defaults to `false` when the flag was never set.
    pub fn is_authenticated(&self) -> bool {
        self.get(AUTH_KEY).and_then(Value::as_bool).unwrap_or(false)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory session backend mapping identifiers to value maps.
///
/// The mutex guards the map across concurrently handled connections; each
/// request loads its session up front and persists it after the response is
/// built, so two requests never share a live `Session` object.
pub struct SessionStore {
    sessions: Mutex<HashMap<String, HashMap<String, Value>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Restores the session for `id` or starts a new one when the identifier
    /// is absent or unknown.
    pub fn open(&self, id: Option<&str>) -> Session {
        if let Some(id) = id {
            let sessions = self.sessions.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(values) = sessions.get(id) {
                return Session::restore(id.to_string(), values.clone());
            }
        }

        Session::new()
    }

    /// Writes the session's values back under its current identifier and
    /// destroys the entry for a regenerated-away identifier.
    pub fn persist(&self, session: &Session) {
        let mut sessions = self.sessions.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(previous) = session.previous_id() {
            sessions.remove(previous);
        }

        sessions.insert(session.id().to_string(), session.values().clone());
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
