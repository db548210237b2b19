//! # Session
//!
//! Client-local session state: one "logged in" flag plus the captured
//! token, persisted as a two-field JSON blob and written through
//! synchronously on every mutation. A single manager instance is injected
//! into everything that reads or writes the session (guard, query handler),
//! so there is exactly one owner of the storage file.

use std::{
    collections::HashMap,
    fs,
    path::PathBuf,
    sync::Mutex,
};

use tracing::warn;

const LOGGED_IN_FIELD: &str = "loggedIn";
const TOKEN_FIELD: &str = "token";

const TOKEN_PARAM: &str = "id_token";

#[derive(Default)]
struct SessionState {
    logged_in: bool,
    token: Option<String>,
}

pub struct SessionManager {
    path: PathBuf,
    state: Mutex<SessionState>,
}

impl SessionManager {
    /// Loads the persisted session, defaulting to logged-out when the file
    /// is missing or unreadable.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let fields: HashMap<String, String> = fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_else(|| {
                warn!("No session at {}, starting logged out", path.display());
                HashMap::new()
            });

        let state = SessionState {
            logged_in: fields.get(LOGGED_IN_FIELD).map(String::as_str) == Some("true"),
            token: fields.get(TOKEN_FIELD).cloned(),
        };

        Self {
            path,
            state: Mutex::new(state),
        }
    }

    /// Captures an `id_token` out of an identity-provider redirect fragment
    /// (`&`-delimited `key=value` pairs) and returns the resulting logged-in
    /// flag. With several `id_token` parameters the last one wins; an absent
    /// or unrecognized fragment leaves the session untouched. Token values
    /// are kept verbatim, split on the first `=` only.
    pub fn capture_from_fragment(&self, fragment: Option<&str>) -> bool {
        let mut state = self.state.lock().unwrap();

        if let Some(fragment) = fragment {
            let mut captured = false;

            for param in fragment.split('&') {
                if let Some((name, value)) = param.split_once('=') {
                    if name == TOKEN_PARAM {
                        state.logged_in = true;
                        state.token = Some(value.to_string());
                        captured = true;
                    }
                }
            }

            if captured {
                self.persist(&state);
            }
        }

        state.logged_in
    }

    /// Resets to the default session and removes the stored token.
    pub fn logout(&self) -> bool {
        let mut state = self.state.lock().unwrap();

        state.logged_in = false;
        state.token = None;
        self.persist(&state);

        true
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.lock().unwrap().logged_in
    }

    pub fn token(&self) -> Option<String> {
        self.state.lock().unwrap().token.clone()
    }

    fn persist(&self, state: &SessionState) {
        let mut fields = HashMap::new();
        fields.insert(LOGGED_IN_FIELD, state.logged_in.to_string());

        if let Some(token) = &state.token {
            fields.insert(TOKEN_FIELD, token.clone());
        }

        let blob = serde_json::to_string(&fields).expect("Session state must serialize");

        // A failed write must not panic out through the guard's navigation
        // path; the in-memory session stays authoritative for this process.
        if let Err(e) = fs::write(&self.path, blob) {
            warn!("Failed to persist session to {}: {e}", self.path.display());
        }
    }
}
