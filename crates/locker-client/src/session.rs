use std::sync::Arc;

use locker_types::Session;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use tracing::warn;

use crate::error::ClientError;
use crate::storage::SessionStorage;

/// Storage key of the persisted sign-in record.
pub const SESSION_KEY: &str = "user";

/// Persisted session record plus the auth header derived from it.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
}

impl SessionStore {
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        Self {
            storage: Arc::new(storage),
        }
    }

    /// The stored session, if any. A record that no longer parses is dropped.
    pub fn current(&self) -> Option<Session> {
        let raw = match self.storage.get(SESSION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("failed to read session: {e}");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!("discarding unreadable session record: {e}");
                if let Err(e) = self.storage.remove(SESSION_KEY) {
                    warn!("failed to remove session record: {e}");
                }
                None
            }
        }
    }

    pub fn save(&self, session: &Session) -> Result<(), ClientError> {
        let raw = serde_json::to_string(session)?;
        self.storage.set(SESSION_KEY, &raw)
    }

    pub fn clear(&self) -> Result<(), ClientError> {
        self.storage.remove(SESSION_KEY)
    }

    /// `Authorization: Bearer <token>` when signed in, empty otherwise.
    pub fn auth_header(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let Some(session) = self.current().filter(|s| !s.token.is_empty()) else {
            return headers;
        };
        match HeaderValue::from_str(&session.bearer()) {
            Ok(value) => {
                headers.insert(AUTHORIZATION, value);
            }
            Err(e) => warn!("session token is not a valid header value: {e}"),
        }
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use locker_types::Role;

    fn session() -> Session {
        Session {
            token: "abc.def".into(),
            token_type: "Bearer".into(),
            id: 7,
            username: "asha".into(),
            email: "asha@example.com".into(),
            mobile_number: "9876543210".into(),
            full_name: "Asha Rao".into(),
            roles: vec![Role::User],
            email_verified: false,
            mobile_verified: false,
        }
    }

    #[test]
    fn empty_store_has_no_session_or_header() {
        let store = SessionStore::new(MemoryStorage::new());
        assert_eq!(store.current(), None);
        assert!(store.auth_header().is_empty());
    }

    #[test]
    fn saved_session_yields_bearer_header() {
        let store = SessionStore::new(MemoryStorage::new());
        store.save(&session()).unwrap();

        assert_eq!(store.current(), Some(session()));
        let headers = store.auth_header();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer abc.def");
    }

    #[test]
    fn clear_removes_session() {
        let store = SessionStore::new(MemoryStorage::new());
        store.save(&session()).unwrap();
        store.clear().unwrap();

        assert_eq!(store.current(), None);
        assert!(store.auth_header().is_empty());
    }

    #[test]
    fn clones_share_storage() {
        let store = SessionStore::new(MemoryStorage::new());
        let other = store.clone();
        store.save(&session()).unwrap();
        assert_eq!(other.current().map(|s| s.username), Some("asha".into()));
    }

    #[test]
    fn unreadable_record_is_discarded() {
        let storage = MemoryStorage::new();
        storage.set(SESSION_KEY, "{not json").unwrap();
        let store = SessionStore::new(storage.clone());

        assert_eq!(store.current(), None);
        assert_eq!(storage.get(SESSION_KEY).unwrap(), None);
    }
}
