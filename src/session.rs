use crate::model::{AuthResponse, Role, User};
use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::PathBuf,
    sync::{Arc, Mutex},
};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("authentication response did not include a token")]
    MissingToken,

    #[error("unable to persist session: {0}")]
    Storage(String),
}

pub trait SessionStore {
    fn load(&self) -> Option<StoredSession>;
    fn save(&self, session: &StoredSession) -> Result<(), Error>;
    fn clear(&self);
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore(Arc<Mutex<Option<StoredSession>>>);

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<StoredSession> {
        self.0.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn save(&self, session: &StoredSession) -> Result<(), Error> {
        *self.0.lock().unwrap_or_else(|e| e.into_inner()) = Some(session.clone());
        Ok(())
    }

    fn clear(&self) {
        *self.0.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }
}

/// Session kept as JSON on disk, used by the command line client.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }
}

impl SessionStore for FileStore {
    fn load(&self) -> Option<StoredSession> {
        let contents = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!("ignoring unreadable session file {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn save(&self, session: &StoredSession) -> Result<(), Error> {
        let contents =
            serde_json::to_string_pretty(session).map_err(|e| Error::Storage(e.to_string()))?;
        fs::write(&self.path, contents).map_err(|e| Error::Storage(e.to_string()))
    }

    fn clear(&self) {
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("unable to remove session file {}: {}", self.path.display(), e);
            }
        }
    }
}

#[cfg(feature = "web")]
mod web_only {
    use super::{Error, SessionStore, StoredSession};
    use gloo::storage::{LocalStorage, Storage};

    const SESSION_KEY: &str = "session";

    /// Session kept in the browser's local storage.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct LocalStorageStore;

    impl SessionStore for LocalStorageStore {
        fn load(&self) -> Option<StoredSession> {
            LocalStorage::get(SESSION_KEY).ok()
        }

        fn save(&self, session: &StoredSession) -> Result<(), Error> {
            LocalStorage::set(SESSION_KEY, session).map_err(|e| Error::Storage(e.to_string()))
        }

        fn clear(&self) {
            LocalStorage::delete(SESSION_KEY);
        }
    }
}

#[cfg(feature = "web")]
pub use web_only::LocalStorageStore;

#[derive(Deserialize)]
struct ExpiryClaims {
    #[serde(default)]
    exp: Option<i64>,
}

/// Reads `exp` from a JWT without checking its signature, the token is only
/// ever verified by the API.
pub fn token_expiry(token: &str) -> Result<Option<DateTime<Utc>>, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    let data = decode::<ExpiryClaims>(token, &DecodingKey::from_secret(&[]), &validation)?;

    Ok(data
        .claims
        .exp
        .and_then(|exp| DateTime::from_timestamp(exp, 0)))
}

#[derive(Clone, Debug, Default)]
pub struct Session<S> {
    store: S,
}

impl<S: SessionStore> Session<S> {
    pub fn new(store: S) -> Self {
        Session { store }
    }

    /// Stores the token and user returned by a login or registration.
    pub fn begin(&self, response: AuthResponse) -> Result<Option<User>, Error> {
        let token = response
            .token
            .filter(|token| !token.is_empty())
            .ok_or(Error::MissingToken)?;

        self.store.save(&StoredSession {
            token,
            user: response.user.clone(),
        })?;

        tracing::info!(
            "session started for {}",
            response
                .user
                .as_ref()
                .map(|user| user.email.as_str())
                .unwrap_or("guest")
        );

        Ok(response.user)
    }

    pub fn end(&self) {
        self.store.clear();
    }

    pub fn token(&self) -> Option<String> {
        self.store.load().map(|session| session.token)
    }

    pub fn user(&self) -> Option<User> {
        self.store.load().and_then(|session| session.user)
    }

    pub fn user_name(&self) -> String {
        self.user().map(|user| user.name).unwrap_or_default()
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.user(), Some(User { role: Role::Admin, .. }))
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated_at(Utc::now())
    }

    /// An expired token is dropped from the store. A token whose payload
    /// cannot be read is still considered a session.
    pub fn is_authenticated_at(&self, now: DateTime<Utc>) -> bool {
        let Some(session) = self.store.load() else {
            return false;
        };

        match token_expiry(&session.token) {
            Ok(Some(exp)) if exp < now => {
                tracing::info!("session token expired at {}", exp);
                self.store.clear();
                false
            }
            Ok(_) => true,
            Err(e) => {
                tracing::debug!("unable to read session token expiry: {}", e);
                !session.token.is_empty()
            }
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{admin_user, client_user, token_expiring_at, token_without_expiry};
    use chrono::Duration;
    use std::env;

    fn session_with(token: String, user: Option<User>) -> Session<MemoryStore> {
        let session = Session::new(MemoryStore::default());
        session
            .begin(AuthResponse {
                token: Some(token),
                user,
            })
            .unwrap();
        session
    }

    #[test]
    fn empty_store_is_not_authenticated() {
        let session = Session::new(MemoryStore::default());
        assert!(!session.is_authenticated());
        assert!(!session.is_admin());
        assert_eq!(session.user_name(), "");
    }

    #[test]
    fn valid_token_is_authenticated() {
        let now = Utc::now();
        let session = session_with(
            token_expiring_at(now + Duration::hours(1)),
            Some(client_user()),
        );

        assert!(session.is_authenticated_at(now));
        assert_eq!(session.user_name(), "Ana Souza");
        assert!(!session.is_admin());
    }

    #[test]
    fn expired_token_clears_store() {
        let now = Utc::now();
        let session = session_with(
            token_expiring_at(now - Duration::minutes(5)),
            Some(admin_user()),
        );

        assert!(!session.is_authenticated_at(now));
        assert!(session.token().is_none());
        assert!(session.user().is_none());
    }

    #[test]
    fn token_without_expiry_is_authenticated() {
        let session = session_with(token_without_expiry(), None);
        assert!(session.is_authenticated());
    }

    #[test]
    fn opaque_token_is_authenticated() {
        let session = session_with("not-a-jwt".to_owned(), None);
        assert!(session.is_authenticated());
    }

    #[test]
    fn admin_role() {
        let session = session_with(token_without_expiry(), Some(admin_user()));
        assert!(session.is_admin());
    }

    #[test]
    fn begin_requires_token() {
        let session = Session::new(MemoryStore::default());
        let result = session.begin(AuthResponse {
            token: None,
            user: Some(client_user()),
        });

        assert!(matches!(result, Err(Error::MissingToken)));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn end_clears_session() {
        let session = session_with(token_without_expiry(), Some(client_user()));
        session.end();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn file_store_round_trip() {
        let path = env::temp_dir().join(format!("salon-session-test-{}.json", std::process::id()));
        let store = FileStore::new(&path);
        let session = Session::new(store.clone());

        session
            .begin(AuthResponse {
                token: Some(token_without_expiry()),
                user: Some(client_user()),
            })
            .unwrap();

        assert_eq!(Session::new(FileStore::new(&path)).user(), Some(client_user()));

        session.end();
        assert!(store.load().is_none());
    }
}
