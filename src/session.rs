//! Session flag store
//!
//! The presence of the flag is the whole of "authentication" here: no expiry,
//! no signature, no server check. It stands in for real credential
//! verification.

use parking_lot::Mutex;
use std::sync::Arc;

use crate::error::Result;
use crate::guard::post_login_destination;
use crate::routes::{Page, LOGIN_PATH};
use crate::storage::FlagStorage;

const FLAG_VALUE: &str = "true";

/// The redirect target owned by one mounted login screen.
///
/// The guard hands a target to the store just before sending the visitor to
/// `/login`; the login screen claims it when it mounts. Leaving that screen by
/// any route other than a successful login drops the visit and the target with
/// it, the same as history state on a plain navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginVisit {
    target: Option<String>,
}

impl LoginVisit {
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}

pub struct SessionStore {
    storage: Arc<dyn FlagStorage>,
    key: String,
    /// Target handed from the guard to the next login screen
    redirect_target: Mutex<Option<String>>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn FlagStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            redirect_target: Mutex::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.storage.read(&self.key).as_deref() == Some(FLAG_VALUE)
    }

    pub fn set_authenticated(&self) -> Result<()> {
        self.storage.write(&self.key, FLAG_VALUE)
    }

    pub fn clear_authenticated(&self) {
        self.storage.clear(&self.key);
    }

    pub fn remember_redirect(&self, path: impl Into<String>) {
        *self.redirect_target.lock() = Some(path.into());
    }

    /// Consume the pending redirect target. A second call returns `None`.
    pub fn take_redirect(&self) -> Option<String> {
        self.redirect_target.lock().take()
    }

    pub fn pending_redirect(&self) -> Option<String> {
        self.redirect_target.lock().clone()
    }

    /// Claim the handed-off target for a login screen that is mounting.
    pub fn begin_login_visit(&self) -> LoginVisit {
        LoginVisit {
            target: self.take_redirect(),
        }
    }

    /// Mark the visitor authenticated and return where to go next.
    pub fn login(&self, visit: LoginVisit, landing: Page) -> Result<String> {
        self.set_authenticated()?;
        Ok(post_login_destination(visit.target, landing))
    }

    /// Signup always lands on the default page; a pending target is dropped.
    pub fn signup(&self, landing: Page) -> Result<String> {
        self.set_authenticated()?;
        self.take_redirect();
        Ok(landing.path().to_string())
    }

    pub fn logout(&self) -> &'static str {
        self.clear_authenticated();
        LOGIN_PATH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn store() -> (Arc<MemoryStorage>, SessionStore) {
        let storage = Arc::new(MemoryStorage::new());
        let store = SessionStore::new(storage.clone(), "isAuthenticated");
        (storage, store)
    }

    #[test]
    fn test_missing_flag_reads_false() {
        let (_, store) = store();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_flag_is_literal_true() {
        let (storage, store) = store();
        store.set_authenticated().expect("should write");

        assert_eq!(storage.read("isAuthenticated").as_deref(), Some("true"));
        assert!(store.is_authenticated());
    }

    #[test]
    fn test_other_values_are_not_authenticated() {
        let (storage, store) = store();
        storage.write("isAuthenticated", "\"true\"").unwrap();
        assert!(!store.is_authenticated());

        storage.write("isAuthenticated", "false").unwrap();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_login_visit_claims_redirect_once() {
        let (_, store) = store();
        store.remember_redirect("/autocheck");

        let visit = store.begin_login_visit();
        assert_eq!(visit.target(), Some("/autocheck"));
        assert_eq!(store.pending_redirect(), None);
        assert_eq!(store.login(visit, Page::LANDING).unwrap(), "/autocheck");

        let visit = store.begin_login_visit();
        assert_eq!(store.login(visit, Page::LANDING).unwrap(), "/autochat");
    }

    #[test]
    fn test_abandoned_login_visit_drops_target() {
        let (_, store) = store();
        store.remember_redirect("/autoscan");

        // Visitor leaves the login screen without submitting.
        drop(store.begin_login_visit());

        let visit = store.begin_login_visit();
        assert_eq!(visit.target(), None);
        assert_eq!(store.login(visit, Page::LANDING).unwrap(), "/autochat");
    }

    #[test]
    fn test_signup_ignores_redirect() {
        let (_, store) = store();
        store.remember_redirect("/settings");

        assert_eq!(store.signup(Page::LANDING).unwrap(), "/autochat");
        assert!(store.is_authenticated());
        assert_eq!(store.take_redirect(), None);
    }

    #[test]
    fn test_logout_clears_flag() {
        let (storage, store) = store();
        store.set_authenticated().unwrap();

        assert_eq!(store.logout(), "/login");
        assert!(!store.is_authenticated());
        assert_eq!(storage.read("isAuthenticated"), None);
    }
}
