//! Global application state

use leptos::prelude::*;
use std::sync::Arc;

use crate::config::UiConfig;
use crate::routes::Page;
use crate::session::{LoginVisit, SessionStore};
use crate::storage::FlagStorage;

/// Session context, constructed once in `App` and provided to every page.
#[derive(Clone)]
pub struct AppSession {
    store: Arc<SessionStore>,
    /// Reactive mirror of the persisted flag
    pub authenticated: RwSignal<bool>,
    pub config: Arc<UiConfig>,
}

impl AppSession {
    pub fn new(storage: Arc<dyn FlagStorage>, config: UiConfig) -> Self {
        let store = Arc::new(SessionStore::new(storage, config.storage_key.clone()));
        let authenticated = RwSignal::new(store.is_authenticated());

        Self {
            store,
            authenticated,
            config: Arc::new(config),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated.get()
    }

    pub fn remember_redirect(&self, path: impl Into<String>) {
        self.store.remember_redirect(path);
    }

    pub fn begin_login_visit(&self) -> LoginVisit {
        self.store.begin_login_visit()
    }

    /// Returns the path to navigate to.
    pub fn login(&self, visit: LoginVisit) -> String {
        match self.store.login(visit, Page::LANDING) {
            Ok(destination) => {
                tracing::info!("Login succeeded, resuming at {}", destination);
                self.authenticated.set(true);
                destination
            }
            Err(e) => {
                tracing::warn!("Could not persist session flag: {}", e);
                self.authenticated.set(self.store.is_authenticated());
                Page::LANDING.path().to_string()
            }
        }
    }

    /// Returns the path to navigate to.
    pub fn signup(&self) -> String {
        match self.store.signup(Page::LANDING) {
            Ok(destination) => {
                tracing::info!("Signup succeeded");
                self.authenticated.set(true);
                destination
            }
            Err(e) => {
                tracing::warn!("Could not persist session flag: {}", e);
                self.authenticated.set(self.store.is_authenticated());
                Page::LANDING.path().to_string()
            }
        }
    }

    /// Returns the path to navigate to.
    pub fn logout(&self) -> &'static str {
        tracing::info!("Logging out");
        let destination = self.store.logout();
        self.authenticated.set(false);
        destination
    }
}
