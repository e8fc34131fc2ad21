//! Integration tests for the route guard and session flow
//!
//! These walk the visitor journeys end-to-end against in-memory storage:
//! - Protected page redirect and resume after login
//! - Root redirect to the landing page
//! - Logout round trip
//! - Signup ignoring a pending redirect target
//! - Redirect target dropped when the visitor leaves the login screen

use std::sync::Arc;

use autohealth_ui::guard::{resolve, RouteDecision};
use autohealth_ui::routes::{Page, LOGIN_PATH};
use autohealth_ui::session::SessionStore;
use autohealth_ui::storage::{FlagStorage, MemoryStorage};

const KEY: &str = "isAuthenticated";

/// Test helper: a fresh session over empty storage
fn create_session() -> (Arc<MemoryStorage>, SessionStore) {
    let storage = Arc::new(MemoryStorage::new());
    let store = SessionStore::new(storage.clone(), KEY);
    (storage, store)
}

/// Test helper: apply a redirect decision the way the guarded fallback does
fn follow(store: &SessionStore, decision: RouteDecision) -> String {
    match decision {
        RouteDecision::Redirect { to, remember } => {
            if let Some(target) = remember {
                store.remember_redirect(target);
            }
            to
        }
        other => panic!("expected a redirect, got {:?}", other),
    }
}

/// Test helper: mount the login screen and submit it
fn submit_login(store: &SessionStore) -> String {
    let visit = store.begin_login_visit();
    store.login(visit, Page::LANDING).unwrap()
}

#[test]
fn test_protected_page_resumes_after_login() {
    let (_, store) = create_session();

    let to = follow(&store, resolve("/autocheck", store.is_authenticated()));
    assert_eq!(to, LOGIN_PATH);
    assert_eq!(resolve(&to, false), RouteDecision::Login);

    let destination = submit_login(&store);
    assert_eq!(destination, "/autocheck");
    assert_eq!(
        resolve(&destination, store.is_authenticated()),
        RouteDecision::Shell(Some(Page::AutoCheck))
    );
}

#[test]
fn test_redirect_target_is_consumed_once() {
    let (_, store) = create_session();

    follow(&store, resolve("/autoscan", false));
    assert_eq!(submit_login(&store), "/autoscan");

    store.logout();
    assert_eq!(submit_login(&store), Page::LANDING.path());
}

#[test]
fn test_signup_bounce_drops_redirect_target() {
    let (_, store) = create_session();

    // Sent to login from a protected page...
    let to = follow(&store, resolve("/autocheck", false));
    assert_eq!(resolve(&to, false), RouteDecision::Login);
    let first_visit = store.begin_login_visit();
    assert_eq!(first_visit.target(), Some("/autocheck"));

    // ...then over to signup and back to login by plain navigation.
    assert_eq!(resolve("/signup", false), RouteDecision::Signup);
    drop(first_visit);
    assert_eq!(resolve("/login", false), RouteDecision::Login);

    assert_eq!(submit_login(&store), "/autochat");
}

#[test]
fn test_logout_from_protected_page_does_not_remember_it() {
    let (_, store) = create_session();
    submit_login(&store);
    assert_eq!(resolve("/settings", store.is_authenticated()), RouteDecision::Shell(Some(Page::Settings)));

    // Logout navigates straight to login; no redirect is produced for /settings.
    let to = store.logout();
    assert_eq!(resolve(to, store.is_authenticated()), RouteDecision::Login);
    assert_eq!(store.pending_redirect(), None);

    assert_eq!(submit_login(&store), "/autochat");
}

#[test]
fn test_root_redirects_to_landing_then_login() {
    let (_, store) = create_session();

    let to = follow(&store, resolve("/", false));
    assert_eq!(to, "/autochat");
    assert_eq!(store.pending_redirect(), None);

    let to = follow(&store, resolve(&to, false));
    assert_eq!(to, LOGIN_PATH);
    assert_eq!(store.pending_redirect().as_deref(), Some("/autochat"));
}

#[test]
fn test_logout_round_trip() {
    let (storage, store) = create_session();

    submit_login(&store);
    assert_eq!(storage.read(KEY).as_deref(), Some("true"));
    assert!(matches!(resolve("/settings", true), RouteDecision::Shell(Some(Page::Settings))));

    let to = store.logout();
    assert_eq!(to, LOGIN_PATH);
    assert_eq!(storage.read(KEY), None);
    assert!(!store.is_authenticated());

    match resolve("/settings", store.is_authenticated()) {
        RouteDecision::Redirect { to, remember } => {
            assert_eq!(to, LOGIN_PATH);
            assert_eq!(remember.as_deref(), Some("/settings"));
        }
        other => panic!("expected a redirect, got {:?}", other),
    }
}

#[test]
fn test_signup_ignores_pending_target() {
    let (_, store) = create_session();

    follow(&store, resolve("/autocompanion", false));
    let destination = store.signup(Page::LANDING).unwrap();

    assert_eq!(destination, "/autochat");
    assert_eq!(store.pending_redirect(), None);
    assert!(store.is_authenticated());
}

#[test]
fn test_flag_written_by_another_tab_is_honored() {
    let (storage, store) = create_session();
    assert!(!store.is_authenticated());

    storage.write(KEY, "true").unwrap();
    assert!(store.is_authenticated());

    storage.write(KEY, "yes").unwrap();
    assert!(!store.is_authenticated());
}

#[test]
fn test_unknown_authenticated_path_renders_not_found_in_shell() {
    assert_eq!(resolve("/nowhere", true), RouteDecision::Shell(None));
    assert!(matches!(resolve("/nowhere", false), RouteDecision::Redirect { .. }));
}

#[test]
fn test_auth_screens_render_regardless_of_session() {
    for authenticated in [false, true] {
        assert_eq!(resolve("/login", authenticated), RouteDecision::Login);
        assert_eq!(resolve("/signup/", authenticated), RouteDecision::Signup);
    }
}
