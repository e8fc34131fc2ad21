//! Route guard
//!
//! Decides, for a requested path and the current session flag, whether to
//! show an auth screen, redirect, or render the shell. The Leptos router in
//! `lib.rs` turns a [`RouteDecision`] into a view.

use crate::routes::{self, is_auth_path, page_for_path, Page, LOGIN_PATH, ROOT_PATH, SIGNUP_PATH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Login screen, rendered without the shell
    Login,
    /// Signup screen, rendered without the shell
    Signup,
    /// Navigate to `to`, replacing the current history entry. `remember` is the
    /// redirect target to resume after login.
    Redirect {
        to: String,
        remember: Option<String>,
    },
    /// Shell with the page for this path, or the not-found state when `None`
    Shell(Option<Page>),
}

pub fn resolve(path: &str, authenticated: bool) -> RouteDecision {
    let normalized = routes::normalize(path);

    // Auth screens render even for an authenticated visitor.
    if normalized == LOGIN_PATH {
        return RouteDecision::Login;
    }
    if normalized == SIGNUP_PATH {
        return RouteDecision::Signup;
    }

    if normalized == ROOT_PATH || normalized.is_empty() {
        return RouteDecision::Redirect {
            to: Page::LANDING.path().to_string(),
            remember: None,
        };
    }

    if !authenticated {
        tracing::debug!("Unauthenticated request for {}, redirecting to login", path);
        return RouteDecision::Redirect {
            to: LOGIN_PATH.to_string(),
            remember: Some(path.to_string()),
        };
    }

    RouteDecision::Shell(page_for_path(normalized))
}

/// Where a successful login lands: the redirect target when one was captured,
/// otherwise the landing page.
pub fn post_login_destination(target: Option<String>, landing: Page) -> String {
    match target {
        Some(target) if !target.is_empty() && !is_auth_path(&target) => target,
        _ => landing.path().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_always_redirects_to_landing() {
        for authenticated in [false, true] {
            assert_eq!(
                resolve("/", authenticated),
                RouteDecision::Redirect {
                    to: "/autochat".to_string(),
                    remember: None
                }
            );
        }
    }

    #[test]
    fn test_guarded_paths_redirect_when_unauthenticated() {
        for page in Page::ALL {
            assert_eq!(
                resolve(page.path(), false),
                RouteDecision::Redirect {
                    to: "/login".to_string(),
                    remember: Some(page.path().to_string())
                }
            );
        }
    }

    #[test]
    fn test_unknown_path_redirects_when_unauthenticated() {
        assert_eq!(
            resolve("/does-not-exist", false),
            RouteDecision::Redirect {
                to: "/login".to_string(),
                remember: Some("/does-not-exist".to_string())
            }
        );
    }

    #[test]
    fn test_auth_screens_render_regardless_of_session() {
        for authenticated in [false, true] {
            assert_eq!(resolve("/login", authenticated), RouteDecision::Login);
            assert_eq!(resolve("/signup", authenticated), RouteDecision::Signup);
        }
    }

    #[test]
    fn test_authenticated_paths_render_shell() {
        assert_eq!(resolve("/autoscan", true), RouteDecision::Shell(Some(Page::AutoScan)));
        assert_eq!(resolve("/settings/", true), RouteDecision::Shell(Some(Page::Settings)));
        assert_eq!(resolve("/elsewhere", true), RouteDecision::Shell(None));
    }

    #[test]
    fn test_post_login_destination() {
        assert_eq!(post_login_destination(Some("/autocheck".into()), Page::LANDING), "/autocheck");
        assert_eq!(post_login_destination(None, Page::LANDING), "/autochat");
        assert_eq!(post_login_destination(Some("/login".into()), Page::LANDING), "/autochat");
        assert_eq!(post_login_destination(Some(String::new()), Page::LANDING), "/autochat");
    }
}
