//! AutoHealth - Leptos frontend
//!
//! Client-side health assistant: login and signup screens, a guarded shell
//! with sidebar and header, and five feature pages backed by simulated data.

pub mod components;
pub mod config;
pub mod error;
pub mod forms;
pub mod guard;
pub mod pages;
pub mod reports;
pub mod routes;
pub mod session;
pub mod state;
pub mod storage;
pub mod task;
pub mod types;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    hooks::use_location,
    path, NavigateOptions,
};

use components::Layout;
use config::UiConfig;
use guard::RouteDecision;
use pages::{
    AutoChatPage, AutoCheckPage, AutoCompanionPage, AutoScanPage, LoginPage, NotFound,
    SettingsPage, SignupPage,
};
use routes::Page;
use state::AppSession;
use storage::BrowserStorage;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = AppSession::new(Arc::new(BrowserStorage), UiConfig::load());
    provide_context(session);

    view! {
        <Router>
            <Routes fallback=GuardedShell>
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/signup") view=SignupPage />
                <Route path=path!("/") view=|| view! { <Redirect path=Page::LANDING.path() options=replace() /> } />
            </Routes>
        </Router>
    }
}

fn replace() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..Default::default()
    }
}

/// Everything outside the auth screens goes through the guard.
///
/// The decision is re-evaluated on path changes only. Logout flips the flag
/// and navigates to `/login` itself, so a flag change alone never produces a
/// redirect here.
#[component]
fn GuardedShell() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let location = use_location();

    let decision = Memo::new(move |_| {
        let path = location.pathname.get();
        guard::resolve(&path, session.authenticated.get_untracked())
    });
    let in_shell = Memo::new(move |_| matches!(decision.get(), RouteDecision::Shell(_)));

    move || {
        if in_shell.get() {
            // Kept mounted across page changes so the collapse state survives.
            return view! { <Layout><ShellContent decision=decision /></Layout> }.into_any();
        }

        match decision.get() {
            RouteDecision::Redirect { to, remember } => {
                view! { <GuardRedirect to=to remember=remember /> }.into_any()
            }
            RouteDecision::Login => view! { <LoginPage /> }.into_any(),
            RouteDecision::Signup => view! { <SignupPage /> }.into_any(),
            RouteDecision::Shell(_) => ().into_any(),
        }
    }
}

/// Hands the redirect target to the login screen, then navigates.
#[component]
fn GuardRedirect(to: String, remember: Option<String>) -> impl IntoView {
    if let Some(target) = remember {
        expect_context::<AppSession>().remember_redirect(target);
    }
    view! { <Redirect path=to options=replace() /> }
}

#[component]
fn ShellContent(decision: Memo<RouteDecision>) -> impl IntoView {
    let page = Memo::new(move |_| match decision.get() {
        RouteDecision::Shell(page) => page,
        _ => None,
    });

    move || match page.get() {
        Some(Page::AutoChat) => view! { <AutoChatPage /> }.into_any(),
        Some(Page::AutoScan) => view! { <AutoScanPage /> }.into_any(),
        Some(Page::AutoCheck) => view! { <AutoCheckPage /> }.into_any(),
        Some(Page::AutoCompanion) => view! { <AutoCompanionPage /> }.into_any(),
        Some(Page::Settings) => view! { <SettingsPage /> }.into_any(),
        None => view! { <NotFound /> }.into_any(),
    }
}
