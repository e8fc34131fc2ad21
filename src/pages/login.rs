//! Login page

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use crate::forms::RequiredFields;
use crate::routes::SIGNUP_PATH;
use crate::state::AppSession;
use crate::types::LoginForm;

/// Login page
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();
    let app_name = session.config.app_name.clone();

    // Target to resume after login; lives only as long as this screen.
    let visit = StoredValue::new(session.begin_login_visit());

    // Form state
    let form = RwSignal::new(LoginForm::default());
    let show_password = RwSignal::new(false);
    let can_submit = Signal::derive(move || form.with(|f| f.is_complete()));

    // Any credentials are accepted; the flag is the whole session.
    let navigate_for_submit = navigate.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !form.with_untracked(|f| f.is_complete()) {
            return;
        }
        let destination = session.login(visit.get_value());
        navigate_for_submit(&destination, Default::default());
    };

    let to_signup = move |_| navigate(SIGNUP_PATH, Default::default());

    view! {
        <div class="min-h-screen bg-gradient-to-br from-white to-blue-50 flex items-center justify-center p-4">
            <div class="w-full max-w-6xl flex items-center gap-12">
                <AuthHero
                    title=format!("Welcome to {}", app_name)
                    subtitle="Your trusted healthcare companion"
                />

                <div class="flex-1 max-w-md w-full">
                    <div class="auth-card card bg-white rounded-lg border border-gray-200 p-6">
                        <div class="auth-header mb-6">
                            <h1 class="auth-title text-2xl font-semibold">"Login"</h1>
                            <p class="auth-subtitle text-gray-600">"Enter your credentials to access your account"</p>
                        </div>

                        <form on:submit=on_submit class="auth-form space-y-4">
                            // Email field
                            <div class="auth-input-group space-y-2">
                                <label for="email" class="auth-label">"Email"</label>
                                <input
                                    id="email"
                                    type="email"
                                    prop:value=move || form.with(|f| f.email.clone())
                                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                                    placeholder="john.doe@example.com"
                                    required=true
                                    class="input w-full"
                                />
                            </div>

                            // Password field
                            <div class="auth-input-group space-y-2">
                                <label for="password" class="auth-label">"Password"</label>
                                <div class="relative">
                                    <input
                                        id="password"
                                        type=move || if show_password.get() { "text" } else { "password" }
                                        prop:value=move || form.with(|f| f.password.clone())
                                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                                        placeholder="••••••••"
                                        required=true
                                        class="input w-full pr-10"
                                    />
                                    <PasswordToggle visible=show_password />
                                </div>
                            </div>

                            <div class="flex justify-end">
                                <button type="button" class="auth-link text-blue-600 hover:underline">
                                    "Forgot Password?"
                                </button>
                            </div>

                            <button
                                type="submit"
                                disabled=move || !can_submit.get()
                                class="btn btn-primary w-full py-3 bg-blue-600 hover:bg-blue-700"
                            >
                                "Login"
                            </button>

                            <div class="auth-footer text-center">
                                <span class="text-gray-600">"Don't have an account? "</span>
                                <button type="button" on:click=to_signup class="auth-link text-blue-600 hover:underline">
                                    "Sign Up"
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Decorative panel beside the auth forms
#[component]
pub fn AuthHero(title: String, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="hidden lg:flex flex-1 items-center justify-center">
            <div class="text-center">
                <div class="w-64 h-64 bg-blue-100 rounded-full flex items-center justify-center mb-6 mx-auto">
                    <div class="w-32 h-32 bg-blue-600 rounded-full flex items-center justify-center">
                        <span class="text-white text-6xl">"+"</span>
                    </div>
                </div>
                <h2 class="text-gray-900 text-2xl font-semibold mb-2">{title}</h2>
                <p class="text-gray-600">{subtitle}</p>
            </div>
        </div>
    }
}

/// Show/hide toggle for a password input
#[component]
pub fn PasswordToggle(visible: RwSignal<bool>) -> impl IntoView {
    view! {
        <button
            type="button"
            on:click=move |_| visible.update(|v| *v = !*v)
            class="absolute right-3 top-1/2 -translate-y-1/2 text-gray-400 hover:text-gray-600"
            title=move || if visible.get() { "Hide password" } else { "Show password" }
        >
            {move || if visible.get() { "🙈" } else { "👁" }}
        </button>
    }
}
