//! Signup page

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use crate::forms::{PasswordStrength, RequiredFields, PASSWORD_MISMATCH};
use crate::pages::login::{AuthHero, PasswordToggle};
use crate::routes::LOGIN_PATH;
use crate::state::AppSession;
use crate::types::SignupForm;

/// Signup page
#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();
    let app_name = session.config.app_name.clone();

    let form = RwSignal::new(SignupForm::default());
    let show_password = RwSignal::new(false);
    let show_confirm = RwSignal::new(false);

    let strength = Memo::new(move |_| form.with(|f| PasswordStrength::of(&f.password)));
    let can_submit = Signal::derive(move || form.with(|f| f.is_complete() && f.accept_terms));

    let navigate_for_submit = navigate.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();

        if !current.passwords_match() {
            // Blocking notice; the form keeps its values.
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(PASSWORD_MISMATCH);
            }
            return;
        }
        if let Err(e) = current.validate() {
            tracing::debug!("Signup blocked: {}", e);
            return;
        }

        let destination = session.signup();
        navigate_for_submit(&destination, Default::default());
    };

    let to_login = move |_| navigate(LOGIN_PATH, Default::default());

    view! {
        <div class="min-h-screen bg-gradient-to-br from-white to-blue-50 flex items-center justify-center p-4">
            <div class="w-full max-w-6xl flex items-center gap-12">
                <AuthHero
                    title=format!("Join {}", app_name)
                    subtitle="Start your journey to better health"
                />

                <div class="flex-1 max-w-md w-full">
                    <div class="auth-card card bg-white rounded-lg border border-gray-200 p-6">
                        <div class="auth-header mb-6">
                            <h1 class="auth-title text-2xl font-semibold">"Create Account"</h1>
                            <p class="auth-subtitle text-gray-600">"Fill in your details to get started"</p>
                        </div>

                        <form on:submit=on_submit class="auth-form space-y-4">
                            <div class="auth-input-group space-y-2">
                                <label for="fullName" class="auth-label">"Full Name"</label>
                                <input
                                    id="fullName"
                                    type="text"
                                    prop:value=move || form.with(|f| f.full_name.clone())
                                    on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                                    placeholder="John Doe"
                                    required=true
                                    class="input w-full"
                                />
                            </div>

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

                                // Strength meter
                                <Show when=move || strength.get() != PasswordStrength::None>
                                    <div class="space-y-1">
                                        <div class="h-2 bg-gray-200 rounded-full overflow-hidden">
                                            <div
                                                class=move || format!("h-full transition-all {}", strength.get().bar_class())
                                                style=move || format!("width: {}%", strength.get().percent())
                                            ></div>
                                        </div>
                                        <p class="text-gray-600 text-sm">{move || strength.get().label()}</p>
                                    </div>
                                </Show>
                            </div>

                            <div class="auth-input-group space-y-2">
                                <label for="confirmPassword" class="auth-label">"Confirm Password"</label>
                                <div class="relative">
                                    <input
                                        id="confirmPassword"
                                        type=move || if show_confirm.get() { "text" } else { "password" }
                                        prop:value=move || form.with(|f| f.confirm_password.clone())
                                        on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                                        placeholder="••••••••"
                                        required=true
                                        class="input w-full pr-10"
                                    />
                                    <PasswordToggle visible=show_confirm />
                                </div>
                            </div>

                            <div class="flex items-center gap-2">
                                <input
                                    id="terms"
                                    type="checkbox"
                                    prop:checked=move || form.with(|f| f.accept_terms)
                                    on:change=move |ev| form.update(|f| f.accept_terms = event_target_checked(&ev))
                                    required=true
                                />
                                <label for="terms" class="cursor-pointer">
                                    "I agree to the "
                                    <span class="text-blue-600">"Terms & Conditions"</span>
                                </label>
                            </div>

                            <button
                                type="submit"
                                disabled=move || !can_submit.get()
                                class="btn btn-primary w-full py-3 bg-blue-600 hover:bg-blue-700"
                            >
                                "Create Account"
                            </button>

                            <div class="auth-footer text-center mt-4">
                                <span class="text-gray-600">"Already have an account? "</span>
                                <button type="button" on:click=to_login class="auth-link text-blue-600 hover:underline">
                                    "Login"
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </div>
        </div>
    }
}
