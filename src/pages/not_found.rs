//! Shown inside the shell for unknown authenticated paths

use leptos::prelude::*;
use crate::routes::Page;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="h-full flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href=Page::LANDING.path()
                    class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
                >
                    {format!("Back to {}", Page::LANDING.title())}
                </a>
            </div>
        </div>
    }
}
