//! Header component

use leptos::prelude::*;
use crate::routes::Page;
use crate::state::AppSession;

/// Page header with title and account menu
#[component]
pub fn Header(
    /// Title for the current page, empty on unmapped paths
    title: Signal<&'static str>,
    on_navigate: Callback<Page>,
    on_logout: Callback<()>,
) -> impl IntoView {
    let session = expect_context::<AppSession>();
    let display_name = session.config.display_name.clone();
    let initials = session.config.initials();
    let menu_open = RwSignal::new(false);

    let open_settings = move |_| {
        menu_open.set(false);
        on_navigate.run(Page::Settings);
    };
    let log_out = move |_| {
        menu_open.set(false);
        on_logout.run(());
    };

    view! {
        <header class="header bg-white border-b border-gray-200 px-6 py-4 flex items-center justify-between shadow-sm">
            <div class="flex items-center gap-3">
                <h1 class="text-gray-900 text-xl font-semibold">{move || title.get()}</h1>
            </div>

            // Account menu
            <div class="relative flex items-center gap-4">
                <button
                    on:click=move |_| menu_open.update(|v| *v = !*v)
                    class="btn btn-ghost flex items-center gap-2"
                >
                    <span class="h-8 w-8 rounded-full bg-blue-100 text-blue-600 flex items-center justify-center text-sm font-medium">
                        {initials}
                    </span>
                    <span class="text-gray-700">{display_name}</span>
                </button>

                <Show when=move || menu_open.get()>
                    <div class="absolute right-0 top-full mt-2 w-44 bg-white border border-gray-200 rounded-lg shadow-lg z-50 py-1 animate-fade-in">
                        <button on:click=open_settings class="w-full text-left px-4 py-2 hover:bg-gray-50 text-gray-700">
                            "Settings"
                        </button>
                        <button on:click=log_out class="w-full text-left px-4 py-2 hover:bg-red-50 text-red-600">
                            "Log out"
                        </button>
                    </div>
                </Show>
            </div>
        </header>
    }
}
