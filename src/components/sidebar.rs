//! Sidebar component

use leptos::prelude::*;
use crate::routes::Page;

fn nav_icon(page: Page) -> &'static str {
    match page {
        Page::AutoChat => "💬",
        Page::AutoScan => "📈",
        Page::AutoCheck => "📋",
        Page::AutoCompanion => "🎥",
        Page::Settings => "⚙️",
    }
}

/// Navigation sidebar with collapse toggle
#[component]
pub fn Sidebar(
    /// Page for the current path, `None` on unmapped paths
    current: Signal<Option<Page>>,
    /// Collapsed to icons only
    collapsed: RwSignal<bool>,
    on_navigate: Callback<Page>,
    on_logout: Callback<()>,
) -> impl IntoView {
    let toggle = move |_| collapsed.update(|v| *v = !*v);

    view! {
        <aside class=move || format!(
            "sidebar bg-white border-r border-gray-200 h-screen flex flex-col transition-all duration-300 {}",
            if collapsed.get() { "w-16" } else { "w-64" }
        )>
            // Logo + collapse toggle
            <div class="p-4 border-b border-gray-200 flex items-center justify-between gap-2">
                <Show when=move || !collapsed.get()>
                    <div class="w-[50%]">
                        <img src="/logo.svg" alt="Logo" class="w-full h-auto" />
                    </div>
                </Show>
                <button on:click=toggle class="btn btn-ghost p-2" title="Toggle sidebar">
                    {move || if collapsed.get() { "›" } else { "‹" }}
                </button>
            </div>

            // Navigation
            <nav class="flex-1 p-2">
                {Page::ALL.into_iter().map(|page| {
                    view! {
                        <NavButton
                            page=page
                            is_active=Signal::derive(move || current.get() == Some(page))
                            collapsed=collapsed
                            on_click=move |_| on_navigate.run(page)
                        />
                    }
                }).collect::<Vec<_>>()}
            </nav>

            // Footer
            <div class="p-2 border-t border-gray-200">
                <button
                    on:click=move |_| on_logout.run(())
                    class="sidebar-item w-full flex items-center gap-3 px-3 py-3 rounded-lg text-gray-700 hover:bg-red-50"
                >
                    <span class="text-lg shrink-0">"🚪"</span>
                    <Show when=move || !collapsed.get()>
                        <span>"Log out"</span>
                    </Show>
                </button>
            </div>
        </aside>
    }
}

/// Navigation entry in sidebar
#[component]
fn NavButton(
    page: Page,
    is_active: Signal<bool>,
    collapsed: RwSignal<bool>,
    on_click: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <button
            on:click=on_click
            title=page.title()
            class=move || format!(
                "sidebar-item w-full flex items-center gap-3 px-3 py-3 rounded-lg mb-1 transition-colors {}",
                if is_active.get() {
                    "bg-blue-600 text-white"
                } else {
                    "text-gray-700 hover:bg-blue-50"
                }
            )
        >
            <span class="text-lg shrink-0">{nav_icon(page)}</span>
            <Show when=move || !collapsed.get()>
                <span>{page.title()}</span>
            </Show>
        </button>
    }
}
