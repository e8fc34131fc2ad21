//! Building blocks shared by the report pages

use leptos::prelude::*;

/// One labeled entry in a summary panel
#[component]
pub fn SummaryCard(
    title: &'static str,
    body: String,
    #[prop(default = "")] icon: &'static str,
) -> impl IntoView {
    view! {
        <div class="card bg-white rounded-lg border border-gray-200 p-4">
            <h3 class="flex items-center gap-2 font-medium text-gray-900 mb-2">
                {(!icon.is_empty()).then(|| view! { <span class="text-blue-600">{icon}</span> })}
                {title}
            </h3>
            <p class="text-gray-700 whitespace-pre-wrap">{body}</p>
        </div>
    }
}

/// Summary panel header with the Edit action
#[component]
pub fn SummaryHeader(title: &'static str, on_edit: Callback<()>) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between mb-6">
            <h2 class="text-gray-900 text-lg font-semibold">{title}</h2>
            <button on:click=move |_| on_edit.run(()) class="btn btn-outline text-sm">
                "✏️ Edit"
            </button>
        </div>
    }
}

/// Titled card in a report panel
#[component]
pub fn ReportCard(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="card bg-white rounded-lg border border-gray-200 p-6">
            <h3 class="font-semibold text-gray-900 mb-4">{title}</h3>
            {children()}
        </div>
    }
}
