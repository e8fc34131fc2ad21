//! Loading indicators

use leptos::prelude::*;

/// Animated loading dots
#[component]
pub fn LoadingDots() -> impl IntoView {
    view! {
        <div class="flex items-center gap-1">
            <span class="w-2 h-2 bg-blue-400 rounded-full dot-bounce-1"></span>
            <span class="w-2 h-2 bg-blue-400 rounded-full dot-bounce-2"></span>
            <span class="w-2 h-2 bg-blue-400 rounded-full dot-bounce-3"></span>
        </div>
    }
}

/// Typing indicator while the assistant is "thinking"
#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="flex items-start gap-3 message-appear">
            <div class="w-8 h-8 rounded-full bg-blue-100 text-blue-600 flex items-center justify-center text-sm shrink-0">
                "🤖"
            </div>
            <div class="px-4 py-3 bg-blue-50 rounded-2xl">
                <LoadingDots />
            </div>
        </div>
    }
}

/// Skeleton loader for content
#[component]
pub fn Skeleton(
    #[prop(default = "h-4 w-full")] class: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("bg-gray-200 rounded animate-pulse {}", class)></div>
    }
}

/// Placeholder blocks shown while a report is being "generated"
#[component]
pub fn ReportSkeleton() -> impl IntoView {
    view! {
        <div class="space-y-4">
            <Skeleton class="h-12 w-full" />
            <Skeleton class="h-32 w-full" />
            <Skeleton class="h-24 w-full" />
            <Skeleton class="h-32 w-full" />
        </div>
    }
}
