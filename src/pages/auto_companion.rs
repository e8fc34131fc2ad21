//! AutoCompanion page - simulated video companion call

use std::time::Duration;
use leptos::prelude::*;
use crate::reports::COMPANION_NOTES;
use crate::task::TaskScope;
use crate::types::format_session_time;

pub const SESSION_ENDED: &str = "Session ended. Thank you for using AutoCompanion.";

#[component]
pub fn AutoCompanionPage() -> impl IntoView {
    let muted = RwSignal::new(false);
    let video_on = RwSignal::new(true);
    let show_side_panel = RwSignal::new(true);
    let connected = RwSignal::new(true);
    let elapsed = RwSignal::new(0u64);
    let tasks = TaskScope::new();

    // Session clock
    tasks.spawn_every(Duration::from_secs(1), move || {
        if connected.get_untracked() {
            elapsed.update(|secs| *secs += 1);
        }
    });

    let end_call = move |_: web_sys::MouseEvent| {
        if !connected.get_untracked() {
            return;
        }
        connected.set(false);
        tasks.cancel_all();
        tracing::info!("Companion session ended after {}s", elapsed.get_untracked());
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(SESSION_ENDED);
        }
    };

    let toggle_class = |active: bool| {
        format!(
            "h-14 w-14 rounded-full text-white text-xl {}",
            if active { "bg-red-600 hover:bg-red-700" } else { "bg-gray-700 hover:bg-gray-600" }
        )
    };

    view! {
        <div class="h-full flex bg-gray-900">
            <div class="flex-1 flex flex-col">
                <div class="flex-1 relative bg-gray-800">
                    // Connection status
                    <div class="absolute top-4 right-4 z-10">
                        {move || if connected.get() {
                            view! {
                                <span class="badge bg-green-600 text-white px-2 py-1 rounded">
                                    {move || format!("Connected • {}", format_session_time(elapsed.get()))}
                                </span>
                            }.into_any()
                        } else {
                            view! {
                                <span class="badge bg-gray-600 text-white px-2 py-1 rounded">
                                    {move || format!("Ended • {}", format_session_time(elapsed.get()))}
                                </span>
                            }.into_any()
                        }}
                    </div>

                    // Video feed
                    <div class="h-full flex items-center justify-center">
                        <Show
                            when=move || video_on.get()
                            fallback=|| view! {
                                <div class="text-center">
                                    <div class="text-8xl text-gray-500 mx-auto mb-4">"🚫"</div>
                                    <p class="text-gray-400">"Camera is off"</p>
                                </div>
                            }
                        >
                            <div class="text-center">
                                <div class="w-48 h-48 bg-blue-600 rounded-full flex items-center justify-center mb-4 mx-auto">
                                    <span class="text-white text-8xl">"AI"</span>
                                </div>
                                <p class="text-white">"AI Health Companion"</p>
                            </div>
                        </Show>
                    </div>

                    // Controls
                    <div class="absolute bottom-0 left-0 right-0 p-6 bg-gradient-to-t from-black/80 to-transparent">
                        <div class="flex items-center justify-center gap-4">
                            <button
                                on:click=move |_| muted.update(|m| *m = !*m)
                                class=move || toggle_class(muted.get())
                                title=move || if muted.get() { "Unmute" } else { "Mute" }
                            >
                                {move || if muted.get() { "🔇" } else { "🎤" }}
                            </button>
                            <button
                                on:click=move |_| video_on.update(|v| *v = !*v)
                                class=move || toggle_class(!video_on.get())
                                title=move || if video_on.get() { "Turn camera off" } else { "Turn camera on" }
                            >
                                {move || if video_on.get() { "📹" } else { "📷" }}
                            </button>
                            <button
                                on:click=end_call
                                class="h-14 w-14 rounded-full bg-red-600 hover:bg-red-700 text-white text-xl"
                                title="End call"
                            >
                                "📞"
                            </button>
                            <button
                                on:click=move |_| show_side_panel.update(|s| *s = !*s)
                                class="h-14 w-14 rounded-full bg-gray-700 hover:bg-gray-600 text-white text-xl"
                                title="Session notes"
                            >
                                "💬"
                            </button>
                        </div>
                    </div>
                </div>
            </div>

            // Side panel
            <Show when=move || show_side_panel.get()>
                <aside class="w-80 bg-white border-l border-gray-200 flex flex-col">
                    <div class="p-4 border-b border-gray-200">
                        <h3 class="font-semibold text-gray-900">"Session Notes"</h3>
                    </div>
                    <div class="flex-1 overflow-y-auto p-4 space-y-3">
                        {COMPANION_NOTES.iter().map(|note| view! {
                            <div class="p-3 bg-blue-50 rounded-lg text-gray-700 text-sm">{*note}</div>
                        }).collect::<Vec<_>>()}
                    </div>
                </aside>
            </Show>
        </div>
    }
}
