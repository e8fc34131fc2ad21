//! AutoChat page - conversational assistant

use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use crate::components::{ChatInput, ChatMessage, TypingIndicator};
use crate::state::AppSession;
use crate::task::TaskScope;
use crate::types::Transcript;

/// Assistant chat page
#[component]
pub fn AutoChatPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let reply_delay = session.config.chat_reply_delay();

    // Local state
    let transcript = RwSignal::new(Transcript::default());
    let input = RwSignal::new(String::new());
    let pending_replies = RwSignal::new(0usize);
    let messages_end_ref = NodeRef::<leptos::html::Div>::new();
    let tasks = TaskScope::new();
    let replying = Memo::new(move |_| pending_replies.get() > 0);

    // Keep the newest message in view
    Effect::new(move |_| {
        transcript.track();
        pending_replies.track();
        if let Some(el) = messages_end_ref.get() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    let send_message = move || {
        let text = input.get_untracked();
        let sent = transcript.try_update(|t| t.push_user(&text)).unwrap_or(false);
        if !sent {
            return;
        }
        input.set(String::new());

        // Simulated assistant reply
        pending_replies.update(|n| *n += 1);
        tasks.spawn_after(reply_delay, move || {
            transcript.update(|t| t.push_reply());
            pending_replies.update(|n| *n = n.saturating_sub(1));
        });
    };

    view! {
        <div class="h-full flex flex-col bg-gray-50">
            // Messages area
            <div class="flex-1 overflow-y-auto">
                <div class="p-6 space-y-4 max-w-4xl mx-auto">
                    <For
                        each=move || transcript.get().messages
                        key=|msg| msg.id.clone()
                        children=|msg| view! { <ChatMessage message=msg /> }
                    />

                    // Typing indicator
                    <Show when=move || replying.get()>
                        <TypingIndicator />
                    </Show>

                    // Scroll anchor
                    <div node_ref=messages_end_ref></div>
                </div>
            </div>

            // Input area
            <ChatInput
                value=input
                on_submit=send_message
                placeholder="Type your message..."
            />
        </div>
    }
}
