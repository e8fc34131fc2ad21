//! Chat input component

use leptos::prelude::*;
use web_sys::HtmlTextAreaElement;

/// Chat input with auto-resize textarea
#[component]
pub fn ChatInput(
    /// Current input value
    value: RwSignal<String>,
    /// Called when user submits
    on_submit: impl Fn() + 'static + Clone,
    /// Placeholder text
    #[prop(default = "Type your message...")]
    placeholder: &'static str,
) -> impl IntoView {
    let textarea_ref = NodeRef::<leptos::html::Textarea>::new();

    // Auto-resize textarea
    let resize_textarea = move || {
        if let Some(textarea) = textarea_ref.get() {
            let el: &HtmlTextAreaElement = textarea.as_ref();
            let new_height = el.scroll_height().min(120);
            let _ = el.set_attribute("style", &format!("height: {}px; max-height: 120px;", new_height));
        }
    };

    let on_input = move |ev: web_sys::Event| {
        value.set(event_target_value(&ev));
        resize_textarea();
    };

    // Enter to submit, Shift+Enter for newline
    let on_keydown = {
        let on_submit = on_submit.clone();
        move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Enter" && !ev.shift_key() {
                ev.prevent_default();
                if !value.get().trim().is_empty() {
                    on_submit();
                }
            }
        }
    };

    let on_button_click = move |_| {
        if !value.get().trim().is_empty() {
            on_submit();
        }
    };

    let is_empty = Signal::derive(move || value.get().trim().is_empty());

    view! {
        <div class="border-t border-gray-200 bg-white p-4">
            <div class="max-w-4xl mx-auto">
                <div class="flex items-end gap-2 bg-white border border-gray-200 rounded-lg p-2">
                    <button type="button" class="btn btn-ghost p-2 shrink-0" title="Voice input">"🎤"</button>
                    <button type="button" class="btn btn-ghost p-2 shrink-0" title="Attach file">"📎"</button>
                    <textarea
                        node_ref=textarea_ref
                        prop:value=move || value.get()
                        on:input=on_input
                        on:keydown=on_keydown
                        placeholder=placeholder
                        rows="1"
                        class="flex-1 border-0 resize-none min-h-[40px] focus:outline-none"
                        style="max-height: 120px;"
                    ></textarea>
                    <button
                        on:click=on_button_click
                        disabled=move || is_empty.get()
                        class="p-3 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-300
                               disabled:cursor-not-allowed rounded-lg transition-colors shrink-0"
                    >
                        <svg
                            xmlns="http://www.w3.org/2000/svg"
                            class="w-5 h-5 text-white"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        >
                            <line x1="22" y1="2" x2="11" y2="13"></line>
                            <polygon points="22 2 15 22 11 13 2 9 22 2"></polygon>
                        </svg>
                    </button>
                </div>
            </div>
        </div>
    }
}
