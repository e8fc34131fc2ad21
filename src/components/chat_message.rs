//! Chat message component

use leptos::prelude::*;
use pulldown_cmark::{html, Options, Parser};
use crate::types::{Message, MessageRole};

/// Render a single chat message
#[component]
pub fn ChatMessage(message: Message) -> impl IntoView {
    let is_user = message.role == MessageRole::User;
    let time_label = message.time_label();

    view! {
        <div class=format!(
            "flex gap-3 message-appear {}",
            if is_user { "flex-row-reverse" } else { "flex-row" }
        )>
            // Avatar (assistant only)
            {(!is_user).then(|| view! {
                <div class="w-8 h-8 rounded-full bg-blue-100 text-blue-600 flex items-center justify-center text-sm shrink-0">
                    "🤖"
                </div>
            })}

            <div class=format!(
                "flex flex-col max-w-[70%] {}",
                if is_user { "items-end" } else { "items-start" }
            )>
                // Message bubble
                <div class=format!(
                    "px-4 py-3 rounded-2xl break-words {}",
                    if is_user { "bg-blue-600 text-white whitespace-pre-wrap" } else { "bg-blue-50 text-black" }
                )>
                    {if is_user {
                        view! { <p>{message.content.clone()}</p> }.into_any()
                    } else {
                        view! { <div class="markdown" inner_html=markdown_to_html(&message.content)></div> }.into_any()
                    }}
                </div>

                // Timestamp
                <span class="text-xs text-gray-500 mt-1 px-2">{time_label}</span>
            </div>
        </div>
    }
}

/// Render assistant markdown to HTML. Only used for assistant content, which
/// is produced by the app itself; visitor input is always rendered as text.
pub fn markdown_to_html(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(content, options);
    let mut out = String::with_capacity(content.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_renders_emphasis_and_lists() {
        let out = markdown_to_html("**Rest** well\n\n- fluids\n- sleep");
        assert!(out.contains("<strong>Rest</strong>"));
        assert!(out.contains("<li>fluids</li>"));
    }

    #[test]
    fn test_plain_text_becomes_paragraph() {
        assert_eq!(markdown_to_html("Hello"), "<p>Hello</p>\n");
    }
}
