use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

use crate::chat::Sender;
use crate::hooks::use_dashboard::use_dashboard;

/// Collapsible assistant chat in the corner of the page.
#[component]
pub fn ChatWidget() -> Element {
    let dashboard = use_dashboard();
    let session = dashboard.signals().chat;
    let mut draft = use_signal(String::new);

    let on_toggle = dashboard.clone();
    let on_restart = dashboard.clone();
    let on_send = dashboard.clone();
    let on_enter = dashboard.clone();

    let expanded = session.read().is_expanded();
    let busy = session.read().is_busy();

    rsx! {
        div {
            class: "chat-widget card",
            div {
                class: "chat-header",
                onclick: move |_| on_toggle.toggle_chat(),
                span { "💬 Assistant" }
                span { if expanded { "▾" } else { "▴" } }
            }
            if expanded {
                div {
                    class: "chat-history",
                    for (i, message) in session.read().transcript().iter().enumerate() {
                        div {
                            key: "{i}",
                            class: match message.sender {
                                Sender::User => "message user-message",
                                Sender::Bot => "message bot-message",
                            },
                            "{message.text}"
                        }
                    }
                    if busy {
                        div { class: "message bot-message loading", "…" }
                    }
                }
                div {
                    class: "chat-input",
                    input {
                        r#type: "text",
                        placeholder: "Ask about your spending…",
                        value: "{draft}",
                        oninput: move |evt| draft.set(evt.value()),
                        onkeydown: move |evt| {
                            if evt.key() == Key::Enter && !busy {
                                on_enter.send_chat(draft());
                                draft.set(String::new());
                            }
                        },
                    }
                    button {
                        class: "primary",
                        disabled: busy,
                        onclick: move |_| {
                            on_send.send_chat(draft());
                            draft.set(String::new());
                        },
                        "Send"
                    }
                    button {
                        class: "secondary",
                        title: "New conversation",
                        onclick: move |_| on_restart.restart_chat(),
                        "↺"
                    }
                }
            }
        }
    }
}
