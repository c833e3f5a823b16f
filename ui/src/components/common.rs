//! Small reusable building blocks shared by the dashboard components.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

/// A bordered panel with an optional heading.
#[component]
pub fn Card(#[props(default)] title: Option<String>, children: Element) -> Element {
    rsx! {
        div {
            class: "card",
            if let Some(title) = title {
                h3 { "{title}" }
            }
            {children}
        }
    }
}

#[derive(PartialEq, Clone, Copy, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
}

impl ButtonType {
    fn to_class(self) -> &'static str {
        match self {
            ButtonType::Primary => "primary",
            ButtonType::Secondary => "secondary",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    disabled: bool,
    #[props(optional)]
    title: Option<String>,
}

pub fn Button(props: ButtonProps) -> Element {
    rsx! {
        button {
            class: props.button_type.to_class(),
            title: props.title.as_deref().unwrap_or(""),
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ModalProps {
    is_open: Signal<bool>,
    title: String,
    children: Element,
}

/// A dialog that closes on backdrop click or Escape.
pub fn Modal(mut props: ModalProps) -> Element {
    rsx! {
        if (props.is_open)() {
            div {
                class: "modal-backdrop",
                onclick: move |_| props.is_open.set(false),
                onkeydown: move |evt| {
                    if evt.key() == Key::Escape {
                        props.is_open.set(false);
                    }
                },
                div {
                    class: "modal card",
                    onclick: |evt| evt.stop_propagation(),
                    h3 { "{props.title}" }
                    {props.children}
                }
            }
        }
    }
}
