use dioxus::prelude::*;

#[derive(PartialEq, Clone, Props)]
pub struct EmptyStateProps {
    title: String,
    #[props(default)]
    description: Option<String>,
}

/// Placeholder shown where a surface has nothing to draw yet.
#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div {
            class: "empty-state muted",
            p { strong { "{props.title}" } }
            if let Some(desc) = props.description {
                p { "{desc}" }
            }
        }
    }
}
