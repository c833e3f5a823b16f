use dioxus::prelude::*;

use crate::hooks::use_dashboard::use_dashboard;

#[component]
pub fn StatCards() -> Element {
    let stats = use_dashboard().signals().stats;

    let (total, top, count) = match &*stats.read() {
        Some(s) => (
            s.total.clone(),
            s.top_category.clone(),
            s.transaction_count.to_string(),
        ),
        None => ("…".to_string(), "…".to_string(), "…".to_string()),
    };

    rsx! {
        div {
            class: "stats-grid",
            StatCard { label: "Total Spent", value: total }
            StatCard { label: "Top Category", value: top }
            StatCard { label: "Transactions", value: count }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            class: "card",
            p { class: "muted", "{label}" }
            p { class: "stat-value", "{value}" }
        }
    }
}
