use dioxus::prelude::*;

use super::common::Card;
use super::empty_state::EmptyState;
use crate::hooks::use_dashboard::use_dashboard;

#[component]
pub fn TransactionTable() -> Element {
    let transactions = use_dashboard().signals().transactions;

    rsx! {
        Card {
            title: Some("Recent Transactions".to_string()),
            match &*transactions.read() {
                None => rsx! {
                    p { class: "muted", "Loading…" }
                },
                Some(rows) if rows.is_empty() => rsx! {
                    EmptyState {
                        title: "No expenses yet".to_string(),
                        description: Some("Add one with the button above.".to_string()),
                    }
                },
                Some(rows) => rsx! {
                    table {
                        class: "tx-table",
                        thead {
                            tr {
                                th { "Category" }
                                th { "Note" }
                                th { "Date" }
                                th { class: "amount", "Amount" }
                            }
                        }
                        tbody {
                            for (i, row) in rows.iter().enumerate() {
                                tr {
                                    key: "{i}",
                                    td { "{row.category}" }
                                    td { class: "muted", "{row.note}" }
                                    td { class: "muted", "{row.date}" }
                                    td { class: "amount", "{row.amount}" }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
