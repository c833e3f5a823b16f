use dioxus::prelude::*;

use crate::components::add_expense_modal::AddExpenseModal;
use crate::components::chart_panel::ChartPanel;
use crate::components::chat_widget::ChatWidget;
use crate::components::header::DashboardHeader;
use crate::components::stat_cards::StatCards;
use crate::components::transaction_table::TransactionTable;
use crate::hooks::use_dashboard::use_dashboard;
use crate::theme::root_class;

#[component]
pub fn DashboardScreen() -> Element {
    let view = use_dashboard().signals().view;
    let add_open = use_signal(|| false);

    rsx! {
        div {
            class: root_class(view().theme),
            DashboardHeader { add_open }
            StatCards {}
            ChartPanel {}
            TransactionTable {}
            AddExpenseModal { is_open: add_open }
            ChatWidget {}
        }
    }
}
