use api::theme::Theme;
use chrono::Local;
use dioxus::prelude::*;

use super::common::Button;
use super::common::ButtonType;
use super::currency_chooser::CurrencyChooser;
use crate::hooks::use_dashboard::use_dashboard;

/// Title, today's date and the view controls.
#[component]
pub fn DashboardHeader(mut add_open: Signal<bool>) -> Element {
    let dashboard = use_dashboard();
    let view = dashboard.signals().view;
    let today = Local::now().format("%A, %B %-d, %Y").to_string();
    let theme_label = match view().theme {
        Theme::Dark => "☀ Light",
        Theme::Light => "☾ Dark",
    };
    let on_currency = dashboard.clone();
    let on_theme = dashboard.clone();

    rsx! {
        header {
            div {
                h1 { "Expense Dashboard" }
                p { class: "muted", "{today}" }
            }
            div {
                class: "controls",
                CurrencyChooser {
                    selected: view().currency,
                    on_change: move |currency| on_currency.set_currency(currency),
                }
                Button {
                    button_type: ButtonType::Secondary,
                    title: "Switch theme",
                    on_click: move |_| on_theme.toggle_theme(),
                    "{theme_label}"
                }
                Button {
                    on_click: move |_| add_open.set(true),
                    "+ Add Expense"
                }
            }
        }
    }
}
