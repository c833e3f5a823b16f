use api::currency::Currency;
use api::models::ExpenseForm;
use dioxus::prelude::*;

use super::common::Button;
use super::common::ButtonType;
use super::common::Modal;
use crate::hooks::use_dashboard::use_dashboard;

/// Form for a new expense. Amounts are entered in the base currency.
///
/// The dialog only closes once the backend has accepted the expense; any
/// error is shown inline and the input is kept.
#[component]
pub fn AddExpenseModal(mut is_open: Signal<bool>) -> Element {
    let dashboard = use_dashboard();
    let mut form = use_signal(ExpenseForm::default);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let submit = move |_| {
        if submitting() {
            return;
        }
        error.set(None);
        submitting.set(true);
        dashboard.add_expense(form(), move |result| {
            submitting.set(false);
            match result {
                Ok(()) => {
                    form.set(ExpenseForm::default());
                    is_open.set(false);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let amount_label = format!("Amount ({})", Currency::BASE.symbol());

    rsx! {
        Modal {
            is_open,
            title: "Add Expense".to_string(),
            label {
                "{amount_label}"
                input {
                    r#type: "number",
                    min: "0",
                    step: "0.01",
                    placeholder: "0.00",
                    value: "{form.read().amount}",
                    oninput: move |evt| form.write().amount = evt.value(),
                }
            }
            label {
                "Category"
                input {
                    r#type: "text",
                    placeholder: "Food, Rent, Travel…",
                    value: "{form.read().category}",
                    oninput: move |evt| form.write().category = evt.value(),
                }
            }
            label {
                "Note"
                input {
                    r#type: "text",
                    placeholder: "Optional",
                    value: "{form.read().note}",
                    oninput: move |evt| form.write().note = evt.value(),
                }
            }
            if let Some(message) = error() {
                p { class: "error", "{message}" }
            }
            div {
                class: "actions",
                Button {
                    button_type: ButtonType::Secondary,
                    on_click: move |_| is_open.set(false),
                    "Cancel"
                }
                Button {
                    disabled: submitting(),
                    on_click: submit,
                    "Save"
                }
            }
        }
    }
}
