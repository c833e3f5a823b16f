#![allow(non_snake_case)]

use api::currency::Currency;
use dioxus::prelude::*;
use strum::IntoEnumIterator;

#[derive(Props, PartialEq, Clone)]
pub struct CurrencyChooserProps {
    pub selected: Currency,
    pub on_change: EventHandler<Currency>,
}

/// Drop-down of every display currency, labelled `CODE (symbol)`.
pub fn CurrencyChooser(props: CurrencyChooserProps) -> Element {
    rsx! {
        select {
            title: "Display currency",
            value: props.selected.code(),
            onchange: move |evt| {
                props.on_change.call(Currency::from_code(&evt.value()));
            },
            for currency in Currency::iter() {
                option {
                    key: "{currency.code()}",
                    value: currency.code(),
                    selected: currency == props.selected,
                    title: currency.name(),
                    "{currency.code()} ({currency.symbol()})"
                }
            }
        }
    }
}
