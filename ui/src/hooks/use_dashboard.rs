use api::currency::Currency;
use api::models::ExpenseForm;
use api::ApiError;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::chat;

/// Handle to the dashboard's pipeline and its reactive mirror.
///
/// Every method that talks to the backend runs on a spawned task, so event
/// handlers can call them directly.
#[derive(Clone)]
pub struct Dashboard {
    state: AppState,
    signals: AppStateMut,
}

impl Dashboard {
    pub fn signals(&self) -> AppStateMut {
        self.signals
    }

    pub fn refresh(&self) {
        let state = self.state.clone();
        spawn(async move {
            state.refresh_all().await;
        });
    }

    pub fn set_currency(&self, currency: Currency) {
        let state = self.state.clone();
        spawn(async move {
            state.on_currency_change(currency).await;
        });
    }

    pub fn toggle_theme(&self) {
        let state = self.state.clone();
        let theme = state.view().theme.toggled();
        spawn(async move {
            state.on_theme_change(theme).await;
        });
    }

    /// Submits the form. `done` runs once the backend has answered; on
    /// success the dashboard refreshes afterwards.
    pub fn add_expense(
        &self,
        form: ExpenseForm,
        done: impl FnOnce(Result<(), ApiError>) + 'static,
    ) {
        let state = self.state.clone();
        spawn(async move {
            state.on_expense_added(form, done).await;
        });
    }

    pub fn toggle_chat(&self) {
        let backend = self.state.backend().clone();
        let store = self.signals.chat;
        spawn(async move {
            chat::toggle(&store, &*backend).await;
        });
    }

    pub fn restart_chat(&self) {
        let backend = self.state.backend().clone();
        let store = self.signals.chat;
        spawn(async move {
            chat::restart(&store, &*backend).await;
        });
    }

    pub fn send_chat(&self, input: String) {
        let backend = self.state.backend().clone();
        let store = self.signals.chat;
        spawn(async move {
            if let Err(e) = chat::send(&store, &*backend, &input).await {
                dioxus_logger::tracing::debug!("chat message not sent: {}", e);
            }
        });
    }
}

pub fn use_dashboard() -> Dashboard {
    Dashboard {
        state: use_context::<AppState>(),
        signals: use_context::<AppStateMut>(),
    }
}
