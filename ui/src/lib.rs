// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
pub mod charts;
pub mod chat;
pub mod compat;
mod components;
pub mod hooks;
pub mod pipeline;
mod screens;
pub mod theme;
pub mod view_state;

#[cfg(test)]
mod test_support;

use api::prefs::user_prefs::UserPrefs;
use app_state::AppState;
use app_state_mut::AppStateMut;
use charts::chartjs::CHART_JS_SRC;
use chat::ChatSession;
use screens::dashboard::DashboardScreen;
use theme::GLOBAL_CSS;
use view_state::ViewState;

//=============================================================================
// MAIN APPLICATION COMPONENT
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Script {
            src: "{CHART_JS_SRC}",
        }
        style {
            "{GLOBAL_CSS}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // read once per page; later changes happen through the header controls.
    let user_prefs = use_hook(UserPrefs::default);
    dioxus_logger::tracing::info!("prefs: {:#?}", user_prefs);

    rsx! {
        LoadedApp {
            user_prefs,
        }
    }
}

/// Owns the pipeline for the lifetime of the page.
#[component]
fn LoadedApp(user_prefs: UserPrefs) -> Element {
    let initial_view = ViewState::from(user_prefs.view_preference());

    // Create signals for mutable state at the top level of the component.
    let view = use_signal(|| initial_view);
    let stats = use_signal(|| None);
    let transactions = use_signal(|| None);
    let chat = use_signal(ChatSession::default);

    let app_state_mut = use_context_provider(|| AppStateMut {
        view,
        stats,
        transactions,
        chat,
    });
    let app_state = use_context_provider(|| AppState::new(&user_prefs, app_state_mut));

    // First load, once the canvases exist.
    let loader = app_state.clone();
    use_effect(move || {
        let state = loader.clone();
        spawn(async move {
            state.refresh_all().await;
        });
    });

    use_drop(move || app_state.teardown());

    rsx! {
        DashboardScreen {}
    }
}
