use std::ops::Deref;
use std::rc::Rc;

use api::backend::HttpBackend;
use api::prefs::user_prefs::UserPrefs;
use dioxus_logger::tracing::info;

use crate::app_state_mut::AppStateMut;
use crate::charts::chartjs::ChartJs;
use crate::compat;
use crate::pipeline::RenderPipeline;
use crate::view_state::ViewState;

/// Used when neither the environment nor the page says where the backend is.
pub const FALLBACK_BACKEND_URL: &str = "http://127.0.0.1:5000";

pub type DashboardPipeline = RenderPipeline<HttpBackend, AppStateMut, ChartJs>;

/// The stable, non-reactive half of the app: one pipeline per page.
#[derive(Clone)]
pub struct AppState(Rc<DashboardPipeline>);

impl Deref for AppState {
    type Target = DashboardPipeline;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(prefs: &UserPrefs, signals: AppStateMut) -> Self {
        let pref = prefs.view_preference();
        let base_url = backend_url(pref.backend_url.as_deref(), compat::page_origin());
        info!("backend at {}", base_url);
        Self(Rc::new(RenderPipeline::new(
            Rc::new(HttpBackend::new(base_url)),
            signals,
            ChartJs,
            ViewState::from(pref),
            pref.refresh_policy,
        )))
    }
}

fn backend_url(configured: Option<&str>, page_origin: Option<String>) -> String {
    configured
        .map(str::to_string)
        .or(page_origin)
        .unwrap_or_else(|| FALLBACK_BACKEND_URL.to_string())
}
