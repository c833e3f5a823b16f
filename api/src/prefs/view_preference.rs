use std::env;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::currency::Currency;
use crate::theme::Theme;

/// How the dashboard reacts to a currency or theme change.
#[derive(
    Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize, strum::EnumIs, strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum RefreshPolicy {
    /// Redraw from the cached raw responses; only hit the network when the
    /// cache is incomplete or a refresh is already running.
    #[default]
    #[strum(serialize = "render-only", serialize = "render_only")]
    RenderOnly,
    /// Re-fetch every data source on every change.
    #[strum(serialize = "refetch")]
    Refetch,
}

/// The user's starting view and where to find the backend.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ViewPreference {
    pub currency: Currency,
    pub theme: Theme,
    pub refresh_policy: RefreshPolicy,
    /// `None` means "same origin as the page", resolved by the UI.
    pub backend_url: Option<String>,
}

impl ViewPreference {
    /// Creates a ViewPreference from environment variables, with in-code
    /// defaults for anything unset or unparseable.
    ///
    /// # Environment Variables (case-insensitive values):
    /// - `DASHBOARD_CURRENCY`: "INR", "USD" or "EUR". defaults to INR.
    /// - `DASHBOARD_THEME`: "light" or "dark". defaults to dark.
    /// - `DASHBOARD_REFRESH_POLICY`: "render-only" or "refetch".
    /// - `DASHBOARD_BACKEND_URL`: e.g. "http://127.0.0.1:5000". Also read at
    ///   compile time, since a wasm build has no process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`Self::from_env`], reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let currency = lookup("DASHBOARD_CURRENCY")
            .map(|code| Currency::from_code(&code))
            .unwrap_or_default();

        let theme = lookup("DASHBOARD_THEME")
            .and_then(|s| Theme::from_str(s.trim()).ok())
            .unwrap_or_default();

        let refresh_policy = lookup("DASHBOARD_REFRESH_POLICY")
            .and_then(|s| RefreshPolicy::from_str(s.trim()).ok())
            .unwrap_or_default();

        let backend_url = lookup("DASHBOARD_BACKEND_URL")
            .or_else(|| option_env!("DASHBOARD_BACKEND_URL").map(str::to_string))
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        Self {
            currency,
            theme,
            refresh_policy,
            backend_url,
        }
    }
}

impl Default for ViewPreference {
    fn default() -> Self {
        Self::from_env()
    }
}
