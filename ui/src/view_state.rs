//! Defines the client-side view state every surface is rendered against.

use api::currency::Currency;
use api::prefs::view_preference::ViewPreference;
use api::theme::Theme;

/// The selected display currency and theme.
///
/// `Copy`, so taking a snapshot at the start of a refresh is just a read;
/// later mutations never reach a snapshot already handed out.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ViewState {
    pub currency: Currency,
    pub theme: Theme,
}

impl ViewState {
    pub fn new(currency: Currency, theme: Theme) -> Self {
        Self { currency, theme }
    }

    pub fn with_currency(self, currency: Currency) -> Self {
        Self { currency, ..self }
    }

    pub fn with_theme(self, theme: Theme) -> Self {
        Self { theme, ..self }
    }
}

impl From<&ViewPreference> for ViewState {
    fn from(pref: &ViewPreference) -> Self {
        Self::new(pref.currency, pref.theme)
    }
}
