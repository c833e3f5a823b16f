use super::view_preference::ViewPreference;
use serde::Deserialize;
use serde::Serialize;

/// Represents all user prefs. Read once at startup; changes made in the UI
/// live only for the page session.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Default)]
pub struct UserPrefs {
    view_preference: ViewPreference,
}

impl UserPrefs {
    pub fn new(view_preference: ViewPreference) -> Self {
        Self { view_preference }
    }

    pub fn view_preference(&self) -> &ViewPreference {
        &self.view_preference
    }
}
