pub mod user_prefs;
pub mod view_preference;
