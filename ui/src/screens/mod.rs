//! The screens module contains the top-level pages of the app.

pub mod dashboard;
