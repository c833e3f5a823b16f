//! This crate contains everything the dashboard shares across platforms:
//! currencies and conversion, the backend wire types, and the backend client.

pub mod backend;
pub mod convert;
pub mod currency;
pub mod display_amount;
pub mod error;
pub mod exchange_rates;
pub mod models;
pub mod prefs;
pub mod theme;

pub use error::ApiError;
