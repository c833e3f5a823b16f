//! Building blocks of the dashboard page. Each surface component only reads
//! the reactive state; all fetching goes through the pipeline.
pub mod add_expense_modal;
pub mod chart_panel;
pub mod chat_widget;
pub mod common;
pub mod currency_chooser;
pub mod empty_state;
pub mod header;
pub mod stat_cards;
pub mod transaction_table;
