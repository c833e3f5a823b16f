//! Defines the mutable, reactive state for the application's UI.

use dioxus::prelude::*;

use crate::chat::ChatSession;
use crate::pipeline::surfaces::StatsView;
use crate::pipeline::surfaces::SurfaceSink;
use crate::pipeline::surfaces::TransactionRow;
use crate::view_state::ViewState;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// The pipeline publishes into these signals through [`SurfaceSink`]; the
/// components only read them. Charts are not here, they live on their canvases.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// Mirror of the pipeline's view, for the header controls and root class.
    pub view: Signal<ViewState>,
    /// `None` until stats have loaded once.
    pub stats: Signal<Option<StatsView>>,
    /// `None` until recent transactions have loaded once.
    pub transactions: Signal<Option<Vec<TransactionRow>>>,
    pub chat: Signal<ChatSession>,
}

impl SurfaceSink for AppStateMut {
    fn view_changed(&self, view: ViewState) {
        let mut signal = self.view;
        if *signal.peek() != view {
            signal.set(view);
        }
    }

    fn show_stats(&self, stats: StatsView) {
        let mut signal = self.stats;
        signal.set(Some(stats));
    }

    fn show_transactions(&self, rows: Vec<TransactionRow>) {
        let mut signal = self.transactions;
        signal.set(Some(rows));
    }
}
