use dioxus::prelude::*;

use super::common::Card;
use crate::charts::ChartSurface;

/// The three canvases the pipeline draws into.
#[component]
pub fn ChartPanel() -> Element {
    rsx! {
        div {
            class: "charts-grid",
            ChartBox { title: "Spending Trend", surface: ChartSurface::Trend }
            ChartBox { title: "By Category", surface: ChartSurface::Category }
            ChartBox { title: "Category Totals", surface: ChartSurface::Bar }
        }
    }
}

#[component]
fn ChartBox(title: &'static str, surface: ChartSurface) -> Element {
    rsx! {
        Card {
            title: Some(title.to_string()),
            div {
                class: "chart-box",
                canvas { id: surface.canvas_id() }
            }
        }
    }
}
