//! Declarative chart descriptions and the registry that owns live chart
//! instances.

pub mod chartjs;

use std::collections::HashMap;

use api::convert;
use api::models::CategoryTotal;
use api::models::TrendPoint;
use serde::Serialize;

use crate::theme::palette;
use crate::theme::Palette;
use crate::view_state::ViewState;

/// The chart slots on the dashboard. Each has its own canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartSurface {
    Trend,
    Category,
    Bar,
}

impl ChartSurface {
    pub fn canvas_id(&self) -> &'static str {
        match self {
            Self::Trend => "trendChart",
            Self::Category => "pieChart",
            Self::Bar => "barChart",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Doughnut,
    Bar,
}

/// Everything needed to draw one chart, already converted into the display
/// currency and colored for the theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub dataset_label: Option<String>,
    pub values: Vec<f64>,
    pub palette: Palette,
}

/// The charting library, as far as the dashboard cares.
pub trait ChartBackend {
    type Handle;

    /// Draws a new chart instance on the surface's canvas.
    fn create(&self, surface: ChartSurface, spec: &ChartSpec) -> Self::Handle;

    /// Tears down an instance, releasing its canvas and listeners.
    fn destroy(&self, handle: Self::Handle);
}

/// Holds at most one live chart per surface.
pub struct ChartRegistry<C: ChartBackend> {
    backend: C,
    live: HashMap<ChartSurface, C::Handle>,
}

impl<C: ChartBackend> ChartRegistry<C> {
    pub fn new(backend: C) -> Self {
        Self {
            backend,
            live: HashMap::new(),
        }
    }

    /// Destroys whatever is on `surface`, then draws `spec` there.
    pub fn replace(&mut self, surface: ChartSurface, spec: &ChartSpec) {
        if let Some(old) = self.live.remove(&surface) {
            self.backend.destroy(old);
        }
        let handle = self.backend.create(surface, spec);
        self.live.insert(surface, handle);
    }

    /// Destroys every live instance.
    pub fn clear(&mut self) {
        for (_, handle) in self.live.drain() {
            self.backend.destroy(handle);
        }
    }

    pub fn is_live(&self, surface: ChartSurface) -> bool {
        self.live.contains_key(&surface)
    }

    pub fn backend(&self) -> &C {
        &self.backend
    }
}

pub fn trend_chart(series: &[TrendPoint], view: ViewState) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Line,
        labels: series.iter().map(|p| p.label().to_string()).collect(),
        dataset_label: Some(format!("Spending ({})", view.currency.code())),
        values: series
            .iter()
            .map(|p| convert::convert_rounded(p.amount(), view.currency))
            .collect(),
        palette: palette(view.theme),
    }
}

pub fn category_chart(breakdown: &[CategoryTotal], view: ViewState) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Doughnut,
        dataset_label: None,
        ..breakdown_values(breakdown, view)
    }
}

/// Same categories as the doughnut, drawn as bars.
pub fn bar_chart(breakdown: &[CategoryTotal], view: ViewState) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Bar,
        dataset_label: Some(format!("Amount ({})", view.currency.code())),
        ..breakdown_values(breakdown, view)
    }
}

fn breakdown_values(breakdown: &[CategoryTotal], view: ViewState) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Bar,
        labels: breakdown.iter().map(|c| c.category().to_string()).collect(),
        dataset_label: None,
        values: breakdown
            .iter()
            .map(|c| convert::convert_rounded(c.amount(), view.currency))
            .collect(),
        palette: palette(view.theme),
    }
}
