//! Draws [`ChartSpec`]s with Chart.js through the document's script bridge.

use dioxus::prelude::*;
use serde_json::json;
use serde_json::Value;

use super::ChartBackend;
use super::ChartKind;
use super::ChartSpec;
use super::ChartSurface;

/// Where the page loads Chart.js from.
pub const CHART_JS_SRC: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

/// Live instances are kept in `window.__dashboardCharts`, keyed by canvas id.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartJs;

impl ChartBackend for ChartJs {
    type Handle = &'static str;

    fn create(&self, surface: ChartSurface, spec: &ChartSpec) -> Self::Handle {
        let canvas_id = surface.canvas_id();
        // The latest config waits in `__dashboardPending` until Chart.js has
        // loaded; a destroy in the meantime discards it.
        let script = format!(
            r#"(function() {{
                const charts = window.__dashboardCharts = window.__dashboardCharts || {{}};
                const pending = window.__dashboardPending = window.__dashboardPending || {{}};
                pending[{id}] = {config};
                const draw = () => {{
                    if (typeof Chart === 'undefined') {{ setTimeout(draw, 50); return; }}
                    const config = pending[{id}];
                    const canvas = document.getElementById({id});
                    if (!config || !canvas) {{ return; }}
                    delete pending[{id}];
                    charts[{id}] = new Chart(canvas.getContext('2d'), config);
                }};
                draw();
            }})();"#,
            id = Value::from(canvas_id),
            config = config(spec),
        );
        let _ = document::eval(&script);
        canvas_id
    }

    fn destroy(&self, handle: Self::Handle) {
        let script = format!(
            r#"(function() {{
                const charts = window.__dashboardCharts || {{}};
                const pending = window.__dashboardPending || {{}};
                delete pending[{id}];
                if (charts[{id}]) {{ charts[{id}].destroy(); delete charts[{id}]; }}
            }})();"#,
            id = Value::from(handle),
        );
        let _ = document::eval(&script);
    }
}

/// Builds the Chart.js configuration object for a spec.
pub fn config(spec: &ChartSpec) -> Value {
    let palette = spec.palette;
    let value_scales = json!({
        "x": { "grid": { "display": false }, "ticks": { "color": palette.text } },
        "y": {
            "beginAtZero": true,
            "border": { "display": false },
            "grid": { "color": palette.grid },
            "ticks": { "color": palette.text }
        }
    });

    let (dataset, options) = match spec.kind {
        ChartKind::Line => (
            json!({
                "label": spec.dataset_label,
                "data": spec.values,
                "borderColor": palette.line,
                "backgroundColor": palette.line_fill,
                "fill": true,
                "tension": 0.3,
                "pointBackgroundColor": palette.point_background,
                "pointBorderColor": palette.line,
                "pointBorderWidth": 2,
                "pointRadius": 6,
                "pointHoverRadius": 8
            }),
            json!({
                "plugins": { "legend": { "display": false } },
                "scales": value_scales
            }),
        ),
        ChartKind::Doughnut => (
            json!({
                "data": spec.values,
                "backgroundColor": palette.categorical,
                "borderWidth": 0,
                "hoverOffset": 10
            }),
            json!({
                "cutout": "70%",
                "plugins": {
                    "legend": {
                        "position": "right",
                        "labels": { "boxWidth": 10, "color": palette.text }
                    }
                }
            }),
        ),
        ChartKind::Bar => (
            json!({
                "label": spec.dataset_label,
                "data": spec.values,
                "backgroundColor": palette.categorical,
                "borderRadius": 6,
                "barThickness": 20
            }),
            json!({
                "plugins": { "legend": { "display": false } },
                "scales": value_scales
            }),
        ),
    };

    let mut options = options;
    options["responsive"] = json!(true);
    options["maintainAspectRatio"] = json!(false);

    json!({
        "type": spec.kind,
        "data": {
            "labels": spec.labels,
            "datasets": [dataset]
        },
        "options": options
    })
}
