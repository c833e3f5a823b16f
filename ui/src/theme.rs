//! Colors and global styles for both themes.

use api::theme::Theme;

/// Colors handed to the charting library for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: &'static str,
    pub grid: &'static str,
    pub line: &'static str,
    pub line_fill: &'static str,
    pub point_background: &'static str,
    pub categorical: [&'static str; 5],
}

const DARK: Palette = Palette {
    text: "#94a3b8",
    grid: "#334155",
    line: "#3b82f6",
    line_fill: "rgba(59, 130, 246, 0.25)",
    point_background: "#0f172a",
    categorical: ["#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6"],
};

const LIGHT: Palette = Palette {
    text: "#64748b",
    grid: "#e2e8f0",
    line: "#2563eb",
    line_fill: "rgba(37, 99, 235, 0.2)",
    point_background: "#ffffff",
    categorical: ["#2563eb", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6"],
};

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => DARK,
        Theme::Light => LIGHT,
    }
}

/// Class put on the root element; the stylesheet keys its light variables off it.
pub fn root_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "dashboard",
        Theme::Light => "dashboard light-mode",
    }
}

pub const GLOBAL_CSS: &str = r#"
.dashboard {
  --bg: #0f172a;
  --card: #1e293b;
  --border: #334155;
  --text: #e2e8f0;
  --text-muted: #94a3b8;
  --primary: #3b82f6;
  --danger: #ef4444;
  min-height: 100vh;
  background: var(--bg);
  color: var(--text);
  font-family: "Inter", system-ui, -apple-system, sans-serif;
  padding: 1.5rem;
  box-sizing: border-box;
}
.dashboard.light-mode {
  --bg: #f8fafc;
  --card: #ffffff;
  --border: #e2e8f0;
  --text: #0f172a;
  --text-muted: #64748b;
  --primary: #2563eb;
}
.dashboard * { box-sizing: border-box; }
.dashboard header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1.5rem; }
.dashboard header .controls { display: flex; gap: 0.75rem; align-items: center; }
.dashboard select, .dashboard input, .dashboard button {
  background: var(--card); color: var(--text); border: 1px solid var(--border);
  border-radius: 8px; padding: 0.5rem 0.75rem; font: inherit;
}
.dashboard button { cursor: pointer; }
.dashboard button.primary { background: var(--primary); border-color: var(--primary); color: #fff; }
.stats-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; margin-bottom: 1.5rem; }
.card { background: var(--card); border: 1px solid var(--border); border-radius: 12px; padding: 1.25rem; }
.card h3 { margin: 0 0 0.75rem 0; font-size: 0.9rem; color: var(--text-muted); font-weight: 500; }
.stat-value { font-size: 1.6rem; font-weight: 600; }
.charts-grid { display: grid; grid-template-columns: 2fr 1fr; gap: 1rem; margin-bottom: 1.5rem; }
.chart-box { position: relative; height: 280px; }
.tx-table { width: 100%; border-collapse: collapse; }
.tx-table th, .tx-table td { text-align: left; padding: 0.6rem 0.5rem; border-bottom: 1px solid var(--border); }
.muted { color: var(--text-muted); }
.empty-state { text-align: center; padding: 1.5rem; border: 2px dashed var(--border); border-radius: 12px; }
.tx-table .amount { font-weight: 600; color: var(--danger); }
.dashboard button.secondary { background: transparent; }
.modal-backdrop { position: fixed; inset: 0; background: rgba(0, 0, 0, 0.5); display: flex; align-items: center; justify-content: center; z-index: 20; }
.modal { width: 360px; display: flex; flex-direction: column; gap: 0.75rem; }
.modal .error { color: var(--danger); margin: 0; }
.modal .actions { display: flex; justify-content: flex-end; gap: 0.5rem; }
.chat-widget { position: fixed; right: 1.5rem; bottom: 0; width: 340px; z-index: 10; }
.chat-widget .chat-header { display: flex; justify-content: space-between; align-items: center; cursor: pointer; }
.chat-widget .chat-header h3 { margin: 0; }
.chat-history { height: 300px; overflow-y: auto; display: flex; flex-direction: column; gap: 0.5rem; margin: 0.75rem 0; }
.message { padding: 0.5rem 0.75rem; border-radius: 10px; max-width: 85%; white-space: pre-wrap; }
.user-message { align-self: flex-end; background: var(--primary); color: #fff; }
.bot-message { align-self: flex-start; background: var(--bg); border: 1px solid var(--border); }
.loading { opacity: 0.6; font-style: italic; }
.chat-input { display: flex; gap: 0.5rem; }
.chat-input input { flex: 1; }
"#;
