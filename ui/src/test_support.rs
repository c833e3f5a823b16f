//! In-memory stand-ins for the backend, the surface sink and the chart library.

use std::cell::RefCell;
use std::collections::HashSet;
use std::collections::VecDeque;
use std::rc::Rc;

use api::backend::DashboardBackend;
use api::models::CategoryTotal;
use api::models::NewExpense;
use api::models::Stats;
use api::models::Transaction;
use api::models::TrendPoint;
use api::ApiError;
use tokio::sync::Notify;

use crate::charts::ChartBackend;
use crate::charts::ChartSpec;
use crate::charts::ChartSurface;
use crate::pipeline::surfaces::StatsView;
use crate::pipeline::surfaces::SurfaceSink;
use crate::pipeline::surfaces::TransactionRow;
use crate::view_state::ViewState;

#[derive(Debug, Clone)]
pub struct MockData {
    pub stats: Stats,
    pub recent: Vec<Transaction>,
    pub trend: Vec<TrendPoint>,
    pub breakdown: Vec<CategoryTotal>,
}

impl Default for MockData {
    fn default() -> Self {
        Self {
            stats: Stats {
                total_balance: 2500.0,
                highest_category: "Food".into(),
                transaction_count: 2,
            },
            recent: vec![Transaction {
                category: "Food".into(),
                note: Some("groceries".into()),
                date: "2026-01-15 09:30:00".into(),
                amount: 1000.0,
            }],
            trend: vec![
                TrendPoint("Jan".into(), 1000.0),
                TrendPoint("Feb".into(), 1500.0),
            ],
            breakdown: vec![
                CategoryTotal("Food".into(), 1500.0),
                CategoryTotal("Rent".into(), 1000.0),
            ],
        }
    }
}

/// A backend whose responses, failures and timing are set by the test.
#[derive(Default)]
pub struct MockBackend {
    pub data: RefCell<MockData>,
    pub failing: RefCell<HashSet<&'static str>>,
    pub calls: RefCell<Vec<&'static str>>,
    pub chat_replies: RefCell<VecDeque<Result<String, ApiError>>>,
    gate: RefCell<Option<Rc<Notify>>>,
}

impl MockBackend {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Requests started from now on wait until the returned gate is opened
    /// with `notify_waiters`.
    pub fn hold(&self) -> Rc<Notify> {
        let gate = Rc::new(Notify::new());
        *self.gate.borrow_mut() = Some(gate.clone());
        gate
    }

    /// Requests started from now on answer immediately.
    pub fn unhold(&self) {
        *self.gate.borrow_mut() = None;
    }

    pub fn fail(&self, endpoint: &'static str) {
        self.failing.borrow_mut().insert(endpoint);
    }

    pub fn recover(&self, endpoint: &'static str) {
        self.failing.borrow_mut().remove(endpoint);
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn calls_to(&self, endpoint: &str) -> usize {
        self.calls.borrow().iter().filter(|c| **c == endpoint).count()
    }

    async fn respond<T>(
        &self,
        endpoint: &'static str,
        read: impl FnOnce(&MockData) -> T,
    ) -> Result<T, ApiError> {
        self.calls.borrow_mut().push(endpoint);
        let gate = self.gate.borrow().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if self.failing.borrow().contains(endpoint) {
            return Err(ApiError::Network(format!("{endpoint}: connection refused")));
        }
        Ok(read(&self.data.borrow()))
    }
}

impl DashboardBackend for MockBackend {
    async fn fetch_stats(&self) -> Result<Stats, ApiError> {
        self.respond("stats", |d| d.stats.clone()).await
    }

    async fn fetch_recent(&self) -> Result<Vec<Transaction>, ApiError> {
        self.respond("recent_expenses", |d| d.recent.clone()).await
    }

    async fn fetch_trend(&self) -> Result<Vec<TrendPoint>, ApiError> {
        self.respond("spending_trend", |d| d.trend.clone()).await
    }

    async fn fetch_category_breakdown(&self) -> Result<Vec<CategoryTotal>, ApiError> {
        self.respond("expenses", |d| d.breakdown.clone()).await
    }

    async fn add_expense(&self, expense: &NewExpense) -> Result<(), ApiError> {
        let expense = expense.clone();
        self.respond("add_expense", |_| ()).await?;
        let mut data = self.data.borrow_mut();
        data.stats.total_balance += expense.amount;
        data.stats.transaction_count += 1;
        data.recent.insert(
            0,
            Transaction {
                category: expense.category,
                note: Some(expense.note),
                date: "2026-02-01 08:00:00".into(),
                amount: expense.amount,
            },
        );
        Ok(())
    }

    async fn init_chat(&self) -> Result<String, ApiError> {
        self.respond("init_chat", |_| ()).await?;
        self.next_chat_reply()
    }

    async fn chat(&self, _message: &str) -> Result<String, ApiError> {
        self.respond("chat", |_| ()).await?;
        self.next_chat_reply()
    }
}

impl MockBackend {
    fn next_chat_reply(&self) -> Result<String, ApiError> {
        self.chat_replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok("ok".into()))
    }
}

/// Remembers everything published to it.
#[derive(Default)]
pub struct RecordingSink {
    pub views: RefCell<Vec<ViewState>>,
    pub stats: RefCell<Vec<StatsView>>,
    pub tables: RefCell<Vec<Vec<TransactionRow>>>,
}

impl RecordingSink {
    pub fn last_stats(&self) -> Option<StatsView> {
        self.stats.borrow().last().cloned()
    }

    pub fn last_table(&self) -> Option<Vec<TransactionRow>> {
        self.tables.borrow().last().cloned()
    }
}

impl SurfaceSink for Rc<RecordingSink> {
    fn view_changed(&self, view: ViewState) {
        self.views.borrow_mut().push(view);
    }

    fn show_stats(&self, stats: StatsView) {
        self.stats.borrow_mut().push(stats);
    }

    fn show_transactions(&self, rows: Vec<TransactionRow>) {
        self.tables.borrow_mut().push(rows);
    }
}

/// A chart library that keeps the specs it was asked to draw.
#[derive(Default)]
pub struct RecordingCharts {
    pub created: RefCell<Vec<(ChartSurface, ChartSpec)>>,
    pub live: RefCell<HashSet<usize>>,
}

impl RecordingCharts {
    pub fn last(&self, surface: ChartSurface) -> Option<ChartSpec> {
        self.created
            .borrow()
            .iter()
            .rev()
            .find(|(s, _)| *s == surface)
            .map(|(_, spec)| spec.clone())
    }

    pub fn created_count(&self) -> usize {
        self.created.borrow().len()
    }

    pub fn live_count(&self) -> usize {
        self.live.borrow().len()
    }
}

impl ChartBackend for Rc<RecordingCharts> {
    type Handle = usize;

    fn create(&self, surface: ChartSurface, spec: &ChartSpec) -> usize {
        let mut created = self.created.borrow_mut();
        created.push((surface, spec.clone()));
        let handle = created.len();
        self.live.borrow_mut().insert(handle);
        handle
    }

    fn destroy(&self, handle: usize) {
        assert!(
            self.live.borrow_mut().remove(&handle),
            "chart #{handle} destroyed twice"
        );
    }
}
