//! Fetches, converts and draws every dashboard surface.
//!
//! A refresh takes a [`ViewState`] snapshot and a generation number when it
//! is *called*, fans out the four fetches concurrently, and draws each
//! surface as soon as its own data arrives. A result whose generation has
//! been overtaken by a later refresh (or redraw) is dropped, so an old fetch
//! can never paint over a newer view.
//!
//! Everything here runs on one thread: state lives in `Cell`/`RefCell` and no
//! borrow is held across an await.

mod cache;
pub mod surfaces;


use std::cell::Cell;
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use api::backend::DashboardBackend;
use api::currency::Currency;
use api::models::CategoryTotal;
use api::models::ExpenseForm;
use api::models::Stats;
use api::models::Transaction;
use api::models::TrendPoint;
use api::prefs::view_preference::RefreshPolicy;
use api::theme::Theme;
use api::ApiError;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;
use futures::future::ready;
use futures::future::Either;

pub use cache::RawCache;
use surfaces::transaction_rows;
use surfaces::StatsView;
use surfaces::SurfaceSink;

use crate::charts::bar_chart;
use crate::charts::category_chart;
use crate::charts::trend_chart;
use crate::charts::ChartBackend;
use crate::charts::ChartRegistry;
use crate::charts::ChartSurface;
use crate::view_state::ViewState;

/// The four independent backend reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum DataSource {
    Stats,
    Recent,
    Trend,
    Breakdown,
}

/// What happened to one data source during a refresh.
#[derive(Debug, Clone, PartialEq)]
enum Settled {
    Drawn,
    Failed(ApiError),
    Superseded,
}

/// Summary of one refresh or redraw.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RefreshOutcome {
    pub generation: u64,
    /// False when the surfaces were redrawn from cache without any fetch.
    pub fetched: bool,
    pub drawn: Vec<DataSource>,
    pub failed: Vec<(DataSource, ApiError)>,
    /// Set when a newer generation started before this one's data arrived.
    pub superseded: bool,
}

impl RefreshOutcome {
    fn record(&mut self, source: DataSource, settled: Settled) {
        match settled {
            Settled::Drawn => self.drawn.push(source),
            Settled::Failed(e) => self.failed.push((source, e)),
            Settled::Superseded => self.superseded = true,
        }
    }
}

pub struct RenderPipeline<B, S, C: ChartBackend> {
    backend: Rc<B>,
    sink: S,
    charts: RefCell<ChartRegistry<C>>,
    view: Cell<ViewState>,
    policy: RefreshPolicy,
    generation: Cell<u64>,
    in_flight: Cell<Option<u64>>,
    cache: RefCell<RawCache>,
}

impl<B, S, C> RenderPipeline<B, S, C>
where
    B: DashboardBackend,
    S: SurfaceSink,
    C: ChartBackend,
{
    pub fn new(
        backend: Rc<B>,
        sink: S,
        charts: C,
        view: ViewState,
        policy: RefreshPolicy,
    ) -> Self {
        Self {
            backend,
            sink,
            charts: RefCell::new(ChartRegistry::new(charts)),
            view: Cell::new(view),
            policy,
            generation: Cell::new(0),
            in_flight: Cell::new(None),
            cache: RefCell::new(RawCache::default()),
        }
    }

    pub fn view(&self) -> ViewState {
        self.view.get()
    }

    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    pub fn backend(&self) -> &Rc<B> {
        &self.backend
    }

    pub fn is_refreshing(&self) -> bool {
        self.in_flight.get().is_some()
    }

    /// Re-fetches every data source and redraws all surfaces.
    ///
    /// The view snapshot and generation are taken here, before the returned
    /// future is first polled.
    pub fn refresh_all(&self) -> impl Future<Output = RefreshOutcome> + '_ {
        let snapshot = self.view.get();
        let generation = self.next_generation();
        self.in_flight.set(Some(generation));
        info!(
            "refresh #{} started ({}, {})",
            generation,
            snapshot.currency.code(),
            snapshot.theme.name()
        );
        self.run_refresh(snapshot, generation)
    }

    pub fn on_currency_change(
        &self,
        currency: Currency,
    ) -> impl Future<Output = RefreshOutcome> + '_ {
        self.update_view(self.view.get().with_currency(currency));
        self.propagate_view_change()
    }

    pub fn on_theme_change(&self, theme: Theme) -> impl Future<Output = RefreshOutcome> + '_ {
        self.update_view(self.view.get().with_theme(theme));
        self.propagate_view_change()
    }

    /// Validates and submits a new expense, then refreshes everything.
    ///
    /// `submitted` receives the submission result as soon as the backend has
    /// answered, before the refresh starts. Invalid input is rejected before
    /// any request is made. Returns `None` when nothing was refreshed.
    pub async fn on_expense_added(
        &self,
        form: ExpenseForm,
        submitted: impl FnOnce(Result<(), ApiError>),
    ) -> Option<RefreshOutcome> {
        match self.submit_expense(form).await {
            Ok(()) => {
                submitted(Ok(()));
                Some(self.refresh_all().await)
            }
            Err(e) => {
                submitted(Err(e));
                None
            }
        }
    }

    async fn submit_expense(&self, form: ExpenseForm) -> Result<(), ApiError> {
        let expense = form.validate()?;
        self.backend.add_expense(&expense).await?;
        info!("expense added: {} in {}", expense.amount, expense.category);
        Ok(())
    }

    /// Destroys every chart. Results still in flight are ignored afterwards.
    pub fn teardown(&self) {
        self.next_generation();
        self.in_flight.set(None);
        self.charts.borrow_mut().clear();
        debug!("dashboard torn down");
    }

    fn update_view(&self, view: ViewState) {
        self.view.set(view);
        self.sink.view_changed(view);
    }

    fn propagate_view_change(&self) -> impl Future<Output = RefreshOutcome> + '_ {
        let must_fetch = self.policy.is_refetch()
            || self.is_refreshing()
            || !self.cache.borrow().is_complete();
        if must_fetch {
            Either::Left(self.refresh_all())
        } else {
            Either::Right(ready(self.redraw_cached()))
        }
    }

    fn next_generation(&self) -> u64 {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        generation
    }

    fn is_superseded(&self, generation: u64) -> bool {
        self.generation.get() != generation
    }

    async fn run_refresh(&self, snapshot: ViewState, generation: u64) -> RefreshOutcome {
        let (stats, recent, trend, breakdown) = tokio::join!(
            self.load_stats(snapshot, generation),
            self.load_recent(snapshot, generation),
            self.load_trend(snapshot, generation),
            self.load_breakdown(snapshot, generation),
        );

        if self.in_flight.get() == Some(generation) {
            self.in_flight.set(None);
        }

        let mut outcome = RefreshOutcome {
            generation,
            fetched: true,
            ..Default::default()
        };
        outcome.record(DataSource::Stats, stats);
        outcome.record(DataSource::Recent, recent);
        outcome.record(DataSource::Trend, trend);
        outcome.record(DataSource::Breakdown, breakdown);

        if outcome.superseded {
            debug!("refresh #{} superseded by #{}", generation, self.generation.get());
        } else {
            info!(
                "refresh #{} finished: {} drawn, {} failed",
                generation,
                outcome.drawn.len(),
                outcome.failed.len()
            );
        }
        outcome
    }

    /// Redraws every cached surface with the current view, without fetching.
    fn redraw_cached(&self) -> RefreshOutcome {
        let snapshot = self.view.get();
        let generation = self.next_generation();
        let cache = self.cache.borrow();
        let mut outcome = RefreshOutcome {
            generation,
            fetched: false,
            ..Default::default()
        };

        if let Some(stats) = &cache.stats {
            self.draw_stats(stats, snapshot);
            outcome.drawn.push(DataSource::Stats);
        }
        if let Some(recent) = &cache.recent {
            self.draw_recent(recent, snapshot);
            outcome.drawn.push(DataSource::Recent);
        }
        if let Some(trend) = &cache.trend {
            self.draw_trend(trend, snapshot);
            outcome.drawn.push(DataSource::Trend);
        }
        if let Some(breakdown) = &cache.breakdown {
            self.draw_breakdown(breakdown, snapshot);
            outcome.drawn.push(DataSource::Breakdown);
        }
        debug!("redraw #{} from cache", generation);
        outcome
    }

    async fn load_stats(&self, snapshot: ViewState, generation: u64) -> Settled {
        let result = self.backend.fetch_stats().await;
        self.settle(DataSource::Stats, generation, result, |stats| {
            self.draw_stats(&stats, snapshot);
            self.cache.borrow_mut().stats = Some(stats);
        })
    }

    async fn load_recent(&self, snapshot: ViewState, generation: u64) -> Settled {
        let result = self.backend.fetch_recent().await;
        self.settle(DataSource::Recent, generation, result, |recent| {
            self.draw_recent(&recent, snapshot);
            self.cache.borrow_mut().recent = Some(recent);
        })
    }

    async fn load_trend(&self, snapshot: ViewState, generation: u64) -> Settled {
        let result = self.backend.fetch_trend().await;
        self.settle(DataSource::Trend, generation, result, |trend| {
            self.draw_trend(&trend, snapshot);
            self.cache.borrow_mut().trend = Some(trend);
        })
    }

    async fn load_breakdown(&self, snapshot: ViewState, generation: u64) -> Settled {
        let result = self.backend.fetch_category_breakdown().await;
        self.settle(DataSource::Breakdown, generation, result, |breakdown| {
            self.draw_breakdown(&breakdown, snapshot);
            self.cache.borrow_mut().breakdown = Some(breakdown);
        })
    }

    /// Draws and caches a fetched value unless its generation is stale.
    /// A failure leaves the surface as it was.
    fn settle<T>(
        &self,
        source: DataSource,
        generation: u64,
        result: Result<T, ApiError>,
        apply: impl FnOnce(T),
    ) -> Settled {
        let name: &'static str = source.into();
        if self.is_superseded(generation) {
            debug!("dropping {} from refresh #{}", name, generation);
            return Settled::Superseded;
        }
        match result {
            Ok(data) => {
                apply(data);
                Settled::Drawn
            }
            Err(e) => {
                warn!("{} unavailable, keeping previous content: {}", name, e);
                Settled::Failed(e)
            }
        }
    }

    fn draw_stats(&self, stats: &Stats, view: ViewState) {
        self.sink.show_stats(StatsView::render(stats, view));
    }

    fn draw_recent(&self, recent: &[Transaction], view: ViewState) {
        self.sink.show_transactions(transaction_rows(recent, view));
    }

    fn draw_trend(&self, trend: &[TrendPoint], view: ViewState) {
        self.charts
            .borrow_mut()
            .replace(ChartSurface::Trend, &trend_chart(trend, view));
    }

    fn draw_breakdown(&self, breakdown: &[CategoryTotal], view: ViewState) {
        let mut charts = self.charts.borrow_mut();
        charts.replace(ChartSurface::Category, &category_chart(breakdown, view));
        charts.replace(ChartSurface::Bar, &bar_chart(breakdown, view));
    }
}
