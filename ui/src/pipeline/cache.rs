use api::models::CategoryTotal;
use api::models::Stats;
use api::models::Transaction;
use api::models::TrendPoint;

/// The last successful response of each data source, exactly as received.
///
/// Amounts stay in the base currency here; conversion only happens while
/// drawing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawCache {
    pub stats: Option<Stats>,
    pub recent: Option<Vec<Transaction>>,
    pub trend: Option<Vec<TrendPoint>>,
    pub breakdown: Option<Vec<CategoryTotal>>,
}

impl RawCache {
    /// True once every source has been loaded at least once.
    pub fn is_complete(&self) -> bool {
        self.stats.is_some()
            && self.recent.is_some()
            && self.trend.is_some()
            && self.breakdown.is_some()
    }
}
