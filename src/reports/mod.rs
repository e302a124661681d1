//! Reports module for fintrack
//!
//! Aggregates transactions into period summaries, category breakdowns,
//! predicted-vs-actual splits, monthly history and the dashboard.

pub mod category;
pub mod dashboard;
pub mod history;
pub mod summary;

pub use category::{CategoryBreakdown, CategorySummary};
pub use dashboard::{DashboardReport, MonthReport, WeekReport};
pub use history::{AccumulatedWealthData, MonthlyHistory, MonthlyHistoryData};
pub use summary::{PendingSummary, PeriodSummary, PredictedVsActual};
