//! Reports module for fintrack
//!
//! Pure aggregation functions over transaction and budget snapshots:
//! monthly income/expense series, category breakdowns, budget-vs-actual
//! comparisons, and monthly summary totals. Every function takes borrowed
//! slices, retains nothing, and returns a fresh, serializable structure
//! ready to hand to any chart or table renderer.

pub mod budget_comparison;
pub mod category_breakdown;
pub mod monthly_series;
pub mod summary;

pub use budget_comparison::{BudgetComparison, BudgetStatus};
pub use category_breakdown::{CategoryBreakdown, DEFAULT_TOP_N};
pub use monthly_series::MonthlySeries;
pub use summary::MonthlySummary;
