//! Totals derived from a selection.
//!
//! Every function here is a pure reduction over the selected items. Nothing
//! is cached: callers recompute on each query, so totals can never drift from
//! the selection they describe.

use serde::{Deserialize, Serialize};

use crate::models::{BudgetTier, SelectedItem};

/// Sum of the cost of every selected item.
pub fn total_cost(items: &[SelectedItem]) -> f64 {
    items.iter().map(|item| item.cost).sum()
}

/// Sum of the duration of every selected item, in hours.
pub fn total_time(items: &[SelectedItem]) -> f64 {
    items.iter().map(|item| item.duration_hours).sum()
}

/// Daily budget for the whole party.
pub fn daily_group_budget(daily_budget: u32, travelers: u8) -> f64 {
    f64::from(daily_budget) * f64::from(travelers)
}

/// Selected cost as a percentage of the party's daily budget.
///
/// The result is not clamped and may exceed 100. A zero group budget yields
/// zero rather than infinity.
///
/// # Examples
///
/// ```rust
/// use voyage_core::aggregate::budget_utilization;
/// use voyage_core::models::{Category, SelectedItem};
///
/// let items = vec![SelectedItem {
///     id: "r1".to_string(),
///     category: Category::Restaurant,
///     title: "Karim's".to_string(),
///     cost: 800.0,
///     duration_hours: 1.5,
/// }];
///
/// assert_eq!(budget_utilization(&items, 1000, 2), 40.0);
/// ```
pub fn budget_utilization(items: &[SelectedItem], daily_budget: u32, travelers: u8) -> f64 {
    let group_budget = daily_group_budget(daily_budget, travelers);
    if group_budget == 0.0 {
        return 0.0;
    }
    total_cost(items) / group_budget * 100.0
}

/// Whether an item with `id` is part of the selection.
pub fn is_selected(items: &[SelectedItem], id: &str) -> bool {
    items.iter().any(|item| item.id == id)
}

/// Snapshot of the discovery totals shown alongside the catalog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SelectionSummary {
    /// Number of selected items
    pub count: usize,
    /// Total selected cost
    pub total_cost: f64,
    /// Total selected time, in hours
    pub total_hours: f64,
    /// Daily budget for the whole party
    pub group_budget: f64,
    /// Selected cost as a percentage of the group budget
    pub utilization: f64,
}

impl SelectionSummary {
    /// Computes every total from scratch.
    pub fn compute(items: &[SelectedItem], budget: BudgetTier, travelers: u8) -> Self {
        Self {
            count: items.len(),
            total_cost: total_cost(items),
            total_hours: total_time(items),
            group_budget: daily_group_budget(budget.amount(), travelers),
            utilization: budget_utilization(items, budget.amount(), travelers),
        }
    }

    pub fn is_over_budget(&self) -> bool {
        self.utilization > 100.0
    }
}
