use crate::aggregator::constants::DAYS_PER_WEEK;
use crate::models::{NutrientTotals, PlanLineItem, PlanSummary};

/// Summarize a plan's line items: item count, element-wise nutrient totals
/// and the planned daily average.
///
/// An empty plan yields the zero summary.
pub fn summarize_plan(items: &[PlanLineItem]) -> PlanSummary {
    let mut total = NutrientTotals::default();
    for item in items {
        total.add(&item.totals());
    }

    PlanSummary {
        total_items: items.len(),
        total_nutrition: total,
        avg_daily: daily_average(&total),
    }
}

/// Weekly totals divided by 7, regardless of how many days carry items.
///
/// This is the planned daily average over a full week, not an average over
/// populated days.
pub fn daily_average(total: &NutrientTotals) -> NutrientTotals {
    total.scale(1.0 / DAYS_PER_WEEK as f64)
}
