use std::collections::BTreeMap;

use crate::aggregator::constants::DAYS_PER_WEEK;
use crate::models::{MealType, NutrientTotals, PlanLineItem};

/// Group items by day of week.
///
/// The map always carries all 7 day keys; days with no items map to an empty
/// list, so callers can render "no items for this day" without probing for
/// missing keys. Input order is preserved within each group.
pub fn group_by_day(items: &[PlanLineItem]) -> BTreeMap<u8, Vec<&PlanLineItem>> {
    let mut groups: BTreeMap<u8, Vec<&PlanLineItem>> = (1..=DAYS_PER_WEEK)
        .map(|day| (day, Vec::new()))
        .collect();

    for item in items {
        groups.entry(item.day_of_week).or_default().push(item);
    }

    groups
}

/// Group items by meal type, in daily meal order.
///
/// Same convention as [`group_by_day`]: all 6 meal keys are present, empty
/// meals map to an empty list, input order is preserved within each group.
pub fn group_by_meal_type(items: &[PlanLineItem]) -> BTreeMap<MealType, Vec<&PlanLineItem>> {
    let mut groups: BTreeMap<MealType, Vec<&PlanLineItem>> = MealType::ALL
        .into_iter()
        .map(|meal| (meal, Vec::new()))
        .collect();

    for item in items {
        groups.entry(item.meal_type).or_default().push(item);
    }

    groups
}

/// Nutrient totals per meal of a single day, in daily meal order.
pub fn meal_totals_for_day(items: &[PlanLineItem], day: u8) -> BTreeMap<MealType, NutrientTotals> {
    let mut totals: BTreeMap<MealType, NutrientTotals> = MealType::ALL
        .into_iter()
        .map(|meal| (meal, NutrientTotals::default()))
        .collect();

    for item in items.iter().filter(|i| i.day_of_week == day) {
        if let Some(t) = totals.get_mut(&item.meal_type) {
            t.add(&item.totals());
        }
    }

    totals
}
