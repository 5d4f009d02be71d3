use crate::aggregator::{
    day_name, group_by_day, group_by_meal_type, ConsistencyReport, ConsistencySeverity,
};
use crate::models::{FoodNutrientProfile, PlanLineItem, PlanSummary};
use crate::store::BatchOutcome;

/// Display a plan day by day, meals in daily order within each day.
pub fn display_plan(title: &str, items: &[PlanLineItem]) {
    println!();
    println!("=== {} ({} items) ===", title, items.len());

    let by_day = group_by_day(items);

    for (day, day_items) in &by_day {
        println!();
        println!("--- {} ---", day_name(*day));

        if day_items.is_empty() {
            println!("  (no items)");
            continue;
        }

        let mut ordered: Vec<&&PlanLineItem> = day_items.iter().collect();
        ordered.sort_by_key(|i| (i.meal_type.order(), i.id));

        let max_name_len = ordered
            .iter()
            .map(|i| i.food_name.len())
            .max()
            .unwrap_or(10);

        for item in ordered {
            println!(
                "  {:<16} {:<width$} {:>7.1} {:<9} | {:>6.1} kcal  P:{:.1} C:{:.1} F:{:.1}",
                item.meal_type.display_name(),
                item.food_name,
                item.quantity,
                item.unit.code(),
                item.calories,
                item.proteins,
                item.carbs,
                item.fats,
                width = max_name_len
            );
        }
    }

    println!();
}

/// Display a plan regrouped by meal type across the week.
pub fn display_plan_by_meal(title: &str, items: &[PlanLineItem]) {
    println!();
    println!("=== {} by meal ({} items) ===", title, items.len());

    let by_meal = group_by_meal_type(items);

    for (meal, meal_items) in &by_meal {
        println!();
        println!("--- {} ({}) ---", meal.display_name(), meal.default_time());

        if meal_items.is_empty() {
            println!("  (no items)");
            continue;
        }

        for item in meal_items {
            println!(
                "  {:<10} {} - {:.1} {} | {:.1} kcal",
                day_name(item.day_of_week),
                item.food_name,
                item.quantity,
                item.unit.code(),
                item.calories,
            );
        }
    }

    println!();
}

/// Display a plan summary block.
pub fn display_summary(title: &str, summary: &PlanSummary) {
    println!();
    println!("--- Summary: {} ---", title);
    println!("Total items: {}", summary.total_items);
    println!(
        "Weekly totals: {:.0} kcal | P:{:.1} g C:{:.1} g F:{:.1} g",
        summary.total_nutrition.calories,
        summary.total_nutrition.proteins,
        summary.total_nutrition.carbs,
        summary.total_nutrition.fats,
    );
    println!(
        "Daily average: {:.0} kcal | P:{:.1} g C:{:.1} g F:{:.1} g",
        summary.avg_daily.calories,
        summary.avg_daily.proteins,
        summary.avg_daily.carbs,
        summary.avg_daily.fats,
    );
    println!();
}

/// Display a list of catalog entries.
pub fn display_food_list(foods: &[&FoodNutrientProfile], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    let max_name_len = foods.iter().map(|f| f.name.len()).max().unwrap_or(10);

    for food in foods {
        println!(
            "  [{:>4}] {:<width$} {:>7.1} kcal  P:{:.1} C:{:.1} F:{:.1}",
            food.id,
            food.name,
            food.calories,
            food.protein,
            food.carbs,
            food.fat,
            width = max_name_len
        );
    }

    println!();
}

/// Display a calorie consistency report for a food.
pub fn display_consistency_report(food: &FoodNutrientProfile, report: &ConsistencyReport) {
    println!();
    println!("--- Consistency check: {} ---", food.name);
    println!("Declared calories:  {:.1} kcal / 100", food.calories);
    println!("Estimated calories: {:.1} kcal / 100", report.estimated_calories);
    match report.percent_difference {
        Some(percent) => println!(
            "Difference: {:.1} kcal ({:.1}%)",
            report.difference, percent
        ),
        None => println!("Difference: {:.1} kcal", report.difference),
    }

    match report.severity {
        ConsistencySeverity::Ok => println!("Declared calories are consistent with the macros."),
        ConsistencySeverity::Warning => {
            println!("Warning: declared calories look inconsistent with the macros.")
        }
        ConsistencySeverity::Error => {
            println!("Error: declared calories are inconsistent with the macros.")
        }
    }
    println!();
}

/// Display the outcome of a batch insert.
pub fn display_batch_outcome(outcome: &BatchOutcome) {
    println!(
        "Inserted {} items, {} failed.",
        outcome.inserted.len(),
        outcome.failures.len()
    );
    for failure in &outcome.failures {
        println!("  item #{}: {}", failure.index + 1, failure.error);
    }
}
