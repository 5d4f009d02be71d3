use assert_float_eq::assert_f64_near;

use nutri_house_rs::aggregator::{
    compute_contribution, duplicate_plan, group_by_day, summarize_plan,
    validate_calorie_consistency, ConsistencySeverity, ConsistencyThresholds,
};
use nutri_house_rs::models::{FoodNutrientProfile, MealType, PlanLineItem, Unit};

fn make_profile(id: u64, name: &str, cal: f64, prot: f64, carbs: f64, fat: f64) -> FoodNutrientProfile {
    FoodNutrientProfile {
        id,
        name: name.to_string(),
        calories: cal,
        protein: prot,
        carbs,
        fat,
        photo_url: None,
    }
}

fn make_item(id: u64, day: u8, meal: MealType, cal: f64, prot: f64, carbs: f64, fats: f64) -> PlanLineItem {
    PlanLineItem {
        id,
        patient_id: 1,
        title: "Piano Settimanale".to_string(),
        notes: None,
        day_of_week: day,
        meal_type: meal,
        food_id: id,
        food_name: format!("Food {id}"),
        quantity: 100.0,
        unit: Unit::G,
        calories: cal,
        proteins: prot,
        carbs,
        fats,
    }
}

#[test]
fn test_contribution_matches_profile_ratio_exactly() {
    let profile = make_profile(1, "Riso", 360.0, 7.0, 80.0, 0.6);

    for quantity in [1.0, 42.5, 100.0, 250.0] {
        let c = compute_contribution(&profile, quantity, Unit::G).unwrap();
        assert_eq!(c.calories, profile.calories * quantity / 100.0);
        assert_eq!(c.proteins, profile.protein * quantity / 100.0);
        assert_eq!(c.carbs, profile.carbs * quantity / 100.0);
        assert_eq!(c.fats, profile.fat * quantity / 100.0);
    }
}

#[test]
fn test_chicken_breast_scenario() {
    // 150 g of chicken breast (165 kcal / 31 P / 0 C / 3.6 F per 100 g).
    let profile = make_profile(2, "Petto di pollo", 165.0, 31.0, 0.0, 3.6);
    let c = compute_contribution(&profile, 150.0, Unit::G).unwrap();

    assert_f64_near!(c.calories, 247.5);
    assert_f64_near!(c.proteins, 46.5);
    assert_eq!(c.carbs, 0.0);
    assert_f64_near!(c.fats, 5.4);
}

#[test]
fn test_contribution_linearity() {
    let profile = make_profile(3, "Lenticchie", 116.0, 9.0, 20.0, 0.4);

    let single = compute_contribution(&profile, 73.0, Unit::Porzione).unwrap();
    let double = compute_contribution(&profile, 146.0, Unit::Porzione).unwrap();

    assert_eq!(double.calories, single.calories * 2.0);
    assert_eq!(double.proteins, single.proteins * 2.0);
    assert_eq!(double.carbs, single.carbs * 2.0);
    assert_eq!(double.fats, single.fats * 2.0);
}

#[test]
fn test_group_by_day_reconstructs_multiset() {
    let items = vec![
        make_item(1, 1, MealType::Colazione, 300.0, 10.0, 40.0, 8.0),
        make_item(2, 1, MealType::Colazione, 120.0, 4.0, 20.0, 2.0),
        make_item(3, 4, MealType::Pranzo, 650.0, 35.0, 70.0, 18.0),
        make_item(4, 7, MealType::Cena, 550.0, 40.0, 30.0, 20.0),
    ];

    let groups = group_by_day(&items);

    let mut regrouped: Vec<u64> = groups
        .values()
        .flat_map(|g| g.iter().map(|i| i.id))
        .collect();
    regrouped.sort();

    let mut original: Vec<u64> = items.iter().map(|i| i.id).collect();
    original.sort();

    assert_eq!(regrouped, original);
}

#[test]
fn test_days_without_items_are_empty_sequences() {
    // Items on days 1 and 3 only.
    let items = vec![
        make_item(1, 1, MealType::Colazione, 300.0, 10.0, 40.0, 8.0),
        make_item(2, 3, MealType::Pranzo, 650.0, 35.0, 70.0, 18.0),
    ];

    let groups = group_by_day(&items);
    assert_eq!(groups[&1].len(), 1);
    assert_eq!(groups[&3].len(), 1);
    assert!(groups[&2].is_empty());
    for day in [4, 5, 6, 7] {
        assert!(groups[&day].is_empty());
    }
}

#[test]
fn test_empty_plan_summary_is_zero() {
    let summary = summarize_plan(&[]);
    assert_eq!(summary.total_items, 0);
    assert_eq!(summary.total_nutrition.calories, 0.0);
    assert_eq!(summary.total_nutrition.proteins, 0.0);
    assert_eq!(summary.total_nutrition.carbs, 0.0);
    assert_eq!(summary.total_nutrition.fats, 0.0);
}

#[test]
fn test_summary_calories_equal_item_sum() {
    let items = vec![
        make_item(1, 1, MealType::Colazione, 310.5, 12.0, 45.0, 9.0),
        make_item(2, 2, MealType::Merenda, 95.25, 2.0, 18.0, 1.5),
        make_item(3, 5, MealType::Cena, 720.0, 55.0, 60.0, 25.0),
    ];

    let summary = summarize_plan(&items);
    let by_hand: f64 = items.iter().map(|i| i.calories).sum();
    assert_eq!(summary.total_nutrition.calories, by_hand);
    assert_eq!(summary.total_items, 3);
}

#[test]
fn test_weekly_average_spreads_over_seven_days() {
    // A single 1400 kcal item still averages 200 kcal/day over the week.
    let items = vec![make_item(1, 2, MealType::Pranzo, 1400.0, 70.0, 140.0, 35.0)];

    let summary = summarize_plan(&items);
    assert_f64_near!(summary.avg_daily.calories, 200.0);
    assert_f64_near!(summary.avg_daily.proteins, 10.0);
}

#[test]
fn test_duplicate_changes_only_title_and_id() {
    let items = vec![
        make_item(1, 1, MealType::Colazione, 300.0, 10.0, 40.0, 8.0),
        make_item(2, 4, MealType::Cena, 550.0, 40.0, 30.0, 20.0),
    ];
    let before = items.clone();

    let copies = duplicate_plan(&items, "Piano Copia", &[], 50).unwrap();

    assert_eq!(copies.len(), items.len());
    for (copy, original) in copies.iter().zip(&items) {
        assert_eq!(copy.title, "Piano Copia");
        assert_ne!(copy.id, original.id);

        assert_eq!(copy.patient_id, original.patient_id);
        assert_eq!(copy.day_of_week, original.day_of_week);
        assert_eq!(copy.meal_type, original.meal_type);
        assert_eq!(copy.food_id, original.food_id);
        assert_eq!(copy.food_name, original.food_name);
        assert_eq!(copy.quantity, original.quantity);
        assert_eq!(copy.unit, original.unit);
        assert_eq!(copy.calories, original.calories);
        assert_eq!(copy.proteins, original.proteins);
        assert_eq!(copy.carbs, original.carbs);
        assert_eq!(copy.fats, original.fats);
    }

    // The source sequence is unchanged after the call.
    assert_eq!(items, before);
}

#[test]
fn test_consistency_scenario_pure_fat_mismatch() {
    // Declared 100 kcal but 20 g fat estimates 180 kcal: 80% off -> error.
    let report = validate_calorie_consistency(
        100.0,
        0.0,
        0.0,
        20.0,
        &ConsistencyThresholds::default(),
    );

    assert_f64_near!(report.estimated_calories, 180.0);
    assert_f64_near!(report.difference, 80.0);
    assert_f64_near!(report.percent_difference.unwrap(), 80.0);
    assert_eq!(report.severity, ConsistencySeverity::Error);
}
