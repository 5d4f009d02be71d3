use crate::error::{NutriError, Result};
use crate::models::PlanLineItem;

/// Copy a plan's line items under a new title.
///
/// Every field is copied verbatim — day, meal type, food reference,
/// quantity, unit and the frozen derived nutrients — except the title,
/// which is replaced, and the identity: copies receive sequential fresh ids
/// starting at `first_id`, which the caller guarantees unused. The source
/// items are left untouched.
///
/// The title collision check here is advisory: callers holding live data
/// (the plan store) must repeat it, since two concurrent duplications can
/// still race past this function.
pub fn duplicate_plan(
    source_items: &[PlanLineItem],
    new_title: &str,
    existing_titles: &[String],
    first_id: u64,
) -> Result<Vec<PlanLineItem>> {
    let new_title = new_title.trim();
    if new_title.is_empty() {
        return Err(NutriError::InvalidDraft("plan title is required".to_string()));
    }

    if existing_titles.iter().any(|t| t == new_title) {
        return Err(NutriError::DuplicateTitleConflict(new_title.to_string()));
    }

    Ok(source_items
        .iter()
        .enumerate()
        .map(|(offset, item)| PlanLineItem {
            id: first_id + offset as u64,
            title: new_title.to_string(),
            ..item.clone()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MealType, Unit};

    fn source_items() -> Vec<PlanLineItem> {
        vec![
            PlanLineItem {
                id: 10,
                patient_id: 1,
                title: "Piano Gennaio".to_string(),
                notes: Some("colazione leggera".to_string()),
                day_of_week: 1,
                meal_type: MealType::Colazione,
                food_id: 3,
                food_name: "Yogurt".to_string(),
                quantity: 125.0,
                unit: Unit::G,
                calories: 75.0,
                proteins: 5.0,
                carbs: 6.0,
                fats: 3.0,
            },
            PlanLineItem {
                id: 11,
                patient_id: 1,
                title: "Piano Gennaio".to_string(),
                notes: None,
                day_of_week: 4,
                meal_type: MealType::Cena,
                food_id: 7,
                food_name: "Orata".to_string(),
                quantity: 200.0,
                unit: Unit::G,
                calories: 192.0,
                proteins: 39.0,
                carbs: 0.0,
                fats: 3.4,
            },
        ]
    }

    #[test]
    fn test_copies_fields_and_swaps_title() {
        let source = source_items();
        let copies = duplicate_plan(&source, "Piano Febbraio", &[], 100).unwrap();

        assert_eq!(copies.len(), 2);
        for (copy, original) in copies.iter().zip(&source) {
            assert_eq!(copy.title, "Piano Febbraio");
            assert_eq!(copy.patient_id, original.patient_id);
            assert_eq!(copy.notes, original.notes);
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
    }

    #[test]
    fn test_fresh_sequential_ids() {
        let source = source_items();
        let copies = duplicate_plan(&source, "Piano Febbraio", &[], 100).unwrap();

        let ids: Vec<u64> = copies.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![100, 101]);
        for copy in &copies {
            assert!(source.iter().all(|s| s.id != copy.id));
        }
    }

    #[test]
    fn test_source_is_not_mutated() {
        let source = source_items();
        let before = source.clone();
        let _ = duplicate_plan(&source, "Piano Febbraio", &[], 100).unwrap();
        assert_eq!(source, before);
    }

    #[test]
    fn test_title_collision_rejected() {
        let source = source_items();
        let existing = vec!["Piano Gennaio".to_string(), "Piano Estate".to_string()];

        let result = duplicate_plan(&source, "Piano Estate", &existing, 100);
        assert!(matches!(
            result,
            Err(NutriError::DuplicateTitleConflict(t)) if t == "Piano Estate"
        ));
    }

    #[test]
    fn test_blank_title_rejected() {
        let source = source_items();
        assert!(duplicate_plan(&source, "  ", &[], 100).is_err());
    }

    #[test]
    fn test_empty_source_gives_empty_copy() {
        let copies = duplicate_plan(&[], "Piano Vuoto", &[], 1).unwrap();
        assert!(copies.is_empty());
    }
}
