use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::aggregator::day_name;
use crate::error::{NutriError, Result};
use crate::models::{FoodNutrientProfile, MealType, PlanLineItemDraft, Unit};
use crate::store::FoodCatalog;

/// Minimum similarity for fuzzy food suggestions.
const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Maximum number of fuzzy suggestions to offer.
const FUZZY_MATCH_LIMIT: usize = 5;

/// Prompt for a yes/no confirmation.
pub fn prompt_yes_no(message: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(message)
        .default(default)
        .interact()?)
}

/// Prompt for the patient id.
pub fn prompt_patient_id() -> Result<u64> {
    let input: String = Input::new().with_prompt("Patient id").interact_text()?;

    let id: u64 = input
        .trim()
        .parse()
        .map_err(|_| NutriError::InvalidInput("Invalid patient id".to_string()))?;
    if id == 0 {
        return Err(NutriError::InvalidInput(
            "Patient id must be positive".to_string(),
        ));
    }
    Ok(id)
}

/// Prompt for a plan title.
pub fn prompt_plan_title() -> Result<String> {
    let input: String = Input::new().with_prompt("Plan title").interact_text()?;

    let title = input.trim().to_string();
    if title.is_empty() {
        return Err(NutriError::InvalidInput("Title cannot be empty".to_string()));
    }
    Ok(title)
}

/// Prompt for a day of week, displayed with Italian day names.
pub fn prompt_day() -> Result<u8> {
    let days: Vec<&str> = (1..=7).map(day_name).collect();
    let selection = Select::new()
        .with_prompt("Day of week")
        .items(&days)
        .default(0)
        .interact()?;
    Ok(selection as u8 + 1)
}

/// Prompt for a meal type.
pub fn prompt_meal_type() -> Result<MealType> {
    let labels: Vec<String> = MealType::ALL
        .iter()
        .map(|m| format!("{} ({})", m.display_name(), m.default_time()))
        .collect();
    let selection = Select::new()
        .with_prompt("Meal")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(MealType::ALL[selection])
}

/// Prompt for a measurement unit.
pub fn prompt_unit() -> Result<Unit> {
    let labels: Vec<String> = Unit::ALL
        .iter()
        .map(|u| format!("{} ({})", u.code(), u.display_name()))
        .collect();
    let selection = Select::new()
        .with_prompt("Unit")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Unit::ALL[selection])
}

/// Prompt for a quantity (must be positive).
pub fn prompt_quantity(unit: Unit) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!("Quantity ({})", unit.code()))
        .default("100".to_string())
        .interact_text()?;

    let quantity: f64 = input
        .trim()
        .parse()
        .map_err(|_| NutriError::InvalidInput("Invalid number".to_string()))?;
    if !quantity.is_finite() || quantity <= 0.0 {
        return Err(NutriError::InvalidQuantity(quantity));
    }
    Ok(quantity)
}

/// Prompt for optional item notes.
pub fn prompt_notes() -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt("Notes (optional)")
        .allow_empty(true)
        .interact_text()?;

    let notes = input.trim();
    Ok(if notes.is_empty() {
        None
    } else {
        Some(notes.to_string())
    })
}

/// Prompt for a food by name, with fuzzy suggestions.
///
/// Tries an exact case-insensitive match first, then offers the closest
/// catalog names by Jaro-Winkler similarity. Returns `None` if the user
/// declines every suggestion.
pub fn prompt_food<'a>(catalog: &'a FoodCatalog) -> Result<Option<&'a FoodNutrientProfile>> {
    let input: String = Input::new().with_prompt("Food name").interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    if let Some(food) = catalog.find_by_name(input) {
        return Ok(Some(food));
    }

    // Rank fuzzy candidates
    let mut candidates: Vec<(&FoodNutrientProfile, f64)> = catalog
        .all()
        .into_iter()
        .map(|f| {
            let score = jaro_winkler(&f.name.to_lowercase(), &input.to_lowercase());
            (f, score)
        })
        .filter(|(_, score)| *score >= FUZZY_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.truncate(FUZZY_MATCH_LIMIT);

    if candidates.is_empty() {
        println!("No food matching '{}' in the catalog.", input);
        return Ok(None);
    }

    let mut labels: Vec<String> = candidates
        .iter()
        .map(|(f, _)| format!("{} ({:.0} kcal / 100)", f.name, f.calories))
        .collect();
    labels.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt(format!("Did you mean ('{}' not found)?", input))
        .items(&labels)
        .default(0)
        .interact()?;

    if selection == candidates.len() {
        return Ok(None);
    }
    Ok(Some(candidates[selection].0))
}

/// Interactively collect a full line-item draft.
///
/// Returns `None` if no food could be selected.
pub fn collect_line_item_draft(
    catalog: &FoodCatalog,
    patient_id: u64,
    title: &str,
) -> Result<Option<PlanLineItemDraft>> {
    let Some(food) = prompt_food(catalog)? else {
        return Ok(None);
    };

    let day = prompt_day()?;
    let meal_type = prompt_meal_type()?;
    let unit = prompt_unit()?;
    let quantity = prompt_quantity(unit)?;
    let notes = prompt_notes()?;

    Ok(Some(PlanLineItemDraft {
        patient_id,
        title: title.to_string(),
        notes,
        day_of_week: day,
        meal_type,
        food_id: food.id,
        quantity,
        unit,
    }))
}
