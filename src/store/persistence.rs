use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::models::{FoodNutrientProfile, PlanLineItem};

/// Load catalog entries from a JSON file.
pub fn load_foods<P: AsRef<Path>>(path: P) -> Result<Vec<FoodNutrientProfile>> {
    let content = fs::read_to_string(path)?;
    let foods: Vec<FoodNutrientProfile> = serde_json::from_str(&content)?;
    Ok(foods)
}

/// Save catalog entries to a JSON file.
pub fn save_foods<P: AsRef<Path>>(path: P, foods: &[FoodNutrientProfile]) -> Result<()> {
    let json = serde_json::to_string_pretty(foods)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load plan line items from a JSON file.
pub fn load_plan_items<P: AsRef<Path>>(path: P) -> Result<Vec<PlanLineItem>> {
    let content = fs::read_to_string(path)?;
    let items: Vec<PlanLineItem> = serde_json::from_str(&content)?;
    Ok(items)
}

/// Save plan line items to a JSON file.
pub fn save_plan_items<P: AsRef<Path>>(path: P, items: &[PlanLineItem]) -> Result<()> {
    let json = serde_json::to_string_pretty(items)?;
    fs::write(path, json)?;
    Ok(())
}

/// One row of a catalog CSV import.
#[derive(Debug, Deserialize)]
struct CsvFoodRow {
    name: String,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    #[serde(default, rename = "photoUrl")]
    photo_url: Option<String>,
}

/// Import catalog entries from a CSV file.
///
/// Expected header: `name,calories,protein,carbs,fat[,photoUrl]`. Imported
/// profiles carry id 0; the catalog assigns real ids as they are added.
pub fn import_foods_csv<P: AsRef<Path>>(path: P) -> Result<Vec<FoodNutrientProfile>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut foods = Vec::new();

    for row in reader.deserialize() {
        let row: CsvFoodRow = row?;
        foods.push(FoodNutrientProfile {
            id: 0,
            name: row.name,
            calories: row.calories,
            protein: row.protein,
            carbs: row.carbs,
            fat: row.fat,
            photo_url: row.photo_url.filter(|u| !u.is_empty()),
        });
    }

    Ok(foods)
}

/// Export catalog entries to a CSV file with the import header.
pub fn export_foods_csv<P: AsRef<Path>>(path: P, foods: &[FoodNutrientProfile]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["name", "calories", "protein", "carbs", "fat", "photoUrl"])?;
    for food in foods {
        wtr.write_record([
            food.name.clone(),
            format!("{}", food.calories),
            format!("{}", food.protein),
            format!("{}", food.carbs),
            format!("{}", food.fat),
            food.photo_url.clone().unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
