use serde::{Deserialize, Serialize};

use crate::error::{NutriError, Result};
use crate::models::NutrientTotals;

/// The six daily eating occasions of a plan.
///
/// Serialized names are a persistence contract: prior stored plans carry
/// them verbatim, so they never change even if display names do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MealType {
    Colazione,
    SpuntinoMattina,
    Pranzo,
    Merenda,
    Cena,
    SpuntinoSera,
}

impl MealType {
    /// All meal types in daily order.
    pub const ALL: [MealType; 6] = [
        MealType::Colazione,
        MealType::SpuntinoMattina,
        MealType::Pranzo,
        MealType::Merenda,
        MealType::Cena,
        MealType::SpuntinoSera,
    ];

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            MealType::Colazione => "Colazione",
            MealType::SpuntinoMattina => "Spuntino Mattina",
            MealType::Pranzo => "Pranzo",
            MealType::Merenda => "Merenda",
            MealType::Cena => "Cena",
            MealType::SpuntinoSera => "Spuntino Sera",
        }
    }

    /// Default time of day for this meal.
    pub fn default_time(&self) -> &'static str {
        match self {
            MealType::Colazione => "08:00",
            MealType::SpuntinoMattina => "10:30",
            MealType::Pranzo => "13:00",
            MealType::Merenda => "16:30",
            MealType::Cena => "20:00",
            MealType::SpuntinoSera => "22:00",
        }
    }

    /// Position of the meal in the day (1 = first).
    pub fn order(&self) -> u8 {
        match self {
            MealType::Colazione => 1,
            MealType::SpuntinoMattina => 2,
            MealType::Pranzo => 3,
            MealType::Merenda => 4,
            MealType::Cena => 5,
            MealType::SpuntinoSera => 6,
        }
    }

    /// True for colazione, pranzo and cena.
    pub fn is_main_meal(&self) -> bool {
        matches!(self, MealType::Colazione | MealType::Pranzo | MealType::Cena)
    }

    pub fn is_snack(&self) -> bool {
        !self.is_main_meal()
    }

    /// Find a meal type from its display name (case-insensitive).
    pub fn from_display_name(name: &str) -> Option<MealType> {
        Self::ALL
            .into_iter()
            .find(|m| m.display_name().eq_ignore_ascii_case(name))
    }
}

/// Measurement unit for a plan line item.
///
/// Serialized names (`g`, `ml`, `pz`, ...) are a persistence contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    G,
    Ml,
    Pz,
    Porzione,
    Tazza,
    Cucchiaio,
    Cucchiaino,
}

impl Unit {
    pub const ALL: [Unit; 7] = [
        Unit::G,
        Unit::Ml,
        Unit::Pz,
        Unit::Porzione,
        Unit::Tazza,
        Unit::Cucchiaio,
        Unit::Cucchiaino,
    ];

    /// Short code as stored and displayed next to quantities.
    pub fn code(&self) -> &'static str {
        match self {
            Unit::G => "g",
            Unit::Ml => "ml",
            Unit::Pz => "pz",
            Unit::Porzione => "porzione",
            Unit::Tazza => "tazza",
            Unit::Cucchiaio => "cucchiaio",
            Unit::Cucchiaino => "cucchiaino",
        }
    }

    /// Long Italian name for prompts.
    pub fn display_name(&self) -> &'static str {
        match self {
            Unit::G => "grammi",
            Unit::Ml => "millilitri",
            Unit::Pz => "pezzi",
            Unit::Porzione => "porzione",
            Unit::Tazza => "tazza",
            Unit::Cucchiaio => "cucchiaio",
            Unit::Cucchiaino => "cucchiaino",
        }
    }

    /// Parse a unit from its short code (case-insensitive).
    pub fn from_code(code: &str) -> Option<Unit> {
        Self::ALL
            .into_iter()
            .find(|u| u.code().eq_ignore_ascii_case(code))
    }
}

/// One food-to-slot assignment within a diet plan.
///
/// The nutrient fields are computed from the food's profile when the item is
/// created and stored alongside it, so historical plans stay stable even if
/// the catalog entry changes later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanLineItem {
    pub id: u64,

    pub patient_id: u64,

    /// Plan title; a patient may have several plans told apart by title.
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Day of week, 1 = Lunedì through 7 = Domenica.
    pub day_of_week: u8,

    pub meal_type: MealType,

    pub food_id: u64,

    /// Cached food name, avoids a catalog lookup on every render.
    pub food_name: String,

    pub quantity: f64,

    pub unit: Unit,

    pub calories: f64,

    pub proteins: f64,

    pub carbs: f64,

    pub fats: f64,
}

impl PlanLineItem {
    /// Stored nutrient contribution of this item.
    pub fn totals(&self) -> NutrientTotals {
        NutrientTotals {
            calories: self.calories,
            proteins: self.proteins,
            carbs: self.carbs,
            fats: self.fats,
        }
    }
}

/// A line item as entered at the boundary, before the store resolves the
/// food and assigns an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanLineItemDraft {
    pub patient_id: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub day_of_week: u8,
    pub meal_type: MealType,
    pub food_id: u64,
    pub quantity: f64,
    pub unit: Unit,
}

impl PlanLineItemDraft {
    /// Validate the draft before it enters the store.
    pub fn validate(&self) -> Result<()> {
        if self.patient_id == 0 {
            return Err(NutriError::InvalidDraft("patient id is required".to_string()));
        }
        if self.title.trim().is_empty() {
            return Err(NutriError::InvalidDraft("plan title is required".to_string()));
        }
        if !(1..=7).contains(&self.day_of_week) {
            return Err(NutriError::InvalidDraft(format!(
                "day of week must be between 1 and 7, got {}",
                self.day_of_week
            )));
        }
        if !self.quantity.is_finite() || self.quantity <= 0.0 {
            return Err(NutriError::InvalidQuantity(self.quantity));
        }
        Ok(())
    }
}

/// Partial update for an existing line item; only present fields overwrite.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanLineItemUpdate {
    pub title: Option<String>,
    pub notes: Option<String>,
    pub day_of_week: Option<u8>,
    pub meal_type: Option<MealType>,
    pub food_id: Option<u64>,
    pub quantity: Option<f64>,
    pub unit: Option<Unit>,
}

/// On-demand aggregate over a plan's line items; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    pub total_items: usize,
    pub total_nutrition: NutrientTotals,
    /// Planned daily average over a full week (totals / 7).
    pub avg_daily: NutrientTotals,
}
