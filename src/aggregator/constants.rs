use std::collections::HashMap;
use std::sync::LazyLock;

/// Reference quantity the catalog baselines are normalized to (100 g/ml).
pub const REFERENCE_QUANTITY: f64 = 100.0;

/// Atwater factors: kcal per gram of each macronutrient.
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Relative difference between declared and estimated calories that raises
/// a warning.
pub const CONSISTENCY_WARNING_FRACTION: f64 = 0.10;

/// Relative difference that raises an error.
pub const CONSISTENCY_ERROR_FRACTION: f64 = 0.20;

/// Absolute estimated-kcal floor used when declared calories are zero and
/// the relative check cannot run (one Atwater gram-equivalent).
pub const ZERO_DECLARED_KCAL_FLOOR: f64 = 4.0;

/// Days in the planning week; weekly averages always divide by this.
pub const DAYS_PER_WEEK: u8 = 7;

/// Map from day of week (1 = Lunedì) to display name.
pub static DAY_NAMES: LazyLock<HashMap<u8, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert(1, "Lunedì");
    m.insert(2, "Martedì");
    m.insert(3, "Mercoledì");
    m.insert(4, "Giovedì");
    m.insert(5, "Venerdì");
    m.insert(6, "Sabato");
    m.insert(7, "Domenica");
    m
});

/// Get the display name for a day of week.
pub fn day_name(day: u8) -> &'static str {
    DAY_NAMES.get(&day).unwrap_or(&"Giorno sconosciuto")
}
