use crate::aggregator::constants::REFERENCE_QUANTITY;
use crate::error::{NutriError, Result};
use crate::models::{FoodNutrientProfile, NutrientTotals, Unit};

/// Compute the nutrient contribution of `quantity` units of a food.
///
/// Catalog baselines are per 100 g/ml, so each nutrient is scaled by
/// `quantity / 100`. The same ratio is applied for every unit, including the
/// non-mass ones (pz, porzione, tazza, cucchiaio, cucchiaino): there is no
/// unit-to-mass conversion table, the unit acts as a dimensionless scale
/// factor against the food's reference baseline.
///
/// Values keep full precision; rounding happens only at render time.
pub fn compute_contribution(
    profile: &FoodNutrientProfile,
    quantity: f64,
    _unit: Unit,
) -> Result<NutrientTotals> {
    if !quantity.is_finite() || quantity <= 0.0 {
        return Err(NutriError::InvalidQuantity(quantity));
    }

    let ratio = quantity / REFERENCE_QUANTITY;

    Ok(NutrientTotals {
        calories: profile.calories * ratio,
        proteins: profile.protein * ratio,
        carbs: profile.carbs * ratio,
        fats: profile.fat * ratio,
    })
}
