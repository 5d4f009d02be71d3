use serde::{Deserialize, Serialize};

/// A food catalog entry with nutrient values per 100 g/ml.
///
/// Nutrient fields are the reference baseline: calories in kcal, macros in
/// grams, all for 100 units of the food.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodNutrientProfile {
    pub id: u64,

    pub name: String,

    pub calories: f64,

    pub protein: f64,

    pub carbs: f64,

    pub fat: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl FoodNutrientProfile {
    /// Basic validation: non-empty name and non-negative nutrient values.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.calories >= 0.0
            && self.protein >= 0.0
            && self.carbs >= 0.0
            && self.fat >= 0.0
    }

    /// Canonical key for name lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Element-wise nutrient totals: the crate-wide aggregate value type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientTotals {
    pub calories: f64,
    pub proteins: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl NutrientTotals {
    /// Add another set of totals element-wise.
    pub fn add(&mut self, other: &NutrientTotals) {
        self.calories += other.calories;
        self.proteins += other.proteins;
        self.carbs += other.carbs;
        self.fats += other.fats;
    }

    /// Scale every field by a factor.
    pub fn scale(&self, factor: f64) -> NutrientTotals {
        NutrientTotals {
            calories: self.calories * factor,
            proteins: self.proteins * factor,
            carbs: self.carbs * factor,
            fats: self.fats * factor,
        }
    }

    /// True when every field is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.calories == 0.0 && self.proteins == 0.0 && self.carbs == 0.0 && self.fats == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> FoodNutrientProfile {
        FoodNutrientProfile {
            id: 1,
            name: "Petto di pollo".to_string(),
            calories: 165.0,
            protein: 31.0,
            carbs: 0.0,
            fat: 3.6,
            photo_url: None,
        }
    }

    #[test]
    fn test_is_valid() {
        let profile = sample_profile();
        assert!(profile.is_valid());

        let mut negative = sample_profile();
        negative.fat = -1.0;
        assert!(!negative.is_valid());

        let mut blank = sample_profile();
        blank.name = "   ".to_string();
        assert!(!blank.is_valid());
    }

    #[test]
    fn test_totals_add_and_scale() {
        let mut totals = NutrientTotals::default();
        assert!(totals.is_zero());

        totals.add(&NutrientTotals {
            calories: 100.0,
            proteins: 10.0,
            carbs: 20.0,
            fats: 5.0,
        });
        totals.add(&NutrientTotals {
            calories: 50.0,
            proteins: 5.0,
            carbs: 10.0,
            fats: 2.5,
        });

        assert_eq!(totals.calories, 150.0);
        assert_eq!(totals.proteins, 15.0);

        let halved = totals.scale(0.5);
        assert_eq!(halved.calories, 75.0);
        assert_eq!(halved.fats, 3.75);
    }

    #[test]
    fn test_profile_json_field_names() {
        let profile = FoodNutrientProfile {
            photo_url: Some("http://example.com/pollo.jpg".to_string()),
            ..sample_profile()
        };
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"photoUrl\""));
        assert!(json.contains("\"calories\""));
    }
}
