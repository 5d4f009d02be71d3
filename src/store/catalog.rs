use std::collections::HashMap;

use crate::error::{NutriError, Result};
use crate::models::FoodNutrientProfile;

/// Sort key for catalog searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FoodSortKey {
    #[default]
    Name,
    Calories,
    Protein,
    Carbs,
    Fat,
}

/// Immutable query parameters for a catalog search.
///
/// Built once per search and passed into [`search_foods`]; absent fields
/// leave that dimension unconstrained.
#[derive(Debug, Clone, Default)]
pub struct FoodQuery {
    /// Case-insensitive substring match on the food name.
    pub name: Option<String>,
    pub min_calories: Option<f64>,
    pub max_calories: Option<f64>,
    pub min_protein: Option<f64>,
    pub max_protein: Option<f64>,
    pub min_carbs: Option<f64>,
    pub max_carbs: Option<f64>,
    pub min_fat: Option<f64>,
    pub max_fat: Option<f64>,
    pub sort: FoodSortKey,
    pub descending: bool,
}

impl FoodQuery {
    fn matches(&self, food: &FoodNutrientProfile) -> bool {
        if let Some(name) = &self.name {
            if !food.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }

        let in_range = |value: f64, min: Option<f64>, max: Option<f64>| {
            min.is_none_or(|m| value >= m) && max.is_none_or(|m| value <= m)
        };

        in_range(food.calories, self.min_calories, self.max_calories)
            && in_range(food.protein, self.min_protein, self.max_protein)
            && in_range(food.carbs, self.min_carbs, self.max_carbs)
            && in_range(food.fat, self.min_fat, self.max_fat)
    }
}

/// Filter and sort catalog entries against a query. Pure: the input is not
/// reordered, the result is a fresh list of references.
pub fn search_foods<'a>(
    foods: impl IntoIterator<Item = &'a FoodNutrientProfile>,
    query: &FoodQuery,
) -> Vec<&'a FoodNutrientProfile> {
    let mut matched: Vec<&FoodNutrientProfile> =
        foods.into_iter().filter(|f| query.matches(f)).collect();

    matched.sort_by(|a, b| {
        let ord = match query.sort {
            FoodSortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            FoodSortKey::Calories => a
                .calories
                .partial_cmp(&b.calories)
                .unwrap_or(std::cmp::Ordering::Equal),
            FoodSortKey::Protein => a
                .protein
                .partial_cmp(&b.protein)
                .unwrap_or(std::cmp::Ordering::Equal),
            FoodSortKey::Carbs => a
                .carbs
                .partial_cmp(&b.carbs)
                .unwrap_or(std::cmp::Ordering::Equal),
            FoodSortKey::Fat => a
                .fat
                .partial_cmp(&b.fat)
                .unwrap_or(std::cmp::Ordering::Equal),
        };
        if query.descending { ord.reverse() } else { ord }
    });

    matched
}

/// The food catalog: per-100-unit nutrient baselines keyed by food id.
pub struct FoodCatalog {
    foods: HashMap<u64, FoodNutrientProfile>,
    next_id: u64,
}

impl FoodCatalog {
    /// Create a catalog from existing entries.
    ///
    /// Entries with duplicate ids collapse to the last occurrence.
    pub fn new(foods: Vec<FoodNutrientProfile>) -> Self {
        let next_id = foods.iter().map(|f| f.id).max().unwrap_or(0) + 1;
        let map = foods.into_iter().map(|f| (f.id, f)).collect();
        Self {
            foods: map,
            next_id,
        }
    }

    /// Look up a food by id.
    ///
    /// A miss is an error, never a silent zero profile: a defaulted profile
    /// would corrupt every downstream total without a signal.
    pub fn lookup(&self, id: u64) -> Result<&FoodNutrientProfile> {
        self.foods.get(&id).ok_or(NutriError::FoodNotFound(id))
    }

    /// Add a new food, assigning it a fresh id.
    pub fn add(&mut self, mut profile: FoodNutrientProfile) -> Result<u64> {
        if !profile.is_valid() {
            return Err(NutriError::InvalidInput(format!(
                "invalid food profile: {}",
                profile.name
            )));
        }
        profile.id = self.next_id;
        self.next_id += 1;
        let id = profile.id;
        self.foods.insert(id, profile);
        Ok(id)
    }

    /// Replace an existing food's profile, keeping its id.
    pub fn update(&mut self, id: u64, mut profile: FoodNutrientProfile) -> Result<()> {
        if !self.foods.contains_key(&id) {
            return Err(NutriError::FoodNotFound(id));
        }
        if !profile.is_valid() {
            return Err(NutriError::InvalidInput(format!(
                "invalid food profile: {}",
                profile.name
            )));
        }
        profile.id = id;
        self.foods.insert(id, profile);
        Ok(())
    }

    /// Remove a food from the catalog.
    pub fn remove(&mut self, id: u64) -> Result<FoodNutrientProfile> {
        self.foods.remove(&id).ok_or(NutriError::FoodNotFound(id))
    }

    /// Find a food by exact name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&FoodNutrientProfile> {
        self.foods
            .values()
            .find(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// Run a query against the catalog.
    pub fn search(&self, query: &FoodQuery) -> Vec<&FoodNutrientProfile> {
        search_foods(self.foods.values(), query)
    }

    /// All foods, sorted by name for stable display.
    pub fn all(&self) -> Vec<&FoodNutrientProfile> {
        search_foods(self.foods.values(), &FoodQuery::default())
    }

    /// Convert to a plain list for serialization.
    pub fn to_foods(&self) -> Vec<FoodNutrientProfile> {
        let mut foods: Vec<FoodNutrientProfile> = self.foods.values().cloned().collect();
        foods.sort_by_key(|f| f.id);
        foods
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: u64, name: &str, cal: f64, prot: f64, carbs: f64, fat: f64) -> FoodNutrientProfile {
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

    fn sample_catalog() -> FoodCatalog {
        FoodCatalog::new(vec![
            profile(1, "Riso", 360.0, 7.0, 80.0, 0.6),
            profile(2, "Petto di pollo", 165.0, 31.0, 0.0, 3.6),
            profile(3, "Olio d'oliva", 884.0, 0.0, 0.0, 100.0),
        ])
    }

    #[test]
    fn test_lookup_miss_is_error() {
        let catalog = sample_catalog();
        assert!(catalog.lookup(2).is_ok());
        assert!(matches!(
            catalog.lookup(99),
            Err(NutriError::FoodNotFound(99))
        ));
    }

    #[test]
    fn test_add_assigns_fresh_ids() {
        let mut catalog = sample_catalog();
        let id = catalog
            .add(profile(0, "Lenticchie", 116.0, 9.0, 20.0, 0.4))
            .unwrap();
        assert_eq!(id, 4);
        assert_eq!(catalog.lookup(id).unwrap().name, "Lenticchie");
    }

    #[test]
    fn test_add_rejects_invalid_profile() {
        let mut catalog = sample_catalog();
        assert!(catalog.add(profile(0, "", 100.0, 1.0, 1.0, 1.0)).is_err());
        assert!(catalog
            .add(profile(0, "Negativo", -10.0, 1.0, 1.0, 1.0))
            .is_err());
    }

    #[test]
    fn test_find_by_name_case_insensitive() {
        let catalog = sample_catalog();
        assert!(catalog.find_by_name("riso").is_some());
        assert!(catalog.find_by_name("RISO").is_some());
        assert!(catalog.find_by_name("pasta").is_none());
    }

    #[test]
    fn test_search_name_substring() {
        let catalog = sample_catalog();
        let query = FoodQuery {
            name: Some("poll".to_string()),
            ..FoodQuery::default()
        };
        let results = catalog.search(&query);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Petto di pollo");
    }

    #[test]
    fn test_search_macro_ranges() {
        let catalog = sample_catalog();
        let query = FoodQuery {
            min_protein: Some(5.0),
            max_calories: Some(400.0),
            ..FoodQuery::default()
        };
        let names: Vec<&str> = catalog.search(&query).iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Petto di pollo", "Riso"]);
    }

    #[test]
    fn test_search_sort_by_calories_descending() {
        let catalog = sample_catalog();
        let query = FoodQuery {
            sort: FoodSortKey::Calories,
            descending: true,
            ..FoodQuery::default()
        };
        let names: Vec<&str> = catalog.search(&query).iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Olio d'oliva", "Riso", "Petto di pollo"]);
    }

    #[test]
    fn test_update_keeps_id() {
        let mut catalog = sample_catalog();
        let mut updated = profile(0, "Riso integrale", 350.0, 7.5, 77.0, 2.0);
        updated.id = 42; // ignored
        catalog.update(1, updated).unwrap();
        assert_eq!(catalog.lookup(1).unwrap().name, "Riso integrale");
        assert!(catalog.lookup(42).is_err());
    }
}
