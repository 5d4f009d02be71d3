use std::collections::BTreeMap;

use crate::aggregator::{compute_contribution, duplicate_plan, summarize_plan};
use crate::error::{NutriError, Result};
use crate::models::{
    MealType, PlanLineItem, PlanLineItemDraft, PlanLineItemUpdate, PlanSummary,
};
use crate::store::FoodCatalog;

/// A batch insert failure, tied back to the draft by position.
#[derive(Debug)]
pub struct BatchFailure {
    /// Index of the failed draft in the input sequence.
    pub index: usize,
    pub error: NutriError,
}

/// Outcome of a batch insert: resolvable drafts are inserted, the rest are
/// reported. The batch never aborts as a whole.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub inserted: Vec<PlanLineItem>,
    pub failures: Vec<BatchFailure>,
}

/// The diet plan store: line items keyed by id.
///
/// Ids are assigned monotonically, so iterating the map visits items in
/// insertion order. A plan exists exactly as long as at least one item
/// carries its (patient, title) pair; there is no parent plan record.
pub struct PlanStore {
    items: BTreeMap<u64, PlanLineItem>,
    next_id: u64,
}

impl PlanStore {
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Rebuild a store from persisted items.
    pub fn from_items(items: Vec<PlanLineItem>) -> Self {
        let next_id = items.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        let map = items.into_iter().map(|i| (i.id, i)).collect();
        Self {
            items: map,
            next_id,
        }
    }

    /// Insert one validated draft, resolving the food against the catalog
    /// and freezing its nutrient contribution into the stored item.
    pub fn insert(&mut self, draft: &PlanLineItemDraft, catalog: &FoodCatalog) -> Result<&PlanLineItem> {
        draft.validate()?;

        let occupied = self.items.values().any(|item| {
            item.patient_id == draft.patient_id
                && item.title == draft.title
                && item.day_of_week == draft.day_of_week
                && item.meal_type == draft.meal_type
                && item.food_id == draft.food_id
        });
        if occupied {
            return Err(NutriError::DuplicateSlot);
        }

        let profile = catalog.lookup(draft.food_id)?;
        let contribution = compute_contribution(profile, draft.quantity, draft.unit)?;

        let id = self.next_id;
        self.next_id += 1;

        let item = PlanLineItem {
            id,
            patient_id: draft.patient_id,
            title: draft.title.clone(),
            notes: draft.notes.clone(),
            day_of_week: draft.day_of_week,
            meal_type: draft.meal_type,
            food_id: draft.food_id,
            food_name: profile.name.clone(),
            quantity: draft.quantity,
            unit: draft.unit,
            calories: contribution.calories,
            proteins: contribution.proteins,
            carbs: contribution.carbs,
            fats: contribution.fats,
        };

        self.items.insert(id, item);
        Ok(&self.items[&id])
    }

    /// Insert a batch of drafts, reporting per-draft failures.
    ///
    /// Items whose food resolves are inserted; the others (unknown food,
    /// invalid draft, occupied slot) come back in `failures` with their
    /// input index. Partial results instead of an aborted batch.
    pub fn insert_batch(
        &mut self,
        drafts: &[PlanLineItemDraft],
        catalog: &FoodCatalog,
    ) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();
        for (index, draft) in drafts.iter().enumerate() {
            match self.insert(draft, catalog) {
                Ok(item) => outcome.inserted.push(item.clone()),
                Err(error) => outcome.failures.push(BatchFailure { index, error }),
            }
        }
        outcome
    }

    pub fn get(&self, id: u64) -> Result<&PlanLineItem> {
        self.items.get(&id).ok_or(NutriError::ItemNotFound(id))
    }

    /// Apply a partial update; only present fields overwrite.
    ///
    /// Changing the food, quantity or unit re-resolves the food against the
    /// catalog and recomputes the frozen nutrients.
    pub fn update(
        &mut self,
        id: u64,
        update: &PlanLineItemUpdate,
        catalog: &FoodCatalog,
    ) -> Result<&PlanLineItem> {
        let current = self.items.get(&id).ok_or(NutriError::ItemNotFound(id))?;

        let mut updated = current.clone();
        if let Some(title) = &update.title {
            updated.title = title.clone();
        }
        if let Some(notes) = &update.notes {
            updated.notes = Some(notes.clone());
        }
        if let Some(day) = update.day_of_week {
            updated.day_of_week = day;
        }
        if let Some(meal) = update.meal_type {
            updated.meal_type = meal;
        }
        if let Some(food_id) = update.food_id {
            updated.food_id = food_id;
        }
        if let Some(quantity) = update.quantity {
            updated.quantity = quantity;
        }
        if let Some(unit) = update.unit {
            updated.unit = unit;
        }

        let draft = PlanLineItemDraft {
            patient_id: updated.patient_id,
            title: updated.title.clone(),
            notes: updated.notes.clone(),
            day_of_week: updated.day_of_week,
            meal_type: updated.meal_type,
            food_id: updated.food_id,
            quantity: updated.quantity,
            unit: updated.unit,
        };
        draft.validate()?;

        let recompute = update.food_id.is_some() || update.quantity.is_some() || update.unit.is_some();
        if recompute {
            let profile = catalog.lookup(updated.food_id)?;
            let contribution = compute_contribution(profile, updated.quantity, updated.unit)?;
            updated.food_name = profile.name.clone();
            updated.calories = contribution.calories;
            updated.proteins = contribution.proteins;
            updated.carbs = contribution.carbs;
            updated.fats = contribution.fats;
        }

        self.items.insert(id, updated);
        Ok(&self.items[&id])
    }

    pub fn delete_item(&mut self, id: u64) -> Result<PlanLineItem> {
        self.items.remove(&id).ok_or(NutriError::ItemNotFound(id))
    }

    /// All items of a plan, in insertion order.
    pub fn list_items(&self, patient_id: u64, title: &str) -> Vec<&PlanLineItem> {
        self.items
            .values()
            .filter(|i| i.patient_id == patient_id && i.title == title)
            .collect()
    }

    /// Items of a plan for one day of the week.
    pub fn items_for_day(&self, patient_id: u64, title: &str, day: u8) -> Vec<&PlanLineItem> {
        self.items
            .values()
            .filter(|i| i.patient_id == patient_id && i.title == title && i.day_of_week == day)
            .collect()
    }

    /// Items of a plan for one meal type.
    pub fn items_for_meal(
        &self,
        patient_id: u64,
        title: &str,
        meal: MealType,
    ) -> Vec<&PlanLineItem> {
        self.items
            .values()
            .filter(|i| i.patient_id == patient_id && i.title == title && i.meal_type == meal)
            .collect()
    }

    /// Distinct plan titles for a patient, in first-seen order.
    pub fn plan_titles(&self, patient_id: u64) -> Vec<String> {
        let mut titles = Vec::new();
        for item in self.items.values() {
            if item.patient_id == patient_id && !titles.contains(&item.title) {
                titles.push(item.title.clone());
            }
        }
        titles
    }

    /// Delete a whole plan (cascade over its items). Returns how many items
    /// were removed; an unknown plan is an error.
    pub fn delete_plan(&mut self, patient_id: u64, title: &str) -> Result<usize> {
        let ids: Vec<u64> = self
            .items
            .values()
            .filter(|i| i.patient_id == patient_id && i.title == title)
            .map(|i| i.id)
            .collect();

        if ids.is_empty() {
            return Err(NutriError::PlanNotFound {
                patient_id,
                title: title.to_string(),
            });
        }

        for id in &ids {
            self.items.remove(id);
        }
        Ok(ids.len())
    }

    /// Duplicate a plan under a new title.
    ///
    /// Derived nutrients are copied verbatim from the source items rather
    /// than recomputed, so the copy stays faithful even if the catalog has
    /// changed since the source plan was built.
    pub fn duplicate_plan(
        &mut self,
        patient_id: u64,
        source_title: &str,
        new_title: &str,
    ) -> Result<Vec<PlanLineItem>> {
        let source: Vec<PlanLineItem> = self
            .list_items(patient_id, source_title)
            .into_iter()
            .cloned()
            .collect();
        if source.is_empty() {
            return Err(NutriError::PlanNotFound {
                patient_id,
                title: source_title.to_string(),
            });
        }

        let existing = self.plan_titles(patient_id);
        let copies = duplicate_plan(&source, new_title, &existing, self.next_id)?;
        self.next_id += copies.len() as u64;

        for copy in &copies {
            self.items.insert(copy.id, copy.clone());
        }
        Ok(copies)
    }

    /// Summarize a plan. An empty (hence nonexistent) plan is an error, in
    /// line with the implicit plan lifecycle.
    pub fn summary(&self, patient_id: u64, title: &str) -> Result<PlanSummary> {
        let items: Vec<PlanLineItem> = self
            .list_items(patient_id, title)
            .into_iter()
            .cloned()
            .collect();
        if items.is_empty() {
            return Err(NutriError::PlanNotFound {
                patient_id,
                title: title.to_string(),
            });
        }
        Ok(summarize_plan(&items))
    }

    /// Convert to a plain list for serialization.
    pub fn to_items(&self) -> Vec<PlanLineItem> {
        self.items.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for PlanStore {
    fn default() -> Self {
        Self::new()
    }
}
