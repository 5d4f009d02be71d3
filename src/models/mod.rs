mod food;
mod plan;

pub use food::{FoodNutrientProfile, NutrientTotals};
pub use plan::{
    MealType, PlanLineItem, PlanLineItemDraft, PlanLineItemUpdate, PlanSummary, Unit,
};
