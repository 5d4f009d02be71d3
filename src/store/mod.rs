mod catalog;
mod persistence;
mod plans;

pub use catalog::{search_foods, FoodCatalog, FoodQuery, FoodSortKey};
pub use persistence::{
    export_foods_csv, import_foods_csv, load_foods, load_plan_items, save_foods, save_plan_items,
};
pub use plans::{BatchFailure, BatchOutcome, PlanStore};
