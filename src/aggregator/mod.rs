pub mod consistency;
pub mod constants;
pub mod contribution;
pub mod duplicate;
pub mod grouping;
pub mod summary;

pub use consistency::{
    estimate_calories, validate_calorie_consistency, ConsistencyReport, ConsistencySeverity,
    ConsistencyThresholds,
};
pub use constants::*;
pub use contribution::compute_contribution;
pub use duplicate::duplicate_plan;
pub use grouping::{group_by_day, group_by_meal_type, meal_totals_for_day};
pub use summary::{daily_average, summarize_plan};
