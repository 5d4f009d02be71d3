pub mod prompts;
pub mod render;

pub use prompts::{
    collect_line_item_draft, prompt_day, prompt_food, prompt_meal_type, prompt_notes,
    prompt_patient_id, prompt_plan_title, prompt_quantity, prompt_unit, prompt_yes_no,
};
pub use render::{
    display_batch_outcome, display_consistency_report, display_food_list, display_plan,
    display_plan_by_meal, display_summary,
};
