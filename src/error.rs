use thiserror::Error;

#[derive(Debug, Error)]
pub enum NutriError {
    #[error("Food not found: {0}")]
    FoodNotFound(u64),

    #[error("Plan item not found: {0}")]
    ItemNotFound(u64),

    #[error("Plan not found: '{title}' for patient {patient_id}")]
    PlanNotFound { patient_id: u64, title: String },

    #[error("A plan titled '{0}' already exists for this patient")]
    DuplicateTitleConflict(String),

    #[error("Item already present in the plan for this day and meal")]
    DuplicateSlot,

    #[error("Quantity must be positive, got {0}")]
    InvalidQuantity(f64),

    #[error("Invalid plan item: {0}")]
    InvalidDraft(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, NutriError>;
