use clap::{Parser, Subcommand, ValueEnum};

use crate::store::FoodSortKey;

/// NutriHouse — manage a food catalog and weekly diet plans from the terminal.
#[derive(Parser, Debug)]
#[command(name = "nutri_house")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the plan items JSON file.
    #[arg(long, default_value = "plan_items.json")]
    pub plans: String,

    /// Path to the food catalog JSON file.
    #[arg(long, default_value = "food_catalog.json")]
    pub foods: String,
}

/// Sort field for catalog searches.
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum SortField {
    #[default]
    Name,
    Calories,
    Protein,
    Carbs,
    Fat,
}

impl From<SortField> for FoodSortKey {
    fn from(field: SortField) -> Self {
        match field {
            SortField::Name => FoodSortKey::Name,
            SortField::Calories => FoodSortKey::Calories,
            SortField::Protein => FoodSortKey::Protein,
            SortField::Carbs => FoodSortKey::Carbs,
            SortField::Fat => FoodSortKey::Fat,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show a plan's items day by day (or meal by meal).
    Show {
        /// Patient id.
        #[arg(short, long)]
        patient: u64,

        /// Plan title.
        #[arg(short, long)]
        title: String,

        /// Group by meal type across the week instead of by day.
        #[arg(long)]
        by_meal: bool,
    },

    /// Print a plan's nutritional summary.
    Summary {
        #[arg(short, long)]
        patient: u64,

        #[arg(short, long)]
        title: String,
    },

    /// Interactively add line items to a plan.
    Add {
        /// Patient id (prompted if omitted).
        #[arg(short, long)]
        patient: Option<u64>,

        /// Plan title (prompted if omitted).
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Duplicate a plan under a new title.
    Duplicate {
        #[arg(short, long)]
        patient: u64,

        /// Title of the plan to copy.
        #[arg(short, long)]
        source: String,

        /// Title of the copy.
        #[arg(short, long)]
        new_title: String,
    },

    /// Delete a whole plan and all of its items.
    DeletePlan {
        #[arg(short, long)]
        patient: u64,

        #[arg(short, long)]
        title: String,

        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },

    /// List a patient's plan titles.
    Titles {
        #[arg(short, long)]
        patient: u64,
    },

    /// Search the food catalog.
    Foods {
        /// Substring to match in food names.
        #[arg(short, long)]
        name: Option<String>,

        #[arg(long)]
        min_calories: Option<f64>,

        #[arg(long)]
        max_calories: Option<f64>,

        #[arg(long)]
        min_protein: Option<f64>,

        #[arg(long)]
        max_protein: Option<f64>,

        /// Sort field.
        #[arg(long, value_enum, default_value = "name")]
        sort: SortField,

        /// Sort in descending order.
        #[arg(long)]
        desc: bool,
    },

    /// Check a food's declared calories against its macronutrients.
    CheckFood {
        /// Food id.
        id: u64,
    },

    /// Import catalog entries from a CSV file.
    ImportFoods {
        /// Path to the CSV file (header: name,calories,protein,carbs,fat[,photoUrl]).
        path: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Foods {
            name: None,
            min_calories: None,
            max_calories: None,
            min_protein: None,
            max_protein: None,
            sort: SortField::Name,
            desc: false,
        }
    }
}
