use clap::Parser;
use std::path::Path;

use nutri_house_rs::aggregator::{validate_calorie_consistency, ConsistencyThresholds};
use nutri_house_rs::cli::{Cli, Command};
use nutri_house_rs::error::Result;
use nutri_house_rs::interface::{
    collect_line_item_draft, display_batch_outcome, display_consistency_report, display_food_list,
    display_plan, display_plan_by_meal, display_summary, prompt_patient_id, prompt_plan_title,
    prompt_yes_no,
};
use nutri_house_rs::store::{
    import_foods_csv, load_foods, load_plan_items, save_foods, save_plan_items, FoodCatalog,
    FoodQuery, PlanStore,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Show {
            patient,
            title,
            by_meal,
        } => cmd_show(&cli.plans, patient, &title, by_meal),
        Command::Summary { patient, title } => cmd_summary(&cli.plans, patient, &title),
        Command::Add { patient, title } => cmd_add(&cli.plans, &cli.foods, patient, title),
        Command::Duplicate {
            patient,
            source,
            new_title,
        } => cmd_duplicate(&cli.plans, patient, &source, &new_title),
        Command::DeletePlan {
            patient,
            title,
            yes,
        } => cmd_delete_plan(&cli.plans, patient, &title, yes),
        Command::Titles { patient } => cmd_titles(&cli.plans, patient),
        Command::Foods {
            name,
            min_calories,
            max_calories,
            min_protein,
            max_protein,
            sort,
            desc,
        } => cmd_foods(
            &cli.foods,
            FoodQuery {
                name,
                min_calories,
                max_calories,
                min_protein,
                max_protein,
                sort: sort.into(),
                descending: desc,
                ..FoodQuery::default()
            },
        ),
        Command::CheckFood { id } => cmd_check_food(&cli.foods, id),
        Command::ImportFoods { path } => cmd_import_foods(&cli.foods, &path),
    }
}

/// Load the food catalog, or report a missing state file.
fn load_catalog(file_path: &str) -> Result<Option<FoodCatalog>> {
    let path = Path::new(file_path);
    if !path.exists() {
        eprintln!("Food catalog file not found: {}", file_path);
        eprintln!("Use 'import-foods <csv>' to create one.");
        return Ok(None);
    }
    Ok(Some(FoodCatalog::new(load_foods(path)?)))
}

/// Load the plan store; a missing file is an empty store.
fn load_store(file_path: &str) -> Result<PlanStore> {
    let path = Path::new(file_path);
    if !path.exists() {
        return Ok(PlanStore::new());
    }
    Ok(PlanStore::from_items(load_plan_items(path)?))
}

/// Show a plan's items grouped by day or by meal.
fn cmd_show(plans_path: &str, patient: u64, title: &str, by_meal: bool) -> Result<()> {
    let store = load_store(plans_path)?;
    let items: Vec<_> = store
        .list_items(patient, title)
        .into_iter()
        .cloned()
        .collect();

    if items.is_empty() {
        println!("No plan '{}' for patient {}.", title, patient);
        return Ok(());
    }

    if by_meal {
        display_plan_by_meal(title, &items);
    } else {
        display_plan(title, &items);
    }
    Ok(())
}

/// Print a plan's nutritional summary.
fn cmd_summary(plans_path: &str, patient: u64, title: &str) -> Result<()> {
    let store = load_store(plans_path)?;
    let summary = store.summary(patient, title)?;
    display_summary(title, &summary);
    Ok(())
}

/// Interactively add line items to a plan.
fn cmd_add(
    plans_path: &str,
    foods_path: &str,
    patient: Option<u64>,
    title: Option<String>,
) -> Result<()> {
    let Some(catalog) = load_catalog(foods_path)? else {
        return Ok(());
    };
    if catalog.is_empty() {
        println!("The food catalog is empty; import foods first.");
        return Ok(());
    }

    let mut store = load_store(plans_path)?;

    let patient = match patient {
        Some(id) => id,
        None => prompt_patient_id()?,
    };
    let title = match title {
        Some(t) => t,
        None => prompt_plan_title()?,
    };

    // Collect the whole batch first, then insert: resolvable drafts land,
    // the rest are reported per item.
    let mut drafts = Vec::new();
    loop {
        match collect_line_item_draft(&catalog, patient, &title)? {
            Some(draft) => drafts.push(draft),
            None => println!("No food selected."),
        }

        if !prompt_yes_no("Add another item?", true)? {
            break;
        }
    }

    if drafts.is_empty() {
        println!("Nothing to add.");
        return Ok(());
    }

    let outcome = store.insert_batch(&drafts, &catalog);
    display_batch_outcome(&outcome);

    if !outcome.inserted.is_empty() {
        let save = prompt_yes_no("Save the plan?", true)?;
        if save {
            save_plan_items(plans_path, &store.to_items())?;
            println!(
                "Saved {} new items to {}.",
                outcome.inserted.len(),
                plans_path
            );
        }
    }

    Ok(())
}

/// Duplicate a plan under a new title.
fn cmd_duplicate(plans_path: &str, patient: u64, source: &str, new_title: &str) -> Result<()> {
    let mut store = load_store(plans_path)?;
    let copies = store.duplicate_plan(patient, source, new_title)?;
    save_plan_items(plans_path, &store.to_items())?;
    println!(
        "Duplicated '{}' as '{}' ({} items).",
        source,
        new_title,
        copies.len()
    );
    Ok(())
}

/// Delete a whole plan.
fn cmd_delete_plan(plans_path: &str, patient: u64, title: &str, yes: bool) -> Result<()> {
    let mut store = load_store(plans_path)?;

    if !yes {
        let confirm = prompt_yes_no(
            &format!("Delete plan '{}' for patient {}?", title, patient),
            false,
        )?;
        if !confirm {
            println!("Nothing deleted.");
            return Ok(());
        }
    }

    let removed = store.delete_plan(patient, title)?;
    save_plan_items(plans_path, &store.to_items())?;
    println!("Deleted plan '{}' ({} items).", title, removed);
    Ok(())
}

/// List a patient's plan titles.
fn cmd_titles(plans_path: &str, patient: u64) -> Result<()> {
    let store = load_store(plans_path)?;
    let titles = store.plan_titles(patient);

    if titles.is_empty() {
        println!("No plans for patient {}.", patient);
        return Ok(());
    }

    println!("Plans for patient {}:", patient);
    for title in titles {
        println!("  {}", title);
    }
    Ok(())
}

/// Search the food catalog.
fn cmd_foods(foods_path: &str, query: FoodQuery) -> Result<()> {
    let Some(catalog) = load_catalog(foods_path)? else {
        return Ok(());
    };

    let results = catalog.search(&query);
    display_food_list(&results, "Food catalog");
    Ok(())
}

/// Check a food's declared calories against its macros.
fn cmd_check_food(foods_path: &str, id: u64) -> Result<()> {
    let Some(catalog) = load_catalog(foods_path)? else {
        return Ok(());
    };

    let food = catalog.lookup(id)?;
    let report = validate_calorie_consistency(
        food.calories,
        food.protein,
        food.carbs,
        food.fat,
        &ConsistencyThresholds::default(),
    );
    display_consistency_report(food, &report);
    Ok(())
}

/// Import catalog entries from a CSV file.
fn cmd_import_foods(foods_path: &str, csv_path: &str) -> Result<()> {
    // A missing catalog file is fine here: the import creates it.
    let path = Path::new(foods_path);
    let mut catalog = if path.exists() {
        FoodCatalog::new(load_foods(path)?)
    } else {
        FoodCatalog::new(Vec::new())
    };

    let imported = import_foods_csv(csv_path)?;
    let total = imported.len();

    let mut added = 0;
    for profile in imported {
        match catalog.add(profile) {
            Ok(_) => added += 1,
            Err(e) => eprintln!("Skipped: {}", e),
        }
    }

    save_foods(foods_path, &catalog.to_foods())?;
    println!(
        "Imported {} of {} foods into {} ({} total).",
        added,
        total,
        foods_path,
        catalog.len()
    );
    Ok(())
}
