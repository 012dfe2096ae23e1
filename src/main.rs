use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use health_forecast_rs::catalog::Catalog;
use health_forecast_rs::cli::{Cli, Command};
use health_forecast_rs::engine::assess;
use health_forecast_rs::error::{HealthError, Result};
use health_forecast_rs::interface::{
    FoodAction, WizardChoice, display_advice, display_catalog, display_food_log,
    display_forecast, display_incomplete, display_profile, display_search_results,
    prompt_catalog_food, prompt_custom_food, prompt_entry, prompt_food_action, prompt_profile,
    prompt_quantity, prompt_step, prompt_yes_no,
};
use health_forecast_rs::models::{FoodEntry, PersonalProfile};
use health_forecast_rs::state::{ForecastSession, Step, load_catalog, load_entries, load_profile};

/// Number of fuzzy matches shown by the `catalog --search` command.
const CATALOG_SEARCH_LIMIT: usize = 10;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` overrides the verbosity flag.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "health_forecast_rs=warn",
        1 => "health_forecast_rs=info",
        _ => "health_forecast_rs=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let catalog = open_catalog(cli.catalog.as_deref())?;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Wizard => cmd_wizard(&catalog),
        Command::Forecast {
            profile,
            entries,
            json,
        } => cmd_forecast(&profile, entries.as_ref(), json),
        Command::Catalog { search, category } => {
            cmd_catalog(&catalog, search.as_deref(), category.as_deref())
        }
    }
}

fn open_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            let catalog = load_catalog(path)?;
            info!(path = %path.display(), foods = catalog.len(), "loaded catalog");
            Ok(catalog)
        }
        None => Ok(Catalog::builtin()),
    }
}

/// Assess a profile and food log read from files.
fn cmd_forecast(profile_path: &Path, entries_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let profile = load_profile(profile_path)?;
    let entries = match entries_path {
        Some(path) => load_entries(path)?,
        None => Vec::new(),
    };
    info!(entries = entries.len(), "loaded inputs");

    let assessment = assess(&profile, &entries).ok_or(HealthError::IncompleteProfile)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&assessment.display())?);
        return Ok(());
    }

    display_profile(&profile);
    display_food_log(&entries);
    display_forecast(&assessment, &profile);
    display_advice(&assessment);

    Ok(())
}

/// Browse or search the food catalog.
fn cmd_catalog(catalog: &Catalog, search: Option<&str>, category: Option<&str>) -> Result<()> {
    if let Some(term) = search {
        let hits = catalog.fuzzy_search(term, CATALOG_SEARCH_LIMIT);
        display_search_results(term, &hits);
        return Ok(());
    }

    let mut sections = catalog.filter("");
    if let Some(key) = category {
        let wanted = catalog
            .category(key)
            .ok_or_else(|| HealthError::InvalidInput(format!("Unknown category: {}", key)))?;
        sections.retain(|(c, _)| c.key == wanted.key);
    }

    display_catalog(&sections);
    Ok(())
}

/// Turn a bad-input error into a message and `None`; other errors propagate.
fn recoverable<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(HealthError::InvalidInput(msg)) => {
            println!("{}", msg);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Interactive four-step wizard.
fn cmd_wizard(catalog: &Catalog) -> Result<()> {
    let mut session = ForecastSession::new(PersonalProfile::default());
    let mut step = Step::Profile;

    println!("Health forecast: predict tomorrow's weight from today's meals.");
    println!("Using a catalog of {} foods.", catalog.len());

    loop {
        let next = match step {
            Step::Profile => {
                wizard_profile(&mut session)?;
                Step::FoodLog
            }
            Step::FoodLog => {
                wizard_food_log(&mut session, catalog)?;
                Step::Forecast
            }
            Step::Forecast => {
                match session.assessment() {
                    Some(assessment) => display_forecast(assessment, session.profile()),
                    None => display_incomplete(),
                }
                Step::Advice
            }
            Step::Advice => {
                match session.assessment() {
                    Some(assessment) => display_advice(assessment),
                    None => display_incomplete(),
                }
                Step::Profile
            }
        };

        match prompt_step(next)? {
            WizardChoice::Go(chosen) if session.step_available(chosen) => step = chosen,
            WizardChoice::Go(_) => {
                display_incomplete();
                step = Step::Profile;
            }
            WizardChoice::Restart => {
                if prompt_yes_no("Clear today's food log and start over?", false)? {
                    session.clear_entries();
                    step = Step::Profile;
                }
            }
            WizardChoice::Quit => return Ok(()),
        }
    }
}

fn wizard_profile(session: &mut ForecastSession) -> Result<()> {
    loop {
        if let Some(profile) = recoverable(prompt_profile(session.profile()))? {
            session.set_profile(profile);
            break;
        }
    }

    if session.assessment().is_none() {
        display_incomplete();
    } else {
        display_profile(session.profile());
    }
    Ok(())
}

fn wizard_food_log(session: &mut ForecastSession, catalog: &Catalog) -> Result<()> {
    loop {
        display_food_log(session.entries());

        match prompt_food_action()? {
            FoodAction::AddFromCatalog => {
                if let Some(food) = prompt_catalog_food(catalog)? {
                    match session.add_catalog_food(food).and_then(|id| session.entry(id)) {
                        Some(entry) => println!("Added: {} x {}", entry.name, entry.quantity()),
                        None => println!("'{}' has no calories to log.", food.name),
                    }
                }
            }
            FoodAction::AddCustom => {
                if let Some((name, calories, quantity)) = recoverable(prompt_custom_food())? {
                    if session.add_food(&name, calories, quantity).is_none() {
                        println!("A food needs a name and positive calories.");
                    }
                }
            }
            FoodAction::ChangeQuantity => {
                if let Some(id) = prompt_entry(session.entries(), "Change which entry?")? {
                    let current = session.entry(id).map_or(1.0, FoodEntry::quantity);
                    if let Some(quantity) = recoverable(prompt_quantity(current))? {
                        session.update_quantity(id, quantity);
                    }
                }
            }
            FoodAction::Remove => {
                if let Some(id) = prompt_entry(session.entries(), "Remove which entry?")? {
                    session.remove_food(id);
                }
            }
            FoodAction::Done => return Ok(()),
        }
    }
}
