use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use weekly_meal_planner_rs::catalog::{load_catalog, save_weekly_plan};
use weekly_meal_planner_rs::cli::{CatalogArgs, Cli, Command, PlanArgs};
use weekly_meal_planner_rs::config::PlannerConfig;
use weekly_meal_planner_rs::error::{PlanError, Result};
use weekly_meal_planner_rs::interface::{
    display_catalog_summary, display_weekly_plan, prompt_preferences, prompt_target_calories,
    prompt_yes_no,
};
use weekly_meal_planner_rs::logging::init_logging;
use weekly_meal_planner_rs::models::DietaryPreferences;
use weekly_meal_planner_rs::planner::{Planner, CALORIE_BAND_WIDTH};

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.catalog.log_level);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        if e.is_client_error() {
            eprintln!("Adjust the calorie target or relax your dietary constraints and try again.");
            std::process::exit(2);
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan(args) => cmd_plan(&cli.catalog, args),
        Command::Catalog => cmd_catalog(&cli.catalog),
    }
}

fn build_planner(args: &CatalogArgs) -> Result<Planner> {
    let config = PlannerConfig::load_or_default(args.config.as_ref())?;
    let catalog = load_catalog(&args.paths())?;
    Planner::new(catalog, config)
}

/// Generate and display a weekly plan.
fn cmd_plan(catalog_args: &CatalogArgs, args: PlanArgs) -> Result<()> {
    let planner = build_planner(catalog_args)?;
    println!("Loaded {} catalog items", planner.catalog().len());

    let mut preferences: DietaryPreferences = args.preferences.into();
    let target = if args.interactive {
        let target = prompt_target_calories(planner.config().max_daily_calories)?;
        preferences = prompt_preferences(preferences)?;
        target
    } else {
        args.tdee.ok_or_else(|| {
            PlanError::InvalidInput("--tdee is required unless --interactive is set".to_string())
        })?
    };

    let active: Vec<&str> = preferences
        .active_tags()
        .iter()
        .map(|t| t.column_name())
        .collect();
    println!("Planning for {} cal/day", target);
    if !active.is_empty() {
        println!("Restrictions: {}", active.join(", "));
    }

    let plan = match args.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            planner.generate_weekly_plan_with_rng(target, &preferences, &mut rng)?
        }
        None => planner.generate_weekly_plan(target, &preferences)?,
    };

    display_weekly_plan(&plan, target);

    let json_path = match args.json {
        Some(path) => Some(path),
        None if args.interactive => {
            if prompt_yes_no("Save plan as JSON?", false)? {
                Some("weekly_plan.json".into())
            } else {
                None
            }
        }
        None => None,
    };

    if let Some(path) = json_path {
        save_weekly_plan(&path, &plan)?;
        println!("Plan saved to {}", path.display());
    }

    Ok(())
}

/// Print per-category counts and calorie bands.
fn cmd_catalog(catalog_args: &CatalogArgs) -> Result<()> {
    let catalog = load_catalog(&catalog_args.paths())?;
    display_catalog_summary(&catalog, CALORIE_BAND_WIDTH);
    Ok(())
}
