use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use weekly_meal_planner_rs::catalog::load_catalog;
use weekly_meal_planner_rs::cli::{CatalogArgs, PreferenceArgs};
use weekly_meal_planner_rs::config::PlannerConfig;
use weekly_meal_planner_rs::error::Result;
use weekly_meal_planner_rs::evaluation::{evaluate, print_report, write_report_json, write_trials_csv};
use weekly_meal_planner_rs::logging::init_logging;
use weekly_meal_planner_rs::models::DietaryPreferences;
use weekly_meal_planner_rs::planner::Planner;

#[derive(Parser, Debug)]
#[command(name = "evaluator")]
#[command(about = "Score repeated weekly plans against the calorie target and restrictions")]
struct Args {
    /// Daily calorie target (TDEE)
    #[arg(long, default_value = "2000")]
    tdee: i64,

    /// Number of weekly plans to generate
    #[arg(long, default_value = "10")]
    trials: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Output CSV file with one row per trial
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Output JSON file for the full report
    #[arg(long)]
    json: Option<PathBuf>,

    #[command(flatten)]
    preferences: PreferenceArgs,

    #[command(flatten)]
    catalog: CatalogArgs,
}

fn main() {
    let args = Args::parse();
    init_logging(&args.catalog.log_level);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        let code = if e.is_client_error() { 2 } else { 1 };
        std::process::exit(code);
    }
}

fn run(args: Args) -> Result<()> {
    let config = PlannerConfig::load_or_default(args.catalog.config.as_ref())?;
    let catalog = load_catalog(&args.catalog.paths())?;
    println!("Loaded {} catalog items", catalog.len());

    let planner = Planner::new(catalog, config)?;
    let preferences: DietaryPreferences = args.preferences.into();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    println!(
        "Evaluating {} weekly plans at {} cal/day",
        args.trials, args.tdee
    );
    let report = evaluate(&planner, args.tdee, &preferences, args.trials, &mut rng)?;
    print_report(&report);

    if let Some(path) = &args.csv {
        write_trials_csv(&report, path)?;
        println!("Wrote per-trial results to {:?}", path);
    }

    if let Some(path) = &args.json {
        write_report_json(&report, path)?;
        println!("Wrote report to {:?}", path);
    }

    Ok(())
}
