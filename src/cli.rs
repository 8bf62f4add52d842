use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::catalog::CatalogPaths;
use crate::models::DietaryPreferences;

/// Weekly meal planner: seven days of breakfast, lunch and dinner fitted to
/// a calorie target and dietary restrictions.
#[derive(Parser, Debug)]
#[command(name = "meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a weekly meal plan.
    Plan(PlanArgs),

    /// Summarize the loaded food catalog.
    Catalog,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs::default())
    }
}

#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    /// Daily calorie target (TDEE).
    #[arg(long)]
    pub tdee: Option<i64>,

    /// Ask for the target and restrictions interactively.
    #[arg(short, long)]
    pub interactive: bool,

    /// Random seed for a reproducible plan.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Save the plan as JSON to this path.
    #[arg(long)]
    pub json: Option<PathBuf>,

    #[command(flatten)]
    pub preferences: PreferenceArgs,
}

/// Catalog files, config and log level shared by every binary.
#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    /// Breakfast recipes CSV.
    #[arg(long, global = true, default_value = "bf_revised.csv")]
    pub breakfast: PathBuf,

    /// Lunch and dinner recipes CSV.
    #[arg(long, global = true, default_value = "lunch_revised.csv")]
    pub lunch_dinner: PathBuf,

    /// Side dish recipes CSV.
    #[arg(long, global = true, default_value = "sidedish_recipes.csv")]
    pub side_dish: PathBuf,

    /// Drink recipes CSV.
    #[arg(long, global = true, default_value = "drinks_recipes.csv")]
    pub drink: PathBuf,

    /// Planner config JSON overriding the built-in constants.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level used when RUST_LOG is unset.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

impl CatalogArgs {
    pub fn paths(&self) -> CatalogPaths {
        CatalogPaths {
            breakfast: self.breakfast.clone(),
            lunch_dinner: self.lunch_dinner.clone(),
            side_dish: self.side_dish.clone(),
            drink: self.drink.clone(),
        }
    }
}

/// One switch per dietary restriction.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct PreferenceArgs {
    #[arg(long)]
    pub vegetarian: bool,
    #[arg(long)]
    pub low_purine: bool,
    #[arg(long)]
    pub low_fat: bool,
    #[arg(long)]
    pub low_sodium: bool,
    #[arg(long)]
    pub lactose_free: bool,
    #[arg(long)]
    pub peanut_allergy: bool,
    #[arg(long)]
    pub shellfish_allergy: bool,
    #[arg(long)]
    pub fish_allergy: bool,
    #[arg(long)]
    pub halal_or_kosher: bool,
}

impl From<PreferenceArgs> for DietaryPreferences {
    fn from(args: PreferenceArgs) -> Self {
        DietaryPreferences {
            vegetarian: args.vegetarian,
            low_purine: args.low_purine,
            low_fat: args.low_fat,
            low_sodium: args.low_sodium,
            lactose_free: args.lactose_free,
            peanut_allergy: args.peanut_allergy,
            shellfish_allergy: args.shellfish_allergy,
            fish_allergy: args.fish_allergy,
            halal_or_kosher: args.halal_or_kosher,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_flags_parse() {
        let cli = Cli::parse_from([
            "meal_planner",
            "plan",
            "--tdee",
            "1800",
            "--vegetarian",
            "--shellfish-allergy",
            "--seed",
            "7",
        ]);
        let Some(Command::Plan(args)) = cli.command else {
            panic!("expected plan command");
        };
        assert_eq!(args.tdee, Some(1800));
        assert_eq!(args.seed, Some(7));

        let prefs: DietaryPreferences = args.preferences.into();
        assert!(prefs.vegetarian);
        assert!(prefs.shellfish_allergy);
        assert!(!prefs.low_fat);
    }

    #[test]
    fn test_defaults_to_plan() {
        let cli = Cli::parse_from(["meal_planner"]);
        assert!(cli.command.is_none());
        assert!(matches!(cli.command.unwrap_or_default(), Command::Plan(_)));
        assert_eq!(cli.catalog.log_level, "warn");
        assert_eq!(cli.catalog.breakfast, PathBuf::from("bf_revised.csv"));
    }

    #[test]
    fn test_catalog_paths_after_subcommand() {
        let cli = Cli::parse_from(["meal_planner", "catalog", "--drink", "d.csv"]);
        assert!(matches!(cli.command, Some(Command::Catalog)));
        assert_eq!(cli.catalog.paths().drink, PathBuf::from("d.csv"));
    }
}
