pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;

pub use catalog::Catalog;
pub use config::PlannerConfig;
pub use error::{PlanError, Result};
pub use models::{DailyPlan, DietaryPreferences, FoodItem, WeeklyPlan};
pub use planner::Planner;
