pub mod budget;
pub mod constants;
pub mod daily;
pub mod drink;
pub mod filter;
pub mod selector;
pub mod usage;
pub mod weekly;

pub use budget::{budget_day, split_slot, DayBudget, SlotTargets};
pub use constants::*;
pub use daily::{assemble_day, DayAssembler, DayPools, Stage};
pub use drink::fallback_drink;
pub use filter::filter_by_preferences;
pub use selector::{assign_servings, select_component, Role, SelectionRequest, TIERS};
pub use usage::UsageTracker;
pub use weekly::Planner;
