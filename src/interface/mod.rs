pub mod prompts;
pub mod render;

pub use prompts::{prompt_preferences, prompt_target_calories, prompt_yes_no};
pub use render::{display_catalog_summary, display_weekly_plan};
