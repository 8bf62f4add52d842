pub mod food;
pub mod plan;
pub mod preferences;

pub use food::{Category, DietaryTag, FoodItem};
pub use plan::{DailyPlan, Meal, MealComponent, MealSlot, Weekday, WeeklyPlan, NONE_TITLE};
pub use preferences::DietaryPreferences;
