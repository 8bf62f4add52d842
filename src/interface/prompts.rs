use dialoguer::{Confirm, Input, MultiSelect};

use crate::error::{PlanError, Result};
use crate::models::{DietaryPreferences, DietaryTag};

/// Prompt for the daily calorie target.
pub fn prompt_target_calories(max: i64) -> Result<i64> {
    let input: String = Input::new()
        .with_prompt("What is your daily calorie target (TDEE)?")
        .default("2000".to_string())
        .interact_text()?;

    let target: i64 = input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput("Invalid number".to_string()))?;

    if !(0..=max).contains(&target) {
        return Err(PlanError::InvalidInput(format!(
            "Calorie target must be between 0 and {}",
            max
        )));
    }

    Ok(target)
}

/// Multi-select over the dietary flags, starting from `current`.
pub fn prompt_preferences(current: DietaryPreferences) -> Result<DietaryPreferences> {
    let labels: Vec<&str> = DietaryTag::ALL.iter().map(|t| t.column_name()).collect();
    let defaults: Vec<bool> = DietaryTag::ALL.iter().map(|t| current.is_active(*t)).collect();

    let chosen = MultiSelect::new()
        .with_prompt("Dietary restrictions (space to toggle, enter to confirm)")
        .items(&labels)
        .defaults(&defaults)
        .interact()?;

    let mut preferences = DietaryPreferences::default();
    for index in chosen {
        if let Some(tag) = DietaryTag::ALL.get(index) {
            preferences.set(*tag, true);
        }
    }
    Ok(preferences)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
