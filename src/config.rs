use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::planner::constants::*;

/// Runtime-configurable planner constants.
///
/// Every field defaults to its value in `planner::constants`, so a config file
/// only needs the entries it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub starch_title: String,
    pub starch_calories: f64,
    pub starch_upgraded_servings: f64,
    pub starch_upgrade_threshold: f64,
    pub breakfast_share: f64,
    pub lunch_share: f64,
    pub main_share: f64,
    pub side_share: f64,
    pub drink_share: f64,
    pub main_margin: f64,
    pub side_drink_margin: f64,
    pub main_widen_factor: f64,
    pub side_drink_widen_factor: f64,
    pub low_target_cap_factor: f64,
    pub near_zero_calories: f64,
    pub shortlist_size: usize,
    pub calorie_tolerance: f64,
    pub max_daily_calories: i64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            starch_title: STARCH_TITLE.to_string(),
            starch_calories: STARCH_CALORIES_PER_SERVING,
            starch_upgraded_servings: STARCH_UPGRADED_SERVINGS,
            starch_upgrade_threshold: STARCH_UPGRADE_THRESHOLD,
            breakfast_share: BREAKFAST_SHARE,
            lunch_share: LUNCH_SHARE,
            main_share: MAIN_SHARE,
            side_share: SIDE_SHARE,
            drink_share: DRINK_SHARE,
            main_margin: MAIN_MARGIN,
            side_drink_margin: SIDE_DRINK_MARGIN,
            main_widen_factor: MAIN_WIDEN_FACTOR,
            side_drink_widen_factor: SIDE_DRINK_WIDEN_FACTOR,
            low_target_cap_factor: LOW_TARGET_CAP_FACTOR,
            near_zero_calories: NEAR_ZERO_CALORIES,
            shortlist_size: SHORTLIST_SIZE,
            calorie_tolerance: CALORIE_TOLERANCE,
            max_daily_calories: MAX_DAILY_CALORIES,
        }
    }
}

impl PlannerConfig {
    /// Load a config from a JSON file and validate it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: PlannerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise fall back to the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Calories reserved for one baseline starch serving at each meal.
    pub fn starch_reservation(&self) -> f64 {
        3.0 * STARCH_BASE_SERVINGS * self.starch_calories
    }

    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("starch_calories", self.starch_calories),
            ("starch_upgraded_servings", self.starch_upgraded_servings),
            ("starch_upgrade_threshold", self.starch_upgrade_threshold),
            ("main_margin", self.main_margin),
            ("side_drink_margin", self.side_drink_margin),
            ("main_widen_factor", self.main_widen_factor),
            ("side_drink_widen_factor", self.side_drink_widen_factor),
            ("low_target_cap_factor", self.low_target_cap_factor),
            ("near_zero_calories", self.near_zero_calories),
            ("calorie_tolerance", self.calorie_tolerance),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!("{} must be a non-negative number", name)));
            }
        }

        let shares = [
            ("breakfast_share", self.breakfast_share),
            ("lunch_share", self.lunch_share),
            ("main_share", self.main_share),
            ("side_share", self.side_share),
            ("drink_share", self.drink_share),
        ];
        for (name, value) in shares {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(format!("{} must be within [0, 1]", name)));
            }
        }

        if self.breakfast_share + self.lunch_share > 1.0 {
            return Err(invalid(
                "breakfast_share + lunch_share must not exceed 1".to_string(),
            ));
        }

        let component_sum = self.main_share + self.side_share + self.drink_share;
        if (component_sum - 1.0).abs() > 1e-6 {
            return Err(invalid(format!(
                "main/side/drink shares must sum to 1 (got {:.3})",
                component_sum
            )));
        }

        if self.starch_upgraded_servings < STARCH_BASE_SERVINGS {
            return Err(invalid(
                "starch_upgraded_servings must not be below one serving".to_string(),
            ));
        }

        if self.shortlist_size == 0 {
            return Err(invalid("shortlist_size must be at least 1".to_string()));
        }

        if self.max_daily_calories < 0 {
            return Err(invalid("max_daily_calories must be non-negative".to_string()));
        }

        if self.starch_title.trim().is_empty() {
            return Err(invalid("starch_title must not be empty".to_string()));
        }

        Ok(())
    }
}

fn invalid(message: String) -> PlanError {
    PlanError::InvalidInput(format!("config: {}", message))
}
