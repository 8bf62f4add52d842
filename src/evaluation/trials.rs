use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{PlanError, Result};
use crate::models::{DailyPlan, DietaryPreferences, WeeklyPlan, NONE_TITLE};
use crate::planner::constants::{MIN_CALORIE_MATCHED_DAYS, WATER_TITLE};
use crate::planner::Planner;

/// Outcome of one generated week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialResult {
    pub trial: usize,
    pub calorie_matched_days: usize,
    pub preference_matched_days: usize,
    pub days: usize,
    pub success: bool,
    pub avg_daily_calories: f64,
}

/// Rates over all completed trials. Each lies in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EvaluationMetrics {
    /// Successful weeks over completed weeks.
    pub success_rate: f64,
    /// Calorie-matching days over evaluated days.
    pub calorie_match_rate: f64,
    /// Preference-matching days over evaluated days.
    pub preference_match_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub target_calories: i64,
    pub tolerance: f64,
    pub trials_requested: usize,
    pub trials_completed: usize,
    pub days_evaluated: usize,
    pub calorie_matched_days: usize,
    pub preference_matched_days: usize,
    pub successful_weeks: usize,
    pub metrics: EvaluationMetrics,
    pub trials: Vec<TrialResult>,
}

/// Generate `n_trials` weeks and score them.
///
/// A day matches on calories when its total is within the configured
/// tolerance of the target, and on preferences when every served item
/// satisfies every active flag. A week succeeds with at least five calorie
/// matches and seven preference matches. Failed generations are skipped.
pub fn evaluate<R: Rng + ?Sized>(
    planner: &Planner,
    target_calories: i64,
    preferences: &DietaryPreferences,
    n_trials: usize,
    rng: &mut R,
) -> Result<EvaluationReport> {
    if n_trials == 0 {
        return Err(PlanError::InvalidInput(
            "number of trials must be at least 1".to_string(),
        ));
    }

    let tolerance = planner.config().calorie_tolerance;
    let mut trials = Vec::with_capacity(n_trials);

    for trial in 0..n_trials {
        let week = match planner.generate_weekly_plan_with_rng(target_calories, preferences, rng) {
            Ok(week) => week,
            Err(e) => {
                warn!(trial, error = %e, "trial failed during plan generation");
                continue;
            }
        };
        trials.push(score_week(planner, &week, trial, target_calories, preferences));
    }

    let report = summarize(target_calories, tolerance, n_trials, trials);
    info!(
        trials = report.trials_completed,
        success_rate = report.metrics.success_rate,
        calorie_match_rate = report.metrics.calorie_match_rate,
        preference_match_rate = report.metrics.preference_match_rate,
        "evaluation finished"
    );
    Ok(report)
}

fn score_week(
    planner: &Planner,
    week: &WeeklyPlan,
    trial: usize,
    target_calories: i64,
    preferences: &DietaryPreferences,
) -> TrialResult {
    let tolerance = planner.config().calorie_tolerance;
    let target = target_calories as f64;

    let mut calorie_matched_days = 0;
    let mut preference_matched_days = 0;
    let mut total = 0.0;

    for (_, day) in week.days() {
        let day_total = day.total_calories();
        total += day_total;
        if (day_total - target).abs() <= tolerance {
            calorie_matched_days += 1;
        }
        if verify_day_preferences(planner, day, preferences) {
            preference_matched_days += 1;
        }
    }

    let days = week.len();
    TrialResult {
        trial,
        calorie_matched_days,
        preference_matched_days,
        days,
        success: calorie_matched_days >= MIN_CALORIE_MATCHED_DAYS
            && preference_matched_days == days,
        avg_daily_calories: if days > 0 { total / days as f64 } else { 0.0 },
    }
}

fn summarize(
    target_calories: i64,
    tolerance: f64,
    trials_requested: usize,
    trials: Vec<TrialResult>,
) -> EvaluationReport {
    let trials_completed = trials.len();
    let days_evaluated: usize = trials.iter().map(|t| t.days).sum();
    let calorie_matched_days: usize = trials.iter().map(|t| t.calorie_matched_days).sum();
    let preference_matched_days: usize = trials.iter().map(|t| t.preference_matched_days).sum();
    let successful_weeks = trials.iter().filter(|t| t.success).count();

    let ratio = |num: usize, den: usize| if den > 0 { num as f64 / den as f64 } else { 0.0 };

    EvaluationReport {
        target_calories,
        tolerance,
        trials_requested,
        trials_completed,
        days_evaluated,
        calorie_matched_days,
        preference_matched_days,
        successful_weeks,
        metrics: EvaluationMetrics {
            success_rate: ratio(successful_weeks, trials_completed),
            calorie_match_rate: ratio(calorie_matched_days, days_evaluated),
            preference_match_rate: ratio(preference_matched_days, days_evaluated),
        },
        trials,
    }
}

/// True when every served item on the day satisfies the active flags.
pub fn verify_day_preferences(
    planner: &Planner,
    day: &DailyPlan,
    preferences: &DietaryPreferences,
) -> bool {
    day.components()
        .iter()
        .all(|component| verify_preferences(planner, &component.title, preferences))
}

/// Look `title` up in the full catalog and check it against the flags.
///
/// Sentinel titles always pass; unknown titles always fail.
pub fn verify_preferences(planner: &Planner, title: &str, preferences: &DietaryPreferences) -> bool {
    if title == NONE_TITLE || title == WATER_TITLE || title == planner.config().starch_title {
        return true;
    }
    match planner.catalog().find(title) {
        Some(item) => preferences.is_satisfied_by(item),
        None => {
            warn!(title, "served item not found in catalog");
            false
        }
    }
}
