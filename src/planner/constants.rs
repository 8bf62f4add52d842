// ─────────────────────────────────────────────────────────────────────────────
// Starch component
// ─────────────────────────────────────────────────────────────────────────────

/// Title of the fixed starch served with every meal.
pub const STARCH_TITLE: &str = "Rice";

/// Calories in one starch serving.
pub const STARCH_CALORIES_PER_SERVING: f64 = 200.0;

/// Baseline starch servings per meal, reserved before budgeting.
pub const STARCH_BASE_SERVINGS: f64 = 1.0;

/// Servings a starch is upgraded to by the rebalance pass.
pub const STARCH_UPGRADED_SERVINGS: f64 = 2.0;

/// Upgrade while the shortfall is at least this fraction of one serving.
pub const STARCH_UPGRADE_THRESHOLD: f64 = 0.75;

// ─────────────────────────────────────────────────────────────────────────────
// Budget split
// ─────────────────────────────────────────────────────────────────────────────

/// Share of the non-starch budget for breakfast. Dinner takes the remainder.
pub const BREAKFAST_SHARE: f64 = 0.30;
pub const LUNCH_SHARE: f64 = 0.35;

/// Split of a meal budget into main dish, side dish and drink.
pub const MAIN_SHARE: f64 = 0.60;
pub const SIDE_SHARE: f64 = 0.20;
pub const DRINK_SHARE: f64 = 0.20;

// ─────────────────────────────────────────────────────────────────────────────
// Selection
// ─────────────────────────────────────────────────────────────────────────────

/// Accepted deviation from a main-dish target.
pub const MAIN_MARGIN: f64 = 50.0;

/// Accepted deviation from a side-dish or drink target.
pub const SIDE_DRINK_MARGIN: f64 = 30.0;

/// Margin multiplier for the second tier.
pub const MAIN_WIDEN_FACTOR: f64 = 2.0;
pub const SIDE_DRINK_WIDEN_FACTOR: f64 = 2.5;

/// Calorie cap (in margins) for small side/drink targets.
pub const LOW_TARGET_CAP_FACTOR: f64 = 1.5;

/// Calorie cap for side/drink candidates when the target is zero.
pub const NEAR_ZERO_CALORIES: f64 = 20.0;

/// Closest candidates kept before sampling.
pub const SHORTLIST_SIZE: usize = 5;

/// Serving ladder for main dishes.
pub const MAIN_SERVING_LADDER: [f64; 11] =
    [0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0, 2.25, 2.5, 2.75, 3.0];

/// Side dishes are served as a half or a whole portion.
pub const SIDE_HALF_SERVING: f64 = 0.5;
pub const SIDE_FULL_SERVING: f64 = 1.0;

/// Drink title that the fallback path ranks last.
pub const WATER_TITLE: &str = "Water";

// ─────────────────────────────────────────────────────────────────────────────
// Requests and evaluation
// ─────────────────────────────────────────────────────────────────────────────

/// Largest daily calorie target accepted.
pub const MAX_DAILY_CALORIES: i64 = 20_000;

/// A day matches its target when within this many calories.
pub const CALORIE_TOLERANCE: f64 = 150.0;

/// Days per week that must match the calorie target for a successful week.
pub const MIN_CALORIE_MATCHED_DAYS: usize = 5;

/// Width of the diagnostic calorie bands.
pub const CALORIE_BAND_WIDTH: u32 = 30;
