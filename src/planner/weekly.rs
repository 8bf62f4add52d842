use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::config::PlannerConfig;
use crate::error::{PlanError, Result};
use crate::models::{Category, DailyPlan, DietaryPreferences, FoodItem, WeeklyPlan, Weekday};
use crate::planner::daily::{assemble_day, DayPools};
use crate::planner::filter::filter_by_preferences;
use crate::planner::usage::{record, UsageTracker};

/// Owns the catalog and tuning for plan generation.
///
/// Both are read-only after construction, so one planner can serve any
/// number of requests; each request allocates its own usage sets.
#[derive(Debug, Clone)]
pub struct Planner {
    catalog: Catalog,
    config: PlannerConfig,
}

impl Planner {
    pub fn new(catalog: Catalog, config: PlannerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { catalog, config })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Generate a week with a freshly seeded random source.
    pub fn generate_weekly_plan(
        &self,
        target_calories: i64,
        preferences: &DietaryPreferences,
    ) -> Result<WeeklyPlan> {
        let mut rng = StdRng::from_entropy();
        self.generate_weekly_plan_with_rng(target_calories, preferences, &mut rng)
    }

    /// Generate a week, Monday through Sunday, drawing randomness from `rng`.
    pub fn generate_weekly_plan_with_rng<R: Rng + ?Sized>(
        &self,
        target_calories: i64,
        preferences: &DietaryPreferences,
        rng: &mut R,
    ) -> Result<WeeklyPlan> {
        self.validate_target(target_calories)?;

        let filtered = filter_by_preferences(&self.catalog, preferences)?;
        let pools = DayPools {
            breakfast: filtered.by_category(Category::Breakfast),
            lunch_dinner: filtered.by_category(Category::LunchDinner),
            side_dishes: filtered.by_category(Category::SideDish),
            drinks: filtered.by_category(Category::Drink),
            all_drinks: self.catalog.by_category(Category::Drink),
        };
        require_pool(&pools.breakfast, Category::Breakfast)?;
        require_pool(&pools.lunch_dinner, Category::LunchDinner)?;

        let target = target_calories as f64;
        let mut usage = UsageTracker::new();
        let mut week = WeeklyPlan::new();

        for day in Weekday::ALL {
            let plan = assemble_day(&pools, &usage, target, &self.config, rng)?;
            self.record_day(&mut usage, &plan);
            debug!(day = %day, total = plan.total_calories(), "assembled day");
            week.insert(day, plan);
        }

        info!(
            target = target_calories,
            active = ?preferences.active_tags(),
            "generated weekly plan"
        );
        Ok(week)
    }

    fn validate_target(&self, target: i64) -> Result<()> {
        if target < 0 {
            return Err(PlanError::InvalidInput(format!(
                "target calories must not be negative (got {})",
                target
            )));
        }
        if target > self.config.max_daily_calories {
            return Err(PlanError::InvalidInput(format!(
                "target calories must be at most {} (got {})",
                self.config.max_daily_calories, target
            )));
        }
        Ok(())
    }

    fn record_day(&self, usage: &mut UsageTracker, plan: &DailyPlan) {
        let starch = &self.config.starch_title;
        record(&mut usage.breakfast_mains, &plan.breakfast.main, starch);
        record(&mut usage.lunch_dinner_mains, &plan.lunch.main, starch);
        record(&mut usage.lunch_dinner_mains, &plan.dinner.main, starch);
        for meal in [&plan.breakfast, &plan.lunch, &plan.dinner] {
            record(&mut usage.side_dishes, &meal.side_dish, starch);
            record(&mut usage.drinks, &meal.drink, starch);
        }
    }
}

fn require_pool(pool: &[&FoodItem], category: Category) -> Result<()> {
    if pool.is_empty() {
        return Err(PlanError::CatalogInsufficient(format!(
            "no {} items match the dietary requirements; try relaxing your constraints",
            category.name().to_lowercase()
        )));
    }
    Ok(())
}
