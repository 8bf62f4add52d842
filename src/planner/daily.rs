use std::collections::HashSet;

use rand::Rng;
use tracing::debug;

use crate::config::PlannerConfig;
use crate::error::{PlanError, Result};
use crate::models::{DailyPlan, FoodItem, Meal, MealComponent, MealSlot};
use crate::planner::budget::{budget_day, DayBudget};
use crate::planner::constants::STARCH_BASE_SERVINGS;
use crate::planner::drink::fallback_drink;
use crate::planner::selector::{select_component, Role, SelectionRequest};
use crate::planner::usage::{record, UsageTracker};

/// Candidate pools for one request, split by category.
///
/// `all_drinks` is the unfiltered drink list used when the dietary filter
/// leaves no drink to serve.
#[derive(Debug, Clone, Default)]
pub struct DayPools<'a> {
    pub breakfast: Vec<&'a FoodItem>,
    pub lunch_dinner: Vec<&'a FoodItem>,
    pub side_dishes: Vec<&'a FoodItem>,
    pub drinks: Vec<&'a FoodItem>,
    pub all_drinks: Vec<&'a FoodItem>,
}

/// Where day assembly currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    SelectBreakfast,
    SelectLunch,
    SelectDinner,
    RebalanceStarch,
    Done,
}

impl Stage {
    fn next(self) -> Stage {
        match self {
            Stage::SelectBreakfast => Stage::SelectLunch,
            Stage::SelectLunch => Stage::SelectDinner,
            Stage::SelectDinner => Stage::RebalanceStarch,
            Stage::RebalanceStarch | Stage::Done => Stage::Done,
        }
    }
}

/// Main, side and drink picked for one slot, before starch is attached.
#[derive(Debug, Clone)]
struct SlotPick {
    main: MealComponent,
    side_dish: MealComponent,
    drink: MealComponent,
}

impl SlotPick {
    fn total_calories(&self) -> f64 {
        self.main.total_calories + self.side_dish.total_calories + self.drink.total_calories
    }

    fn into_meal(self, starch: MealComponent) -> Meal {
        Meal {
            main: self.main,
            starch,
            side_dish: self.side_dish,
            drink: self.drink,
        }
    }
}

/// Builds one day's plan.
///
/// Reads the week's usage sets without modifying them; the caller records
/// the finished day.
pub struct DayAssembler<'p, 'a, R: Rng + ?Sized> {
    pools: &'p DayPools<'a>,
    usage: &'p UsageTracker,
    config: &'p PlannerConfig,
    rng: &'p mut R,
    target: f64,
    budget: DayBudget,

    // Titles already served today, layered on top of the week's sets.
    day_sides: HashSet<String>,
    day_drinks: HashSet<String>,

    breakfast: Option<SlotPick>,
    lunch: Option<SlotPick>,
    dinner: Option<SlotPick>,
    starch_servings: [f64; 3],
}

impl<'p, 'a, R: Rng + ?Sized> DayAssembler<'p, 'a, R> {
    pub fn new(
        pools: &'p DayPools<'a>,
        usage: &'p UsageTracker,
        target: f64,
        config: &'p PlannerConfig,
        rng: &'p mut R,
    ) -> Self {
        Self {
            pools,
            usage,
            config,
            rng,
            target,
            budget: budget_day(target, config),
            day_sides: usage.side_dishes.clone(),
            day_drinks: usage.drinks.clone(),
            breakfast: None,
            lunch: None,
            dinner: None,
            starch_servings: [STARCH_BASE_SERVINGS; 3],
        }
    }

    /// Run every stage and return the finished day.
    pub fn run(mut self) -> Result<DailyPlan> {
        let mut stage = Stage::SelectBreakfast;
        while stage != Stage::Done {
            self.step(stage)?;
            stage = stage.next();
        }
        self.finish()
    }

    fn step(&mut self, stage: Stage) -> Result<()> {
        match stage {
            Stage::SelectBreakfast => {
                let pool = self.pools.breakfast.clone();
                let used = self.usage.breakfast_mains.clone();
                let main = self.select_main(MealSlot::Breakfast, &pool, &used)?;
                self.breakfast = Some(self.select_accessories(MealSlot::Breakfast, main));
            }
            Stage::SelectLunch => {
                let pool = self.pools.lunch_dinner.clone();
                let used = self.usage.lunch_dinner_mains.clone();
                let main = self.select_main(MealSlot::Lunch, &pool, &used)?;
                self.lunch = Some(self.select_accessories(MealSlot::Lunch, main));
            }
            Stage::SelectDinner => {
                let main = self.select_dinner_main()?;
                self.dinner = Some(self.select_accessories(MealSlot::Dinner, main));
            }
            Stage::RebalanceStarch => self.rebalance_starch(),
            Stage::Done => {}
        }
        Ok(())
    }

    fn select_main(
        &mut self,
        slot: MealSlot,
        pool: &[&FoodItem],
        used: &HashSet<String>,
    ) -> Result<MealComponent> {
        let request = SelectionRequest::new(Role::Main, self.budget.slot(slot).main, self.config);
        let main = select_component(pool, used, &request, self.config, self.rng);
        if main.is_none() {
            return Err(PlanError::CatalogInsufficient(format!(
                "no {} main dish matches the dietary requirements; try relaxing your constraints",
                slot.name().to_lowercase()
            )));
        }
        Ok(main)
    }

    /// Dinner avoids the week's lunch/dinner mains and today's lunch. If
    /// it still lands on lunch's dish, one retry runs against the items
    /// never served this week, or against every other dish once the week
    /// has used them all. The repeat stands only when lunch's dish is the
    /// sole option.
    fn select_dinner_main(&mut self) -> Result<MealComponent> {
        let lunch_title = self
            .lunch
            .as_ref()
            .map(|pick| pick.main.title.clone())
            .unwrap_or_default();

        let mut used = self.usage.lunch_dinner_mains.clone();
        used.insert(lunch_title.clone());

        let pool = self.pools.lunch_dinner.clone();
        let mut main = self.select_main(MealSlot::Dinner, &pool, &used)?;

        if main.title == lunch_title {
            let mut alternatives: Vec<&FoodItem> = pool
                .iter()
                .copied()
                .filter(|item| !used.contains(&item.title))
                .collect();
            if alternatives.is_empty() {
                // Week exhausted: any dish other than today's lunch
                alternatives = pool
                    .iter()
                    .copied()
                    .filter(|item| item.title != lunch_title)
                    .collect();
            }
            if !alternatives.is_empty() {
                let request =
                    SelectionRequest::new(Role::Main, self.budget.dinner.main, self.config);
                let retry =
                    select_component(&alternatives, &HashSet::new(), &request, self.config, self.rng);
                if !retry.is_none() {
                    debug!(lunch = %lunch_title, dinner = %retry.title, "replaced repeated dinner main");
                    main = retry;
                }
            }
        }
        Ok(main)
    }

    fn select_accessories(&mut self, slot: MealSlot, main: MealComponent) -> SlotPick {
        let targets = self.budget.slot(slot);

        let side_request = SelectionRequest::new(Role::Side, targets.side, self.config);
        let side_dish = select_component(
            &self.pools.side_dishes,
            &self.day_sides,
            &side_request,
            self.config,
            self.rng,
        );

        let drink_request = SelectionRequest::new(Role::Drink, targets.drink, self.config);
        let mut drink = select_component(
            &self.pools.drinks,
            &self.day_drinks,
            &drink_request,
            self.config,
            self.rng,
        );
        if drink.is_none() {
            drink = fallback_drink(
                &self.pools.drinks,
                &self.pools.all_drinks,
                &self.day_drinks,
                self.rng,
            );
        }

        record(&mut self.day_sides, &side_dish, &self.config.starch_title);
        record(&mut self.day_drinks, &drink, &self.config.starch_title);

        SlotPick {
            main,
            side_dish,
            drink,
        }
    }

    /// Upgrade starch servings in meal order while the gap to the target is
    /// at least the configured fraction of one serving.
    fn rebalance_starch(&mut self) {
        let selected: f64 = [&self.breakfast, &self.lunch, &self.dinner]
            .iter()
            .filter_map(|pick| pick.as_ref())
            .map(SlotPick::total_calories)
            .sum();

        let starch_cal = self.config.starch_calories;
        let threshold = starch_cal * self.config.starch_upgrade_threshold;
        let step = (self.config.starch_upgraded_servings - STARCH_BASE_SERVINGS) * starch_cal;
        let mut shortfall = self.target - (selected + self.config.starch_reservation());

        for (slot, servings) in MealSlot::ALL.iter().zip(self.starch_servings.iter_mut()) {
            if shortfall < threshold {
                break;
            }
            *servings = self.config.starch_upgraded_servings;
            shortfall -= step;
            debug!(slot = %slot, shortfall, "upgraded starch serving");
        }
    }

    fn finish(self) -> Result<DailyPlan> {
        let missing = || PlanError::CatalogInsufficient("day assembly ended early".to_string());
        let starch = |servings: f64| {
            MealComponent::starch(&self.config.starch_title, self.config.starch_calories, servings)
        };
        let [b, l, d] = self.starch_servings;

        Ok(DailyPlan {
            breakfast: self.breakfast.ok_or_else(missing)?.into_meal(starch(b)),
            lunch: self.lunch.ok_or_else(missing)?.into_meal(starch(l)),
            dinner: self.dinner.ok_or_else(missing)?.into_meal(starch(d)),
        })
    }
}

/// Assemble one day against the week's usage sets.
pub fn assemble_day<R: Rng + ?Sized>(
    pools: &DayPools<'_>,
    usage: &UsageTracker,
    target: f64,
    config: &PlannerConfig,
    rng: &mut R,
) -> Result<DailyPlan> {
    DayAssembler::new(pools, usage, target, config, rng).run()
}
