use crate::config::PlannerConfig;
use crate::models::MealSlot;

/// Calorie sub-targets for one meal.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlotTargets {
    pub main: f64,
    pub side: f64,
    pub drink: f64,
}

impl SlotTargets {
    pub fn total(&self) -> f64 {
        self.main + self.side + self.drink
    }
}

/// Per-meal, per-component targets for one day.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DayBudget {
    /// Calories reserved for the three baseline starch servings.
    pub starch_reserved: f64,
    pub breakfast: SlotTargets,
    pub lunch: SlotTargets,
    pub dinner: SlotTargets,
}

impl DayBudget {
    pub fn slot(&self, slot: MealSlot) -> SlotTargets {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Dinner => self.dinner,
        }
    }
}

/// Split a daily target into per-slot sub-targets.
///
/// Starch is reserved first. Breakfast and lunch take fixed shares of the
/// remainder (truncated to whole calories); dinner takes what is left.
pub fn budget_day(daily_target: f64, config: &PlannerConfig) -> DayBudget {
    let starch_reserved = config.starch_reservation();
    let remaining = (daily_target - starch_reserved).max(0.0);

    let breakfast_cal = (remaining * config.breakfast_share).floor();
    let lunch_cal = (remaining * config.lunch_share).floor();
    let dinner_cal = (remaining - breakfast_cal - lunch_cal).max(0.0);

    DayBudget {
        starch_reserved,
        breakfast: split_slot(breakfast_cal, config),
        lunch: split_slot(lunch_cal, config),
        dinner: split_slot(dinner_cal, config),
    }
}

/// Split one meal budget into main/side/drink.
///
/// The rounding remainder goes to the main dish, so the three parts always
/// sum to `slot_calories`.
pub fn split_slot(slot_calories: f64, config: &PlannerConfig) -> SlotTargets {
    let side = (slot_calories * config.side_share).floor().max(0.0);
    let drink = (slot_calories * config.drink_share).floor().max(0.0);
    let main = (slot_calories - side - drink).max(0.0);
    SlotTargets { main, side, drink }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    #[test]
    fn test_budget_2000() {
        let config = PlannerConfig::default();
        let budget = budget_day(2000.0, &config);

        assert_float_absolute_eq!(budget.starch_reserved, 600.0, 1e-9);
        // 1400 remaining; 1400 * 0.35 truncates to 489 in binary floating point
        assert_float_absolute_eq!(budget.breakfast.total(), 420.0, 1e-9);
        assert_float_absolute_eq!(budget.lunch.total(), 489.0, 1e-9);
        assert_float_absolute_eq!(budget.dinner.total(), 491.0, 1e-9);

        assert_float_absolute_eq!(budget.breakfast.main, 252.0, 1e-9);
        assert_float_absolute_eq!(budget.breakfast.side, 84.0, 1e-9);
        assert_float_absolute_eq!(budget.breakfast.drink, 84.0, 1e-9);
    }

    #[test]
    fn test_rounding_remainder_goes_to_main() {
        let config = PlannerConfig::default();
        let targets = split_slot(101.0, &config);
        assert_float_absolute_eq!(targets.side, 20.0, 1e-9);
        assert_float_absolute_eq!(targets.drink, 20.0, 1e-9);
        assert_float_absolute_eq!(targets.main, 61.0, 1e-9);
        assert_float_absolute_eq!(targets.total(), 101.0, 1e-9);
    }

    #[test]
    fn test_slot_targets_always_sum_to_slot_budget() {
        let config = PlannerConfig::default();
        for daily in [0.0, 599.0, 601.0, 1234.0, 1999.0, 2500.0, 3777.0] {
            let budget = budget_day(daily, &config);
            let remaining = (daily - 600.0_f64).max(0.0);
            let sum: f64 = MealSlot::ALL.iter().map(|s| budget.slot(*s).total()).sum();
            assert_float_absolute_eq!(sum, remaining, 1e-9);
        }
    }

    #[test]
    fn test_zero_target_gives_zero_subtargets() {
        let config = PlannerConfig::default();
        let budget = budget_day(0.0, &config);
        for slot in MealSlot::ALL {
            assert_eq!(budget.slot(slot), SlotTargets::default());
        }
    }
}
