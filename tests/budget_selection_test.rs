use std::collections::HashSet;

use assert_float_eq::assert_float_absolute_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use weekly_meal_planner_rs::config::PlannerConfig;
use weekly_meal_planner_rs::models::{Category, FoodItem, MealSlot};
use weekly_meal_planner_rs::planner::{
    assign_servings, budget_day, select_component, split_slot, Role, SelectionRequest,
    MAIN_SERVING_LADDER,
};

fn make_item(title: &str, cal: f64, category: Category) -> FoodItem {
    FoodItem::new(title, cal, category)
}

#[test]
fn test_budget_reserves_three_starch_servings() {
    let config = PlannerConfig::default();
    let budget = budget_day(1000.0, &config);
    assert_float_absolute_eq!(budget.starch_reserved, 600.0, 1e-9);

    let planned: f64 = MealSlot::ALL.iter().map(|s| budget.slot(*s).total()).sum();
    assert_float_absolute_eq!(planned, 400.0, 1e-9);
}

#[test]
fn test_budget_below_starch_reservation_is_zero() {
    let config = PlannerConfig::default();
    let budget = budget_day(450.0, &config);
    for slot in MealSlot::ALL {
        assert_float_absolute_eq!(budget.slot(slot).total(), 0.0, 1e-9);
    }
}

#[test]
fn test_dinner_gets_the_remainder() {
    let config = PlannerConfig::default();
    let budget = budget_day(2600.0, &config);
    let remaining = 2000.0 - budget.breakfast.total() - budget.lunch.total();
    assert_float_absolute_eq!(budget.dinner.total(), remaining, 1e-9);
    assert!(budget.breakfast.total() <= 600.0);
    assert!(budget.dinner.total() >= 0.0);
}

#[test]
fn test_slot_split_is_sixty_twenty_twenty() {
    let config = PlannerConfig::default();
    let targets = split_slot(500.0, &config);
    assert_float_absolute_eq!(targets.main, 300.0, 1e-9);
    assert_float_absolute_eq!(targets.side, 100.0, 1e-9);
    assert_float_absolute_eq!(targets.drink, 100.0, 1e-9);
}

#[test]
fn test_main_servings_stay_on_ladder() {
    for target in [10.0, 120.0, 333.0, 480.0, 777.0, 2500.0] {
        for cal in [95.0, 210.0, 480.0, 900.0] {
            let servings = assign_servings(cal, target, Role::Main);
            assert!(
                MAIN_SERVING_LADDER.contains(&servings),
                "{} is not a ladder step",
                servings
            );
        }
    }
}

#[test]
fn test_selection_stays_near_target() {
    let config = PlannerConfig::default();
    let pool = vec![
        make_item("Lugaw", 180.0, Category::Breakfast),
        make_item("Tocilog", 610.0, Category::Breakfast),
        make_item("Pandesal", 250.0, Category::Breakfast),
        make_item("Turon", 270.0, Category::Breakfast),
    ];
    let refs: Vec<&FoodItem> = pool.iter().collect();
    let request = SelectionRequest::new(Role::Main, 260.0, &config);

    for seed in 0..25 {
        let mut rng = StdRng::seed_from_u64(seed);
        let chosen = select_component(&refs, &HashSet::new(), &request, &config, &mut rng);
        assert!(
            ["Pandesal", "Turon"].contains(&chosen.title.as_str()),
            "picked {} outside the margin",
            chosen.title
        );
    }
}

#[test]
fn test_zero_target_drink_prefers_zero_calorie() {
    let config = PlannerConfig::default();
    let pool = vec![
        make_item("Water", 0.0, Category::Drink),
        make_item("Iced Tea", 120.0, Category::Drink),
    ];
    let refs: Vec<&FoodItem> = pool.iter().collect();
    let request = SelectionRequest::new(Role::Drink, 0.0, &config);

    let mut rng = StdRng::seed_from_u64(0);
    let chosen = select_component(&refs, &HashSet::new(), &request, &config, &mut rng);
    assert_eq!(chosen.title, "Water");
    assert_eq!(chosen.servings, 1.0);
}
