use std::collections::HashSet;
use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

use weekly_meal_planner_rs::catalog::{load_catalog, save_weekly_plan, CatalogPaths};
use weekly_meal_planner_rs::config::PlannerConfig;
use weekly_meal_planner_rs::error::PlanError;
use weekly_meal_planner_rs::models::{DietaryPreferences, MealSlot, Weekday};
use weekly_meal_planner_rs::planner::Planner;

const HEADER: &str = "title,calories,Vegetarian,Low-Purine,Low-fat/Heart-Healthy,Low-Sodium,Lactose-free,Peanut Allergy,Shellfish Allergy,Fish Allergy,Halal or Kosher";

fn write_csv(dir: &Path, name: &str, rows: &[&str]) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut content = String::from(HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    fs::write(&path, content).unwrap();
    path
}

fn catalog_paths(
    dir: &TempDir,
    breakfast: &[&str],
    lunch_dinner: &[&str],
    sides: &[&str],
    drinks: &[&str],
) -> CatalogPaths {
    CatalogPaths {
        breakfast: write_csv(dir.path(), "bf.csv", breakfast),
        lunch_dinner: write_csv(dir.path(), "lunch.csv", lunch_dinner),
        side_dish: write_csv(dir.path(), "sides.csv", sides),
        drink: write_csv(dir.path(), "drinks.csv", drinks),
    }
}

fn varied_planner(dir: &TempDir) -> Planner {
    let paths = catalog_paths(
        dir,
        &[
            "Tapsilog,520,0,0,0,0,1,1,1,1,1",
            "Champorado,310,1,1,1,1,0,1,1,1,1",
            "Arroz Caldo,280,0,1,1,0,1,1,1,1,1",
            "Pandesal with Egg,260,1,1,0,1,1,1,1,1,1",
            "Tortang Talong,230,1,1,1,1,1,1,1,1,1",
        ],
        &[
            "Chicken Adobo,480,0,0,0,0,1,1,1,1,1",
            "Sinigang na Hipon,350,0,1,1,0,1,1,0,1,1",
            "Pinakbet,300,1,1,1,1,1,1,1,1,1",
            "Ginisang Monggo,330,1,0,1,1,1,1,1,1,1",
            "Tinolang Manok,380,0,1,1,1,1,1,1,1,1",
            "Kare-Kare,620,0,0,0,0,1,0,1,1,0",
            "Laing,410,1,1,0,0,0,1,1,1,1",
        ],
        &[
            "Atchara,60,1,1,1,0,1,1,1,1,1",
            "Ensaladang Talong,90,1,1,1,1,1,1,1,1,1",
            "Lumpiang Sariwa,150,1,1,1,1,1,0,1,1,1",
            "Kinilaw,120,0,1,1,1,1,1,0,0,1",
        ],
        &[
            "Water,0,1,1,1,1,1,1,1,1,1",
            "Calamansi Juice,90,1,1,1,1,1,1,1,1,1",
            "Buko Juice,110,1,1,1,1,1,1,1,1,1",
            "Taho,180,1,1,1,1,0,1,1,1,1",
        ],
    );
    let catalog = load_catalog(&paths).unwrap();
    Planner::new(catalog, PlannerConfig::default()).unwrap()
}

#[test]
fn test_single_option_catalog_reaches_target_with_rice() {
    let dir = TempDir::new().unwrap();
    let paths = catalog_paths(
        &dir,
        &["Champorado,300,1,0,0,0,0,0,0,0,0"],
        &["Pinakbet,500,1,0,0,0,0,0,0,0,0"],
        &["Lumpia,100,0,0,0,0,0,0,0,0,0"],
        &["Water,0,0,0,0,0,0,0,0,0,0"],
    );
    let planner = Planner::new(load_catalog(&paths).unwrap(), PlannerConfig::default()).unwrap();
    let prefs = DietaryPreferences {
        vegetarian: true,
        ..Default::default()
    };

    let mut rng = StdRng::seed_from_u64(42);
    let week = planner
        .generate_weekly_plan_with_rng(2000, &prefs, &mut rng)
        .unwrap();

    assert_eq!(week.len(), 7);
    for (day, plan) in week.days() {
        assert_eq!(plan.breakfast.main.title, "Champorado");
        assert_eq!(plan.lunch.main.title, "Pinakbet");
        assert_eq!(plan.dinner.main.title, "Pinakbet");
        for slot in MealSlot::ALL {
            assert_eq!(plan.meal(slot).drink.title, "Water");
        }
        assert!(
            (plan.total_calories() - 2000.0).abs() <= 150.0,
            "{} total {} is outside the tolerance",
            day,
            plan.total_calories()
        );
    }
}

#[test]
fn test_unsatisfiable_restriction_is_catalog_insufficient() {
    let dir = TempDir::new().unwrap();
    let paths = catalog_paths(
        &dir,
        &["Champorado,300,1,0,0,0,0,0,0,0,0"],
        &["Sinigang na Hipon,350,0,0,0,0,0,0,0,0,0"],
        &[],
        &["Water,0,0,0,0,0,0,0,0,0,0"],
    );
    let planner = Planner::new(load_catalog(&paths).unwrap(), PlannerConfig::default()).unwrap();
    let prefs = DietaryPreferences {
        shellfish_allergy: true,
        ..Default::default()
    };

    let err = planner.generate_weekly_plan(2000, &prefs).unwrap_err();
    assert!(matches!(err, PlanError::CatalogInsufficient(_)));
    assert!(err.is_client_error());
}

#[test]
fn test_every_day_has_twelve_components() {
    let dir = TempDir::new().unwrap();
    let planner = varied_planner(&dir);
    let mut rng = StdRng::seed_from_u64(7);
    let week = planner
        .generate_weekly_plan_with_rng(1800, &DietaryPreferences::default(), &mut rng)
        .unwrap();

    let days: Vec<Weekday> = week.days().map(|(d, _)| d).collect();
    assert_eq!(days, Weekday::ALL.to_vec());
    for (_, plan) in week.days() {
        assert_eq!(plan.components().len(), 12);
        assert!(!plan.breakfast.main.is_none());
        assert!(!plan.lunch.main.is_none());
        assert!(!plan.dinner.main.is_none());
    }
}

#[test]
fn test_lunch_and_dinner_mains_differ() {
    let dir = TempDir::new().unwrap();
    let planner = varied_planner(&dir);

    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let week = planner
            .generate_weekly_plan_with_rng(2200, &DietaryPreferences::default(), &mut rng)
            .unwrap();
        for (day, plan) in week.days() {
            assert_ne!(
                plan.lunch.main.title, plan.dinner.main.title,
                "seed {} {} repeated its main",
                seed, day
            );
        }
    }
}

#[test]
fn test_starch_servings_are_one_or_two() {
    let dir = TempDir::new().unwrap();
    let planner = varied_planner(&dir);

    for target in [0, 1200, 2000, 3500] {
        let mut rng = StdRng::seed_from_u64(target as u64);
        let week = planner
            .generate_weekly_plan_with_rng(target, &DietaryPreferences::default(), &mut rng)
            .unwrap();
        for (_, plan) in week.days() {
            for slot in MealSlot::ALL {
                let starch = &plan.meal(slot).starch;
                assert_eq!(starch.title, "Rice");
                assert!(starch.servings == 1.0 || starch.servings == 2.0);
            }
        }
    }
}

#[test]
fn test_served_items_respect_restrictions() {
    let dir = TempDir::new().unwrap();
    let planner = varied_planner(&dir);
    let prefs = DietaryPreferences {
        vegetarian: true,
        ..Default::default()
    };

    let mut rng = StdRng::seed_from_u64(11);
    let week = planner
        .generate_weekly_plan_with_rng(2000, &prefs, &mut rng)
        .unwrap();

    for (_, plan) in week.days() {
        for component in plan.components() {
            if component.is_none() || component.title == "Rice" {
                continue;
            }
            let item = planner.catalog().find(&component.title).unwrap();
            assert!(
                prefs.is_satisfied_by(item),
                "{} is not vegetarian",
                component.title
            );
        }
    }
}

#[test]
fn test_breakfast_mains_vary_across_the_week() {
    let dir = TempDir::new().unwrap();
    let planner = varied_planner(&dir);
    let mut rng = StdRng::seed_from_u64(5);
    let week = planner
        .generate_weekly_plan_with_rng(2000, &DietaryPreferences::default(), &mut rng)
        .unwrap();

    // Three breakfast items sit within the main margin of the 252 cal target.
    let first_three: HashSet<&str> = week
        .days()
        .take(3)
        .map(|(_, plan)| plan.breakfast.main.title.as_str())
        .collect();
    assert_eq!(first_three.len(), 3);
}

#[test]
fn test_zero_target_still_plans() {
    let dir = TempDir::new().unwrap();
    let planner = varied_planner(&dir);
    let mut rng = StdRng::seed_from_u64(3);
    let week = planner
        .generate_weekly_plan_with_rng(0, &DietaryPreferences::default(), &mut rng)
        .unwrap();

    for (_, plan) in week.days() {
        for slot in MealSlot::ALL {
            let meal = plan.meal(slot);
            assert_eq!(meal.main.servings, 1.0);
            assert_eq!(meal.starch.servings, 1.0);
            assert_eq!(meal.drink.title, "Water");
        }
    }
}

#[test]
fn test_saved_plan_is_keyed_by_weekday() {
    let dir = TempDir::new().unwrap();
    let planner = varied_planner(&dir);
    let mut rng = StdRng::seed_from_u64(21);
    let week = planner
        .generate_weekly_plan_with_rng(2000, &DietaryPreferences::default(), &mut rng)
        .unwrap();

    let path = dir.path().join("plan.json");
    save_weekly_plan(&path, &week).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 7);
    assert_eq!(value["Monday"]["breakfast"]["starch"]["title"], "Rice");
}
