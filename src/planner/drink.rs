use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::warn;

use crate::models::{FoodItem, MealComponent};
use crate::planner::constants::WATER_TITLE;

/// Pick any drink when calorie-driven selection found none.
///
/// Tries the preference-filtered drinks first, then every drink in the
/// catalog. The second step drops dietary constraints: a drink is always
/// served when the catalog has one.
pub fn fallback_drink<R: Rng + ?Sized>(
    preferred: &[&FoodItem],
    all_drinks: &[&FoodItem],
    used: &HashSet<String>,
    rng: &mut R,
) -> MealComponent {
    if let Some(item) = sample_drink(preferred, used, rng) {
        return MealComponent::from_item(item, 1.0);
    }

    if let Some(item) = sample_drink(all_drinks, used, rng) {
        warn!(
            title = %item.title,
            "no drink satisfies the dietary filter; serving one from the full catalog"
        );
        return MealComponent::from_item(item, 1.0);
    }

    MealComponent::none()
}

/// Unused non-water, unused water, any non-water, any water.
fn sample_drink<'a, R: Rng + ?Sized>(
    drinks: &[&'a FoodItem],
    used: &HashSet<String>,
    rng: &mut R,
) -> Option<&'a FoodItem> {
    let is_water = |item: &FoodItem| item.title == WATER_TITLE;
    let is_unused = |item: &FoodItem| !used.contains(&item.title);

    let rules: [&dyn Fn(&FoodItem) -> bool; 4] = [
        &|item: &FoodItem| is_unused(item) && !is_water(item),
        &|item: &FoodItem| is_unused(item) && is_water(item),
        &|item: &FoodItem| !is_water(item),
        &|item: &FoodItem| is_water(item),
    ];

    rules.iter().find_map(|rule| {
        let matching: Vec<&'a FoodItem> = drinks.iter().copied().filter(|d| rule(*d)).collect();
        matching.choose(&mut *rng).copied()
    })
}
