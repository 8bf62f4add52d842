use std::cmp::Ordering;
use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::config::PlannerConfig;
use crate::models::{FoodItem, MealComponent};
use crate::planner::constants::{MAIN_SERVING_LADDER, SIDE_FULL_SERVING, SIDE_HALF_SERVING};

/// What a selected item is used for. Changes serving policy and the
/// zero-target branch, not the search itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Main,
    Side,
    Drink,
}

/// One selection call: target calories, tolerated deviation and role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionRequest {
    pub target: f64,
    pub margin: f64,
    pub role: Role,
}

impl SelectionRequest {
    /// Request with the configured margin for `role`.
    pub fn new(role: Role, target: f64, config: &PlannerConfig) -> Self {
        let margin = match role {
            Role::Main => config.main_margin,
            Role::Side | Role::Drink => config.side_drink_margin,
        };
        Self {
            target,
            margin,
            role,
        }
    }

    fn widen_factor(&self, config: &PlannerConfig) -> f64 {
        match self.role {
            Role::Main => config.main_widen_factor,
            Role::Side | Role::Drink => config.side_drink_widen_factor,
        }
    }

    fn zero_target_accessory(&self) -> bool {
        self.target <= 0.0 && self.role != Role::Main
    }
}

/// A pool-narrowing rule: when it applies, and which items it keeps.
pub struct Tier {
    pub name: &'static str,
    pub applies: fn(&SelectionRequest) -> bool,
    pub keep: fn(&SelectionRequest, &PlannerConfig, &FoodItem) -> bool,
}

/// Tiers in the order they are tried. The first applicable tier that keeps
/// at least one item fixes the candidate pool.
pub const TIERS: [Tier; 6] = [
    Tier {
        name: "within-margin",
        applies: positive_target,
        keep: within_margin,
    },
    Tier {
        name: "widened-margin",
        applies: positive_target,
        keep: within_widened_margin,
    },
    Tier {
        name: "low-target-cap",
        applies: small_accessory_target,
        keep: under_low_target_cap,
    },
    Tier {
        name: "zero-calorie",
        applies: zero_accessory_target,
        keep: zero_calorie,
    },
    Tier {
        name: "near-zero",
        applies: zero_accessory_target,
        keep: near_zero_calorie,
    },
    Tier {
        name: "unfiltered",
        applies: not_zero_accessory_target,
        keep: any_item,
    },
];

fn positive_target(req: &SelectionRequest) -> bool {
    req.target > 0.0
}

fn small_accessory_target(req: &SelectionRequest) -> bool {
    req.target > 0.0 && req.target <= req.margin && req.role != Role::Main
}

fn zero_accessory_target(req: &SelectionRequest) -> bool {
    req.zero_target_accessory()
}

fn not_zero_accessory_target(req: &SelectionRequest) -> bool {
    !req.zero_target_accessory()
}

fn within_margin(req: &SelectionRequest, _: &PlannerConfig, item: &FoodItem) -> bool {
    (item.calories - req.target).abs() <= req.margin
}

fn within_widened_margin(req: &SelectionRequest, config: &PlannerConfig, item: &FoodItem) -> bool {
    (item.calories - req.target).abs() <= req.margin * req.widen_factor(config)
}

fn under_low_target_cap(req: &SelectionRequest, config: &PlannerConfig, item: &FoodItem) -> bool {
    item.calories <= req.margin * config.low_target_cap_factor
}

fn zero_calorie(_: &SelectionRequest, _: &PlannerConfig, item: &FoodItem) -> bool {
    item.calories == 0.0
}

fn near_zero_calorie(_: &SelectionRequest, config: &PlannerConfig, item: &FoodItem) -> bool {
    item.calories <= config.near_zero_calories
}

fn any_item(_: &SelectionRequest, _: &PlannerConfig, _: &FoodItem) -> bool {
    true
}

/// Apply the tiers to `pool` and return the first non-empty narrowing.
pub fn narrow_pool<'a>(
    pool: &[&'a FoodItem],
    request: &SelectionRequest,
    config: &PlannerConfig,
) -> Option<(&'static str, Vec<&'a FoodItem>)> {
    TIERS
        .iter()
        .filter(|tier| (tier.applies)(request))
        .find_map(|tier| {
            let kept: Vec<&FoodItem> = pool
                .iter()
                .copied()
                .filter(|item| (tier.keep)(request, config, *item))
                .collect();
            (!kept.is_empty()).then_some((tier.name, kept))
        })
}

/// Order candidates by distance from the target, lower calories first on ties.
pub fn rank_candidates(candidates: &mut [&FoodItem], target: f64) {
    let target = target.max(0.0);
    candidates.sort_by(|a, b| {
        let da = (a.calories - target).abs();
        let db = (b.calories - target).abs();
        da.partial_cmp(&db)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.calories.partial_cmp(&b.calories).unwrap_or(Ordering::Equal))
    });
}

/// Pick one item for a slot and size its serving.
///
/// Candidates not in `used` are preferred; if that empties the pool the
/// preference is dropped. One of the closest `shortlist_size` candidates is
/// sampled uniformly. Returns the `"None"` sentinel when no tier keeps
/// anything.
pub fn select_component<R: Rng + ?Sized>(
    pool: &[&FoodItem],
    used: &HashSet<String>,
    request: &SelectionRequest,
    config: &PlannerConfig,
    rng: &mut R,
) -> MealComponent {
    let Some((tier, candidates)) = narrow_pool(pool, request, config) else {
        debug!(role = ?request.role, target = request.target, "no candidate tier matched");
        return MealComponent::none();
    };

    let unused: Vec<&FoodItem> = candidates
        .iter()
        .copied()
        .filter(|item| !used.contains(&item.title))
        .collect();
    let mut shortlist = if unused.is_empty() { candidates } else { unused };

    rank_candidates(&mut shortlist, request.target);
    shortlist.truncate(config.shortlist_size.max(1));

    let Some(item) = shortlist.choose(rng) else {
        return MealComponent::none();
    };

    let servings = assign_servings(item.calories, request.target, request.role);
    debug!(
        role = ?request.role,
        tier,
        target = request.target,
        title = %item.title,
        servings,
        "selected component"
    );
    MealComponent::from_item(item, servings)
}

/// Serving multiplier for an item of `item_calories` against `target`.
pub fn assign_servings(item_calories: f64, target: f64, role: Role) -> f64 {
    if item_calories <= 0.0 || target <= 0.0 {
        return 1.0;
    }
    let ideal = target / item_calories;
    match role {
        Role::Main => nearest_ladder_step(ideal),
        Role::Side => {
            if (ideal - SIDE_HALF_SERVING).abs() <= (ideal - SIDE_FULL_SERVING).abs() {
                SIDE_HALF_SERVING
            } else {
                SIDE_FULL_SERVING
            }
        }
        Role::Drink => 1.0,
    }
}

/// Closest ladder value; the smaller step wins a tie.
fn nearest_ladder_step(ideal: f64) -> f64 {
    let mut best = MAIN_SERVING_LADDER[0];
    for step in MAIN_SERVING_LADDER {
        if (step - ideal).abs() < (best - ideal).abs() {
            best = step;
        }
    }
    let lo = MAIN_SERVING_LADDER[0];
    let hi = MAIN_SERVING_LADDER[MAIN_SERVING_LADDER.len() - 1];
    best.clamp(lo, hi)
}
