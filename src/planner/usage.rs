use std::collections::HashSet;

use crate::models::{MealComponent, NONE_TITLE};
use crate::planner::constants::WATER_TITLE;

/// Titles chosen so far in one request, per selection pool.
///
/// Owned by the caller of a plan request and threaded into each day's
/// assembly; never shared between requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageTracker {
    pub breakfast_mains: HashSet<String>,
    pub lunch_dinner_mains: HashSet<String>,
    pub side_dishes: HashSet<String>,
    pub drinks: HashSet<String>,
}

impl UsageTracker {
    pub fn new() -> Self {
        Self::default()
    }
}

/// True for titles that must never enter a usage set.
pub fn is_sentinel_title(title: &str, starch_title: &str) -> bool {
    title == NONE_TITLE || title == WATER_TITLE || title == starch_title
}

/// Add the component's title to `set` unless it is a sentinel.
pub fn record(set: &mut HashSet<String>, component: &MealComponent, starch_title: &str) {
    if !is_sentinel_title(&component.title, starch_title) {
        set.insert(component.title.clone());
    }
}
