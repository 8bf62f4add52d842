use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::food::FoodItem;

/// Title of the "nothing could be selected" sentinel.
pub const NONE_TITLE: &str = "None";

/// One selected item with its serving multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealComponent {
    pub title: String,

    /// Calories per serving.
    pub calories: f64,

    pub servings: f64,

    /// `calories * servings`.
    pub total_calories: f64,
}

impl MealComponent {
    pub fn new(title: impl Into<String>, calories: f64, servings: f64) -> Self {
        Self {
            title: title.into(),
            calories,
            servings,
            total_calories: calories * servings,
        }
    }

    pub fn from_item(item: &FoodItem, servings: f64) -> Self {
        Self::new(item.title.clone(), item.calories, servings)
    }

    /// Sentinel for a slot where selection failed.
    pub fn none() -> Self {
        Self::new(NONE_TITLE, 0.0, 1.0)
    }

    /// The fixed starch component served with every meal.
    pub fn starch(title: &str, calories_per_serving: f64, servings: f64) -> Self {
        Self::new(title, calories_per_serving, servings)
    }

    pub fn is_none(&self) -> bool {
        self.title == NONE_TITLE
    }
}

/// The three meals of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    pub fn name(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Main dish, starch, side dish and drink for one meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub main: MealComponent,
    pub starch: MealComponent,
    pub side_dish: MealComponent,
    pub drink: MealComponent,
}

impl Meal {
    pub fn components(&self) -> [&MealComponent; 4] {
        [&self.main, &self.starch, &self.side_dish, &self.drink]
    }

    pub fn total_calories(&self) -> f64 {
        self.components().iter().map(|c| c.total_calories).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPlan {
    pub breakfast: Meal,
    pub lunch: Meal,
    pub dinner: Meal,
}

impl DailyPlan {
    pub fn meal(&self, slot: MealSlot) -> &Meal {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }

    /// All twelve components, meal by meal.
    pub fn components(&self) -> Vec<&MealComponent> {
        MealSlot::ALL
            .iter()
            .flat_map(|slot| self.meal(*slot).components())
            .collect()
    }

    pub fn total_calories(&self) -> f64 {
        MealSlot::ALL
            .iter()
            .map(|slot| self.meal(*slot).total_calories())
            .sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Seven daily plans keyed by weekday, iterated Monday first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklyPlan {
    days: BTreeMap<Weekday, DailyPlan>,
}

impl WeeklyPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, day: Weekday, plan: DailyPlan) {
        self.days.insert(day, plan);
    }

    pub fn day(&self, day: Weekday) -> Option<&DailyPlan> {
        self.days.get(&day)
    }

    pub fn days(&self) -> impl Iterator<Item = (Weekday, &DailyPlan)> {
        self.days.iter().map(|(d, p)| (*d, p))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
