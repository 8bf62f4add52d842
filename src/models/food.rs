use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Dietary attribute a catalog item can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryTag {
    Vegetarian,
    LowPurine,
    LowFat,
    LowSodium,
    LactoseFree,
    PeanutAllergy,
    ShellfishAllergy,
    FishAllergy,
    HalalOrKosher,
}

impl DietaryTag {
    /// All tags in catalog column order.
    pub const ALL: [DietaryTag; 9] = [
        DietaryTag::Vegetarian,
        DietaryTag::LowPurine,
        DietaryTag::LowFat,
        DietaryTag::LowSodium,
        DietaryTag::LactoseFree,
        DietaryTag::PeanutAllergy,
        DietaryTag::ShellfishAllergy,
        DietaryTag::FishAllergy,
        DietaryTag::HalalOrKosher,
    ];

    /// Header of the CSV column carrying this tag.
    pub fn column_name(self) -> &'static str {
        match self {
            DietaryTag::Vegetarian => "Vegetarian",
            DietaryTag::LowPurine => "Low-Purine",
            DietaryTag::LowFat => "Low-fat/Heart-Healthy",
            DietaryTag::LowSodium => "Low-Sodium",
            DietaryTag::LactoseFree => "Lactose-free",
            DietaryTag::PeanutAllergy => "Peanut Allergy",
            DietaryTag::ShellfishAllergy => "Shellfish Allergy",
            DietaryTag::FishAllergy => "Fish Allergy",
            DietaryTag::HalalOrKosher => "Halal or Kosher",
        }
    }

    /// Allergy and halal/kosher tags. The remaining five are nominal preferences.
    pub fn is_strict(self) -> bool {
        matches!(
            self,
            DietaryTag::PeanutAllergy
                | DietaryTag::ShellfishAllergy
                | DietaryTag::FishAllergy
                | DietaryTag::HalalOrKosher
        )
    }
}

impl fmt::Display for DietaryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// Catalog partition an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Breakfast,
    LunchDinner,
    SideDish,
    Drink,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Breakfast,
        Category::LunchDinner,
        Category::SideDish,
        Category::Drink,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Breakfast => "breakfast",
            Category::LunchDinner => "lunch/dinner",
            Category::SideDish => "side dish",
            Category::Drink => "drink",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A catalog entry. Immutable once loaded.
///
/// Titles are unique within a category, not across the whole catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub title: String,
    pub calories: f64,
    pub category: Category,
    #[serde(default)]
    pub tags: BTreeMap<DietaryTag, bool>,
}

impl FoodItem {
    pub fn new(title: impl Into<String>, calories: f64, category: Category) -> Self {
        Self {
            title: title.into(),
            calories: sanitize_calories(calories),
            category,
            tags: BTreeMap::new(),
        }
    }

    /// Builder-style tag setter.
    pub fn with_tag(mut self, tag: DietaryTag, value: bool) -> Self {
        self.tags.insert(tag, value);
        self
    }

    /// Absent tags read as false.
    #[inline]
    pub fn has_tag(&self, tag: DietaryTag) -> bool {
        self.tags.get(&tag).copied().unwrap_or(false)
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        let tags: Vec<&str> = DietaryTag::ALL
            .iter()
            .filter(|t| self.has_tag(**t))
            .map(|t| t.column_name())
            .collect();
        format!(
            "{} [{}]: {} cal, tags: {}",
            self.title,
            self.category,
            self.calories,
            tags.join(", ")
        )
    }
}

/// Negative and non-finite calorie values read as zero.
pub fn sanitize_calories(calories: f64) -> f64 {
    if calories.is_finite() && calories > 0.0 {
        calories
    } else {
        0.0
    }
}
