use serde::{Deserialize, Serialize};

use crate::models::food::{DietaryTag, FoodItem};

/// Per-request dietary constraints.
///
/// A flag set to true admits only items tagged true for that attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DietaryPreferences {
    pub vegetarian: bool,
    pub low_purine: bool,
    pub low_fat: bool,
    pub low_sodium: bool,
    pub lactose_free: bool,
    pub peanut_allergy: bool,
    pub shellfish_allergy: bool,
    pub fish_allergy: bool,
    pub halal_or_kosher: bool,
}

impl DietaryPreferences {
    pub fn is_active(&self, tag: DietaryTag) -> bool {
        match tag {
            DietaryTag::Vegetarian => self.vegetarian,
            DietaryTag::LowPurine => self.low_purine,
            DietaryTag::LowFat => self.low_fat,
            DietaryTag::LowSodium => self.low_sodium,
            DietaryTag::LactoseFree => self.lactose_free,
            DietaryTag::PeanutAllergy => self.peanut_allergy,
            DietaryTag::ShellfishAllergy => self.shellfish_allergy,
            DietaryTag::FishAllergy => self.fish_allergy,
            DietaryTag::HalalOrKosher => self.halal_or_kosher,
        }
    }

    pub fn set(&mut self, tag: DietaryTag, value: bool) {
        let flag = match tag {
            DietaryTag::Vegetarian => &mut self.vegetarian,
            DietaryTag::LowPurine => &mut self.low_purine,
            DietaryTag::LowFat => &mut self.low_fat,
            DietaryTag::LowSodium => &mut self.low_sodium,
            DietaryTag::LactoseFree => &mut self.lactose_free,
            DietaryTag::PeanutAllergy => &mut self.peanut_allergy,
            DietaryTag::ShellfishAllergy => &mut self.shellfish_allergy,
            DietaryTag::FishAllergy => &mut self.fish_allergy,
            DietaryTag::HalalOrKosher => &mut self.halal_or_kosher,
        };
        *flag = value;
    }

    /// Tags the user switched on, in column order.
    pub fn active_tags(&self) -> Vec<DietaryTag> {
        DietaryTag::ALL
            .into_iter()
            .filter(|t| self.is_active(*t))
            .collect()
    }

    /// True when the item carries every active tag.
    pub fn is_satisfied_by(&self, item: &FoodItem) -> bool {
        DietaryTag::ALL
            .into_iter()
            .all(|t| !self.is_active(t) || item.has_tag(t))
    }
}
