use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{PlanError, Result};
use crate::models::DietaryPreferences;

/// Reduce the catalog to items compatible with the preferences.
///
/// Every active flag is a hard filter, including the five nominal
/// preferences. Fails with `CatalogInsufficient` when nothing survives.
pub fn filter_by_preferences(catalog: &Catalog, preferences: &DietaryPreferences) -> Result<Catalog> {
    let active = preferences.active_tags();

    let filtered: Catalog = catalog
        .items()
        .iter()
        .filter(|item| active.iter().all(|tag| item.has_tag(*tag)))
        .cloned()
        .collect();

    debug!(
        active = ?active,
        before = catalog.len(),
        after = filtered.len(),
        "applied dietary filter"
    );

    if filtered.is_empty() {
        let names: Vec<&str> = active.iter().map(|t| t.column_name()).collect();
        return Err(PlanError::CatalogInsufficient(format!(
            "no meals match the dietary requirements ({}); try relaxing your constraints",
            names.join(", ")
        )));
    }

    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, DietaryTag, FoodItem};

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            FoodItem::new("Tortang Talong", 250.0, Category::Breakfast)
                .with_tag(DietaryTag::Vegetarian, true)
                .with_tag(DietaryTag::ShellfishAllergy, true),
            FoodItem::new("Tapsilog", 550.0, Category::Breakfast)
                .with_tag(DietaryTag::ShellfishAllergy, true),
            FoodItem::new("Ginataang Hipon", 420.0, Category::LunchDinner),
            FoodItem::new("Water", 0.0, Category::Drink),
        ])
    }

    #[test]
    fn test_no_flags_keeps_everything() {
        let catalog = sample_catalog();
        let filtered = filter_by_preferences(&catalog, &DietaryPreferences::default()).unwrap();
        assert_eq!(filtered, catalog);
    }

    #[test]
    fn test_soft_and_strict_flags_both_filter() {
        let catalog = sample_catalog();

        let veg = DietaryPreferences {
            vegetarian: true,
            ..Default::default()
        };
        let filtered = filter_by_preferences(&catalog, &veg).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.items()[0].title, "Tortang Talong");

        let shellfish = DietaryPreferences {
            shellfish_allergy: true,
            ..Default::default()
        };
        let filtered = filter_by_preferences(&catalog, &shellfish).unwrap();
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_empty_result_is_catalog_insufficient() {
        let catalog = sample_catalog();
        let prefs = DietaryPreferences {
            peanut_allergy: true,
            ..Default::default()
        };
        let err = filter_by_preferences(&catalog, &prefs).unwrap_err();
        assert!(matches!(err, PlanError::CatalogInsufficient(_)));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let catalog = sample_catalog();
        let prefs = DietaryPreferences {
            shellfish_allergy: true,
            ..Default::default()
        };
        let once = filter_by_preferences(&catalog, &prefs).unwrap();
        let twice = filter_by_preferences(&once, &prefs).unwrap();
        assert_eq!(once, twice);
        assert_eq!(once, filter_by_preferences(&catalog, &prefs).unwrap());
    }
}
