use std::collections::BTreeMap;

use crate::models::{Category, FoodItem};

/// Immutable in-memory table of candidate items.
///
/// Items keep their load order so that seeded runs are reproducible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<FoodItem>,
}

impl Catalog {
    pub fn new(items: Vec<FoodItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// Items of one category, in load order.
    pub fn by_category(&self, category: Category) -> Vec<&FoodItem> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    /// First item with this exact title, in any category.
    pub fn find(&self, title: &str) -> Option<&FoodItem> {
        self.items.iter().find(|item| item.title == title)
    }

    pub fn contains_title(&self, category: Category, title: &str) -> bool {
        self.items
            .iter()
            .any(|item| item.category == category && item.title == title)
    }

    /// Item count per category (all four categories present).
    pub fn category_counts(&self) -> BTreeMap<Category, usize> {
        let mut counts: BTreeMap<Category, usize> =
            Category::ALL.iter().map(|c| (*c, 0)).collect();
        for item in &self.items {
            *counts.entry(item.category).or_insert(0) += 1;
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<FoodItem> for Catalog {
    fn from_iter<I: IntoIterator<Item = FoodItem>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
