use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::error::{PlanError, Result};
use crate::models::food::sanitize_calories;
use crate::models::{Category, DietaryTag, FoodItem, WeeklyPlan};

/// Locations of the four category files.
#[derive(Debug, Clone)]
pub struct CatalogPaths {
    pub breakfast: PathBuf,
    pub lunch_dinner: PathBuf,
    pub side_dish: PathBuf,
    pub drink: PathBuf,
}

impl Default for CatalogPaths {
    fn default() -> Self {
        Self {
            breakfast: PathBuf::from("bf_revised.csv"),
            lunch_dinner: PathBuf::from("lunch_revised.csv"),
            side_dish: PathBuf::from("sidedish_recipes.csv"),
            drink: PathBuf::from("drinks_recipes.csv"),
        }
    }
}

impl CatalogPaths {
    fn entries(&self) -> [(Category, &Path); 4] {
        [
            (Category::Breakfast, self.breakfast.as_path()),
            (Category::LunchDinner, self.lunch_dinner.as_path()),
            (Category::SideDish, self.side_dish.as_path()),
            (Category::Drink, self.drink.as_path()),
        ]
    }
}

/// Load the four category files into one catalog.
pub fn load_catalog(paths: &CatalogPaths) -> Result<Catalog> {
    let mut items = Vec::new();
    for (category, path) in paths.entries() {
        let loaded = load_category_csv(path, category)?;
        debug!(%category, path = %path.display(), count = loaded.len(), "loaded category file");
        items.extend(loaded);
    }
    Ok(Catalog::new(items))
}

/// Load one category file.
pub fn load_category_csv<P: AsRef<Path>>(path: P, category: Category) -> Result<Vec<FoodItem>> {
    let file = fs::File::open(path)?;
    read_category_csv(file, category)
}

/// Parse category rows from any reader.
///
/// `title` is required. Missing or unparsable calories read as zero, missing
/// tag columns as false. Duplicate titles: last occurrence wins, first
/// position is kept.
pub fn read_category_csv<R: Read>(reader: R, category: Category) -> Result<Vec<FoodItem>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
    };

    let title_idx = column("title").ok_or_else(|| {
        PlanError::InvalidInput(format!("{} file has no 'title' column", category))
    })?;
    let calories_idx = column("calories");
    let tag_columns: Vec<(DietaryTag, usize)> = DietaryTag::ALL
        .into_iter()
        .filter_map(|tag| column(tag.column_name()).map(|idx| (tag, idx)))
        .collect();

    let mut items: Vec<FoodItem> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for (row, record) in rdr.records().enumerate() {
        let record = record?;

        let title = record.get(title_idx).unwrap_or("").to_string();
        if title.is_empty() {
            warn!(%category, row = row + 1, "skipping catalog row without a title");
            continue;
        }

        let calories = calories_idx
            .and_then(|idx| record.get(idx))
            .map(parse_calories)
            .unwrap_or(0.0);

        let mut item = FoodItem::new(title, calories, category);
        for (tag, idx) in &tag_columns {
            let value = record.get(*idx).map(parse_flag).unwrap_or(false);
            item.tags.insert(*tag, value);
        }

        match positions.get(&item.title) {
            Some(&pos) => items[pos] = item,
            None => {
                positions.insert(item.title.clone(), items.len());
                items.push(item);
            }
        }
    }

    Ok(items)
}

fn parse_calories(raw: &str) -> f64 {
    raw.parse::<f64>().map(sanitize_calories).unwrap_or(0.0)
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.to_ascii_lowercase().as_str(),
        "true" | "1" | "1.0" | "yes" | "y" | "t"
    )
}

/// Save a weekly plan as pretty JSON.
pub fn save_weekly_plan<P: AsRef<Path>>(path: P, plan: &WeeklyPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json)?;
    Ok(())
}
