use std::collections::BTreeMap;

use crate::models::FoodItem;

/// Calorie-range label for one item, e.g. `"90-120"`.
///
/// Bands are `width` calories wide starting at zero; the lowest band includes
/// its lower bound, the others only their upper bound.
pub fn calorie_band(calories: f64, width: u32) -> String {
    let width = width.max(1);
    let w = width as f64;
    let upper_index = if calories <= w {
        1
    } else {
        (calories / w).ceil() as u64
    };
    let hi = upper_index * width as u64;
    let lo = hi - width as u64;
    format!("{}-{}", lo, hi)
}

/// Item count per calorie band, ordered by band start.
///
/// Diagnostic only; selection never consults it.
pub fn calorie_bands<'a, I>(items: I, width: u32) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a FoodItem>,
{
    let width = width.max(1);
    let mut counts: BTreeMap<u64, usize> = BTreeMap::new();
    for item in items {
        let start = band_start(item.calories, width);
        *counts.entry(start).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(start, count)| (format!("{}-{}", start, start + width as u64), count))
        .collect()
}

fn band_start(calories: f64, width: u32) -> u64 {
    let w = width as f64;
    if calories <= w {
        0
    } else {
        ((calories / w).ceil() as u64 - 1) * width as u64
    }
}
