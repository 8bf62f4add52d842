use crate::catalog::{calorie_bands, Catalog};
use crate::models::{Category, MealComponent, MealSlot, WeeklyPlan};

fn component_line(label: &str, component: &MealComponent, width: usize) -> String {
    format!(
        "    {:<7} {:<width$} {:>5.2} x {:>4.0} = {:>5.0} cal",
        label,
        component.title,
        component.servings,
        component.calories,
        component.total_calories,
        width = width
    )
}

/// Display a weekly plan day by day.
pub fn display_weekly_plan(plan: &WeeklyPlan, target_calories: i64) {
    if plan.is_empty() {
        println!("No meal plan generated.");
        return;
    }

    // Widest title for alignment
    let width = plan
        .days()
        .flat_map(|(_, day)| day.components())
        .map(|c| c.title.len())
        .max()
        .unwrap_or(10);

    println!();
    println!("=== Weekly Meal Plan (target {} cal/day) ===", target_calories);

    let mut week_total = 0.0;
    for (weekday, day) in plan.days() {
        println!();
        println!("{}", weekday);
        for slot in MealSlot::ALL {
            let meal = day.meal(slot);
            println!("  {} ({:.0} cal)", slot, meal.total_calories());
            println!("{}", component_line("Main", &meal.main, width));
            println!("{}", component_line("Starch", &meal.starch, width));
            println!("{}", component_line("Side", &meal.side_dish, width));
            println!("{}", component_line("Drink", &meal.drink, width));
        }

        let total = day.total_calories();
        week_total += total;
        let diff = total - target_calories as f64;
        let sign = if diff >= 0.0 { "+" } else { "" };
        println!("  Day total: {:.0} cal ({}{:.0})", total, sign, diff);
    }

    println!();
    println!("--- Summary ---");
    println!("Days planned: {}", plan.len());
    println!(
        "Average daily calories: {:.0}",
        week_total / plan.len() as f64
    );
    println!();
}

/// Display per-category counts and calorie bands.
pub fn display_catalog_summary(catalog: &Catalog, band_width: u32) {
    println!();
    println!("=== Catalog ({} items) ===", catalog.len());

    let counts = catalog.category_counts();
    for category in Category::ALL {
        let count = counts.get(&category).copied().unwrap_or(0);
        println!();
        println!("{}: {} items", category, count);

        let items = catalog.by_category(category);
        for (band, n) in calorie_bands(items, band_width) {
            println!("  {:>9} cal  {}", band, n);
        }
    }
    println!();
}
