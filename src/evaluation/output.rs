use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::evaluation::trials::EvaluationReport;

/// Round a float to n decimal places.
fn truncate(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Write one row per completed trial.
pub fn write_trials_csv(report: &EvaluationReport, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "trial",
        "days",
        "calorie_matched_days",
        "preference_matched_days",
        "avg_daily_calories",
        "success",
    ])?;

    for trial in &report.trials {
        wtr.write_record([
            (trial.trial + 1).to_string(),
            trial.days.to_string(),
            trial.calorie_matched_days.to_string(),
            trial.preference_matched_days.to_string(),
            format!("{:.1}", trial.avg_daily_calories),
            trial.success.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the report as JSON with rates rounded to three places.
pub fn write_report_json(report: &EvaluationReport, path: &Path) -> Result<()> {
    let json = serde_json::json!({
        "target_calories": report.target_calories,
        "tolerance": report.tolerance,
        "metrics": {
            "success_rate": truncate(report.metrics.success_rate, 3),
            "calorie_match_rate": truncate(report.metrics.calorie_match_rate, 3),
            "preference_match_rate": truncate(report.metrics.preference_match_rate, 3),
        },
        "counts": {
            "trials_requested": report.trials_requested,
            "trials_completed": report.trials_completed,
            "days_evaluated": report.days_evaluated,
            "calorie_matched_days": report.calorie_matched_days,
            "preference_matched_days": report.preference_matched_days,
            "successful_weeks": report.successful_weeks,
        },
        "trials": report.trials.iter().map(|t| {
            serde_json::json!({
                "trial": t.trial + 1,
                "calorie_matched_days": t.calorie_matched_days,
                "preference_matched_days": t.preference_matched_days,
                "avg_daily_calories": truncate(t.avg_daily_calories, 1),
                "success": t.success,
            })
        }).collect::<Vec<_>>(),
    });

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
    Ok(())
}

fn count_of(num: usize, den: usize) -> String {
    if den > 0 {
        format!("{}/{}", num, den)
    } else {
        format!("{}/N/A", num)
    }
}

/// Print the report to stdout.
pub fn print_report(report: &EvaluationReport) {
    let target = report.target_calories as f64;

    println!("\n=== Evaluation Metrics ===\n");
    println!("Weekly plans attempted:     {}", report.trials_requested);
    println!("Weekly plans generated:     {}", report.trials_completed);
    println!(
        "Acceptable daily range:     {:.0} - {:.0} kcal",
        target - report.tolerance,
        target + report.tolerance
    );
    println!(
        "Days with correct calories: {}",
        count_of(report.calorie_matched_days, report.days_evaluated)
    );
    println!(
        "Days meeting preferences:   {}",
        count_of(report.preference_matched_days, report.days_evaluated)
    );
    println!(
        "Successful weekly plans:    {}",
        count_of(report.successful_weeks, report.trials_completed)
    );
    println!("─────────────────────────────────────────");
    println!("Weekly success rate:        {:.3}", report.metrics.success_rate);
    println!("Day calorie match rate:     {:.3}", report.metrics.calorie_match_rate);
    println!("Day preference match rate:  {:.3}", report.metrics.preference_match_rate);
    println!();
}
