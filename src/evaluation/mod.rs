pub mod output;
pub mod trials;

pub use output::{print_report, write_report_json, write_trials_csv};
pub use trials::{
    evaluate, verify_day_preferences, verify_preferences, EvaluationMetrics, EvaluationReport,
    TrialResult,
};
