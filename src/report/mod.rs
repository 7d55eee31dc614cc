//! Reporting utilities: terminal summary of a sweep run.

use crate::domain::{ModelKind, SweepConfig, SweepStats};

/// Render the run summary printed after a sweep finishes.
pub fn format_sweep_summary(config: &SweepConfig, stats: &SweepStats) -> String {
    let mut out = String::new();

    out.push_str("=== noe - NOE buildup-curve sweep ===\n");
    out.push_str(&format!("Model: {}\n", config.model.display_name()));
    out.push_str(&format!("Grid: {} candidates\n", config.candidate_count()));
    for (name, range) in param_names(config.model).iter().zip(config.active_ranges()) {
        out.push_str(&format!(
            "  {name:<8} [{:?}, {:?}) step {:?} -> {} values\n",
            range.min(),
            range.max(),
            range.step(),
            range.len()
        ));
    }
    out.push_str(&format!("Log: {}\n", config.log_path.display()));

    out.push_str("\nCandidates:\n");
    out.push_str(&format!("  generated {}\n", stats.generated));
    out.push_str(&format!("  filtered  {}\n", stats.filtered));
    out.push_str(&format!("  fitted    {}\n", stats.fitted));
    out.push_str(&format!("  failed    {}\n", stats.failed));
    out.push_str(&format!("  logged    {}\n", stats.logged()));

    if !stats.failures.is_empty() {
        out.push_str("\nFailures:\n");
        for (reason, count) in &stats.failures {
            out.push_str(&format!("  {:<24} {count}\n", reason.label()));
        }
    }

    out
}

fn param_names(model: ModelKind) -> &'static [&'static str] {
    match model {
        ModelKind::Full => &["lambda_1", "lambda_2", "r_i", "r_s", "r", "sigma"],
        ModelKind::Reduced => &["lambda_1", "lambda_2", "r_i"],
    }
}
