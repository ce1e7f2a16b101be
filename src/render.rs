// src/render.rs
//! Terminal report for an analysis result

use std::fmt::Write;

use crate::types::AnalysisResult;

pub const GAUGE_WIDTH: usize = 20;

/// Percentage as the user sees it: whole numbers without a decimal point.
pub fn format_percentage(pct: f64) -> String {
    if pct == 0.0 {
        // Avoid "-0".
        return "0".to_string();
    }
    format!("{}", pct)
}

pub fn match_line(result: &AnalysisResult) -> String {
    format!("{}% Match", format_percentage(result.match_percentage))
}

/// Match/gap bar. Out-of-range values are clamped for drawing only.
pub fn render_gauge(pct: f64, width: usize) -> String {
    let clamped = if pct.is_finite() { pct.clamp(0.0, 100.0) } else { 0.0 };
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    format!(
        "Match {}{} Gap",
        "█".repeat(filled),
        "░".repeat(width - filled)
    )
}

pub fn render_chips(items: &[String]) -> String {
    if items.is_empty() {
        return "(none)".to_string();
    }
    items
        .iter()
        .map(|item| format!("[{}]", item))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_report(result: &AnalysisResult) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "Resume Match");
    let _ = writeln!(out, "{}", render_gauge(result.match_percentage, GAUGE_WIDTH));
    let _ = writeln!(out, "{}", match_line(result));
    let _ = writeln!(out);

    let _ = writeln!(out, "✔ Matching Skills");
    let _ = writeln!(out, "{}", render_chips(&result.matching_skills));
    let _ = writeln!(out);

    let _ = writeln!(out, "❌ Missing Skills");
    let _ = writeln!(out, "{}", render_chips(&result.missing_skills));
    let _ = writeln!(out);

    let _ = writeln!(out, "🚀 How to Bridge the Gap");
    if result.project_suggestions.is_empty() {
        let _ = writeln!(out, "(none)");
    }
    for suggestion in &result.project_suggestions {
        let _ = writeln!(out, "- {}", suggestion.trim());
    }

    out
}

pub fn render_json(result: &AnalysisResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}
