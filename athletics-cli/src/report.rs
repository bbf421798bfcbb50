//! Report generation
//!
//! Text rendering of the performance summary, the per-event progression
//! chart and the event catalog. JSON output reuses the library's serde types.

use crate::config::DisplayConfig;
use athletics_scoring::{Catalog, EventDefinition, EventKind, PerformanceSummary, Scoring};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt::Write;

/// Format seconds as `m:ss.ss`
pub fn format_time(seconds: f64) -> String {
    // Round once to hundredths so 59.999 carries into the minutes
    let hundredths = (seconds * 100.0).round() as u64;
    let minutes = hundredths / 6000;
    let remaining = (hundredths % 6000) as f64 / 100.0;
    format!("{}:{:05.2}", minutes, remaining)
}

/// Display form of a value for the given event
pub fn format_value(event: &str, kind: EventKind, value: f64, display: &DisplayConfig) -> String {
    if kind == EventKind::Timed && display.is_split_time(event) {
        format_time(value)
    } else {
        format!("{:.*}", display.decimals, value)
    }
}

/// Render the summary as plain text
pub fn render_summary(summary: &PerformanceSummary, display: &DisplayConfig) -> String {
    let mut out = String::new();

    if summary.is_empty() {
        out.push_str("No results recorded yet.\n");
    }

    for entry in &summary.entries {
        let best = format_value(entry.event, entry.kind, entry.best, display);
        if entry.scored {
            let _ = writeln!(out, "{} - Best: {}, Points: {}", entry.event, best, entry.points);
        } else {
            let _ = writeln!(out, "{} - Best: {}, Points: custom (unscored)", entry.event, best);
        }
    }

    let _ = write!(out, "\nTotal Points: {}", summary.total_points);
    out
}

/// Summary plus generation time, for `--json` output
#[derive(Debug, Serialize)]
pub struct SummaryReport<'a> {
    pub generated_at: String,
    #[serde(flatten)]
    pub summary: &'a PerformanceSummary,
}

impl<'a> SummaryReport<'a> {
    pub fn new(summary: &'a PerformanceSummary, generated_at: DateTime<Local>) -> Self {
        Self {
            generated_at: generated_at.to_rfc3339(),
            summary,
        }
    }
}

/// Render recorded values in entry order with a bar per attempt
pub fn render_progress(definition: &EventDefinition, values: &[f64], display: &DisplayConfig) -> String {
    let mut out = String::new();
    let axis = match definition.kind {
        EventKind::Timed => "Time (s)",
        EventKind::Measured => "Mark (m)",
    };

    let _ = writeln!(out, "{} Performance Progression", definition.name);
    let _ = writeln!(out, "Attempt  {}", axis);

    let max = values.iter().copied().fold(0.0_f64, f64::max);
    let best = values
        .iter()
        .copied()
        .reduce(|best, value| definition.kind.better(best, value));

    for (attempt, &value) in values.iter().enumerate() {
        let bar_len = if max > 0.0 {
            ((value / max) * display.chart_width as f64).round() as usize
        } else {
            0
        };
        let marker = if Some(value) == best { " *" } else { "" };
        let _ = writeln!(
            out,
            "{:>7}  {:>10}  {}{}",
            attempt + 1,
            format_value(definition.name, definition.kind, value, display),
            "#".repeat(bar_len),
            marker
        );
    }

    out
}

/// Render the event catalog as a table
pub fn render_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<12} {:<9} {:<8} {:>10} {:>8} {:>6}  {}",
        "Event", "Kind", "Unit", "A", "B", "C", "Scale"
    );

    for definition in catalog.events() {
        match definition.scoring {
            Scoring::Table(coefficients) => {
                let _ = writeln!(
                    out,
                    "{:<12} {:<9} {:<8} {:>10} {:>8} {:>6}  {}",
                    definition.name,
                    definition.kind,
                    definition.kind.unit(),
                    coefficients.a,
                    coefficients.b,
                    coefficients.c,
                    if definition.unit_scale { "m->cm" } else { "-" }
                );
            }
            Scoring::Custom => {
                let _ = writeln!(
                    out,
                    "{:<12} {:<9} {:<8} {:>10} {:>8} {:>6}  {}",
                    definition.name, definition.kind, "points", "custom", "-", "-", "-"
                );
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use athletics_scoring::ResultStore;
    use chrono::TimeZone;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(225.5), "3:45.50");
        assert_eq!(format_time(125.04), "2:05.04");
        assert_eq!(format_time(59.99), "0:59.99");
        assert_eq!(format_time(1800.0), "30:00.00");
    }

    #[test]
    fn test_format_time_carries_rounded_minute() {
        assert_eq!(format_time(59.999), "1:00.00");
        assert_eq!(format_time(119.996), "2:00.00");
        assert_eq!(format_time(119.994), "1:59.99");
    }

    #[test]
    fn test_format_value() {
        let display = DisplayConfig::default();
        assert_eq!(format_value("1500m", EventKind::Timed, 225.5, &display), "3:45.50");
        assert_eq!(format_value("100m", EventKind::Timed, 11.8, &display), "11.80");
        assert_eq!(format_value("LongJump", EventKind::Measured, 7.5, &display), "7.50");
    }

    #[test]
    fn test_render_summary() {
        let mut store = ResultStore::new();
        store.add_result("100m", 10.0).unwrap();
        store.add_result("1500m", 225.5).unwrap();
        store.add_result("Decathlon", 8000.0).unwrap();

        let summary = PerformanceSummary::from_store(&store);
        let text = render_summary(&summary, &DisplayConfig::default());

        assert!(text.starts_with("100m - Best: 10.00, Points: 1096\n"));
        assert!(text.contains("1500m - Best: 3:45.50, Points: "));
        assert!(text.contains("Decathlon - Best: 8000.00, Points: custom (unscored)\n"));
        assert!(text.ends_with(&format!("\nTotal Points: {}", summary.total_points)));
    }

    #[test]
    fn test_render_empty_summary() {
        let summary = PerformanceSummary::from_store(&ResultStore::new());
        let text = render_summary(&summary, &DisplayConfig::default());
        assert_eq!(text, "No results recorded yet.\n\nTotal Points: 0");
    }

    #[test]
    fn test_summary_report_json() {
        let mut store = ResultStore::new();
        store.add_result("100m", 10.0).unwrap();
        let summary = PerformanceSummary::from_store(&store);
        let generated = Local.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

        let json = serde_json::to_value(SummaryReport::new(&summary, generated)).unwrap();
        assert_eq!(json["total_points"], 1096);
        assert_eq!(json["entries"][0]["event"], "100m");
        assert_eq!(json["entries"][0]["kind"], "Timed");
        assert!(json["generated_at"].as_str().unwrap().starts_with("2024-06-01T12:00:00"));
    }

    #[test]
    fn test_render_progress() {
        let definition = Catalog::standard().lookup("LongJump").unwrap();
        let display = DisplayConfig {
            chart_width: 10,
            ..DisplayConfig::default()
        };
        let text = render_progress(definition, &[5.0, 2.5], &display);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "LongJump Performance Progression");
        assert_eq!(lines[1], "Attempt  Mark (m)");
        assert_eq!(lines[2], "      1        5.00  ########## *");
        assert_eq!(lines[3], "      2        2.50  #####");
    }

    #[test]
    fn test_render_catalog() {
        let text = render_catalog(&Catalog::standard());
        assert_eq!(text.lines().count(), Catalog::standard().len() + 1);
        assert!(text.contains("LongJump"));
        assert!(text.contains("m->cm"));
        assert!(text.contains("custom"));
    }
}
