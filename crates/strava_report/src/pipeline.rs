//! Sequential fetch-classify-render loop and aggregate persistence.

use crate::error::{ReportError, ReportResult};
use crate::render::{render_run_markdown, render_workout_summary};
use crate::report::{AggregateReport, OutputRecord, activity_date};
use crate::window::ReportWindow;
use std::path::{Path, PathBuf};
use strava_client::StravaApi;

/// Single page only; a window with more activities than this silently loses
/// the older ones.
pub const PER_PAGE: u32 = 200;

const SEPARATOR: &str = "----------------------------------------";

#[derive(Debug, PartialEq)]
pub struct RunOutcome {
    pub total_records: usize,
    pub report_path: Option<PathBuf>,
}

/// Process one date window: list activities, enrich runs with detail,
/// print the console report incrementally and write the aggregate file.
///
/// One HTTP call is outstanding at a time. A failed detail fetch aborts the
/// remaining window; a failed aggregate write is logged and the run still
/// succeeds with `report_path: None`.
pub async fn run_report(
    api: &dyn StravaApi,
    access_token: &str,
    window: &ReportWindow,
    output_dir: &Path,
) -> ReportResult<RunOutcome> {
    println!(
        "Fetching activities from {} to {}...",
        window.start.format("%Y-%m-%d %H:%M:%S"),
        window.end.format("%Y-%m-%d %H:%M:%S")
    );

    let activities = api
        .list_activities(
            access_token,
            window.after_epoch(),
            window.before_epoch(),
            PER_PAGE,
        )
        .await?;

    if activities.is_empty() {
        println!("\nNo activities found for the specified period.");
        return Ok(RunOutcome {
            total_records: 0,
            report_path: None,
        });
    }

    println!(
        "\nFound {} total activities. Processing...",
        activities.len()
    );
    println!("{SEPARATOR}");

    let mut records: Vec<OutputRecord> = Vec::new();
    for activity in &activities {
        let date = activity_date(&activity.start_date);
        match activity.activity_type.as_str() {
            "Run" => {
                println!("\n--- Processing Run: '{}' on {} ---", activity.name, date);
                let detail = api.get_activity(access_token, activity.id).await?;
                println!("{}", render_run_markdown(&detail));
                records.push(OutputRecord::from_run(&detail));
                println!("{SEPARATOR}");
            }
            "Workout" => {
                println!(
                    "\n--- Processing Workout: '{}' on {} ---",
                    activity.name, date
                );
                println!("{}", render_workout_summary(activity));
                records.push(OutputRecord::from_workout(activity));
                println!("{SEPARATOR}");
            }
            other => {
                println!(
                    "\n--- Skipping '{}' (Type: {}) on {} ---",
                    activity.name, other, date
                );
                println!("{SEPARATOR}");
            }
        }
    }

    if records.is_empty() {
        println!("\nNo runs or workouts found to save.");
        return Ok(RunOutcome {
            total_records: 0,
            report_path: None,
        });
    }

    let report = AggregateReport {
        period: window.period(),
        generated_at: chrono::Local::now()
            .naive_local()
            .format("%Y-%m-%dT%H:%M:%S%.6f")
            .to_string(),
        total_activities: records.len(),
        activities: records,
    };
    let total_records = report.total_activities;

    match write_aggregate(&report, window, output_dir) {
        Ok(path) => {
            println!(
                "\n  -> Successfully saved all activities to '{}'",
                path.display()
            );
            Ok(RunOutcome {
                total_records,
                report_path: Some(path),
            })
        }
        Err(e) => {
            tracing::warn!("failed to write aggregate report: {e}");
            println!("\n  -> Error saving to JSON: {e}");
            Ok(RunOutcome {
                total_records,
                report_path: None,
            })
        }
    }
}

/// Write the aggregate as UTF-8 JSON with two-space indent, non-ASCII
/// preserved literally, creating the output directory if absent.
fn write_aggregate(
    report: &AggregateReport,
    window: &ReportWindow,
    output_dir: &Path,
) -> ReportResult<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .map_err(|e| ReportError::Persistence(format!("{}: {}", output_dir.display(), e)))?;
    let path = output_dir.join(window.file_name());
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(&path, json)
        .map_err(|e| ReportError::Persistence(format!("{}: {}", path.display(), e)))?;
    Ok(path)
}
