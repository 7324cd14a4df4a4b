//! Console Markdown rendering for runs and workouts.

use crate::format::{format_duration, format_pace};
use strava_client::{ActivitySummary, DetailedActivity};

/// Fixed-structure Markdown block for one run: a Summary section followed,
/// only when split data exists, by a Splits Breakdown table.
pub fn render_run_markdown(detail: &DetailedActivity) -> String {
    let mut lines = vec!["### Activity Summary".to_string()];
    let distance_km = detail.distance / 1000.0;
    lines.push(format!("- **Distance**: {distance_km:.2} km"));
    lines.push(format!(
        "- **Moving Time**: {}",
        format_duration(detail.moving_time)
    ));
    lines.push(format!(
        "- **Average Pace**: {} /km",
        format_pace(detail.average_speed)
    ));
    lines.push(format!(
        "- **Calories**: {}",
        detail.calories.unwrap_or(0.0) as i64
    ));

    if let Some(splits) = detail.splits_metric.as_deref() {
        if !splits.is_empty() {
            lines.push("\n### Splits Breakdown".to_string());
            lines.push(
                "| Split | Pace (/km) | Distance (km) | Time    | Avg HR | Elev Diff (m) |"
                    .to_string(),
            );
            lines.push(
                "|-------|------------|---------------|---------|--------|---------------|"
                    .to_string(),
            );
            for split in splits {
                let pace = format_pace(split.average_speed);
                let dist_km = format!("{:.2}", split.distance / 1000.0);
                let time = format_duration(split.moving_time);
                let hr = split
                    .average_heartrate
                    .filter(|hr| *hr > 0.0)
                    .map(|hr| (hr as i64).to_string())
                    .unwrap_or_else(|| "N/A".to_string());
                let elev = format!("{:.1}", split.elevation_difference.unwrap_or(0.0));
                lines.push(format!(
                    "| {:<5} | {:<10} | {:<13} | {:<7} | {:<6} | {:<13} |",
                    split.split, pace, dist_km, time, hr, elev
                ));
            }
        }
    }

    lines.join("\n")
}

/// Two-line console summary for a workout activity.
pub fn render_workout_summary(summary: &ActivitySummary) -> String {
    format!(
        "  - Type: Workout\n  - Total Time: {}",
        format_duration(summary.elapsed_time)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use strava_client::Split;

    fn run_with_splits() -> DetailedActivity {
        DetailedActivity {
            id: 11,
            name: "Morning Run".into(),
            start_date: "2024-07-01T06:30:00Z".into(),
            distance: 5000.0,
            moving_time: 1500,
            elapsed_time: 1550,
            average_speed: Some(3.333),
            calories: Some(312.7),
            splits_metric: Some(vec![
                Split {
                    split: 1,
                    distance: 1000.0,
                    moving_time: 300,
                    average_speed: Some(3.333),
                    average_heartrate: Some(150.4),
                    elevation_difference: Some(2.3),
                },
                Split {
                    split: 2,
                    distance: 1000.0,
                    moving_time: 310,
                    average_speed: Some(3.2),
                    average_heartrate: None,
                    elevation_difference: Some(-1.2),
                },
            ]),
        }
    }

    #[test]
    fn run_block_has_summary_then_splits_table() {
        let text = render_run_markdown(&run_with_splits());
        let summary_at = text.find("### Activity Summary").expect("summary header");
        let splits_at = text.find("### Splits Breakdown").expect("splits header");
        assert!(summary_at < splits_at);
        assert!(text.contains("- **Distance**: 5.00 km"));
        assert!(text.contains("- **Moving Time**: 0:25:00"));
        assert!(text.contains("- **Average Pace**: 05:00 /km"));
        assert!(text.contains("- **Calories**: 312"));
        assert!(
            text.contains("| Split | Pace (/km) | Distance (km) | Time    | Avg HR | Elev Diff (m) |")
        );
    }

    #[test]
    fn missing_heart_rate_renders_na() {
        let text = render_run_markdown(&run_with_splits());
        let second_row = text
            .lines()
            .find(|l| l.starts_with("| 2"))
            .expect("second split row");
        assert!(second_row.contains("N/A"));
        assert!(second_row.contains("-1.2"));
    }

    #[test]
    fn run_without_splits_omits_breakdown_section() {
        let mut detail = run_with_splits();
        detail.splits_metric = Some(vec![]);
        let text = render_run_markdown(&detail);
        assert!(!text.contains("Splits Breakdown"));
        detail.splits_metric = None;
        assert!(!render_run_markdown(&detail).contains("Splits Breakdown"));
    }

    #[test]
    fn workout_summary_lines() {
        let summary = ActivitySummary {
            id: 12,
            name: "Core".into(),
            activity_type: "Workout".into(),
            start_date: "2024-07-02T18:00:00Z".into(),
            elapsed_time: 1200,
        };
        assert_eq!(
            render_workout_summary(&summary),
            "  - Type: Workout\n  - Total Time: 0:20:00"
        );
    }
}
