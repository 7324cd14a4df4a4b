//! Persisted record shapes and the builders that derive them from upstream
//! activity payloads.

use crate::format::{format_duration, format_pace, round1, round2};
use crate::window::normalize_date_str;
use serde::{Deserialize, Serialize};
use strava_client::{ActivitySummary, DetailedActivity, Split};

/// One classified activity, discriminated by `activity_type`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "activity_type")]
pub enum OutputRecord {
    Run {
        activity_id: i64,
        activity_name: String,
        date: String,
        summary: RunSummary,
        splits: Vec<SplitRecord>,
    },
    Workout {
        activity_id: i64,
        activity_name: String,
        date: String,
        summary: WorkoutSummary,
    },
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RunSummary {
    pub distance_km: f64,
    pub moving_time: String,
    pub elapsed_time: String,
    pub average_pace_per_km: String,
    pub calories: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SplitRecord {
    pub split_number: u32,
    pub pace_per_km: String,
    pub distance_km: f64,
    pub time: String,
    pub avg_heart_rate: Option<i64>,
    pub elevation_difference_m: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSummary {
    pub total_time: String,
}

/// The single JSON artifact written per invocation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AggregateReport {
    pub period: String,
    pub generated_at: String,
    pub total_activities: usize,
    pub activities: Vec<OutputRecord>,
}

/// `YYYY-MM-DD` for an upstream `start_date`, tolerating odd timestamps by
/// falling back to the first ten characters.
pub fn activity_date(start_date: &str) -> String {
    normalize_date_str(start_date).unwrap_or_else(|| start_date.chars().take(10).collect())
}

impl SplitRecord {
    pub fn from_split(split: &Split) -> Self {
        Self {
            split_number: split.split,
            pace_per_km: format_pace(split.average_speed),
            distance_km: round2(split.distance / 1000.0),
            time: format_duration(split.moving_time),
            avg_heart_rate: heart_rate(split.average_heartrate),
            elevation_difference_m: round1(split.elevation_difference.unwrap_or(0.0)),
        }
    }
}

/// Truncate a heart rate to whole bpm; zero means the sensor was absent.
fn heart_rate(average_heartrate: Option<f64>) -> Option<i64> {
    average_heartrate.and_then(|hr| if hr > 0.0 { Some(hr as i64) } else { None })
}

impl OutputRecord {
    pub fn from_run(detail: &DetailedActivity) -> Self {
        let splits = detail
            .splits_metric
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(SplitRecord::from_split)
            .collect();

        OutputRecord::Run {
            activity_id: detail.id,
            activity_name: detail.name.clone(),
            date: activity_date(&detail.start_date),
            summary: RunSummary {
                distance_km: round2(detail.distance / 1000.0),
                moving_time: format_duration(detail.moving_time),
                elapsed_time: format_duration(detail.elapsed_time),
                average_pace_per_km: format_pace(detail.average_speed),
                calories: detail.calories.unwrap_or(0.0) as i64,
            },
            splits,
        }
    }

    pub fn from_workout(summary: &ActivitySummary) -> Self {
        OutputRecord::Workout {
            activity_id: summary.id,
            activity_name: summary.name.clone(),
            date: activity_date(&summary.start_date),
            summary: WorkoutSummary {
                total_time: format_duration(summary.elapsed_time),
            },
        }
    }
}
