//! Date-window resolution for one report invocation.

use crate::error::ReportError;
use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

/// Resolved fetch window, inclusive on both ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ReportWindow {
    /// Resolve the window from optional CLI dates against `now` (local).
    ///
    /// No start date defaults to the most recent Monday at 00:00:00; no end
    /// date defaults to `now`. A given start is floored to midnight, a given
    /// end is ceiled to 23:59:59.999999. When both dates are given and start
    /// is after end the range is rejected before any network activity.
    pub fn resolve(
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        now: NaiveDateTime,
    ) -> Result<Self, ReportError> {
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if start > end {
                return Err(ReportError::InvalidRange { start, end });
            }
        }

        let start = match start_date {
            Some(date) => date.and_time(NaiveTime::MIN),
            None => {
                let today = now.date();
                let monday =
                    today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
                monday.and_time(NaiveTime::MIN)
            }
        };
        let end = match end_date {
            Some(date) => {
                date.and_time(NaiveTime::MIN) + Duration::days(1) - Duration::microseconds(1)
            }
            None => now,
        };

        Ok(Self { start, end })
    }

    /// Window start as local epoch seconds (`after` query parameter).
    pub fn after_epoch(&self) -> i64 {
        local_epoch(self.start)
    }

    /// Window end as local epoch seconds (`before` query parameter).
    pub fn before_epoch(&self) -> i64 {
        local_epoch(self.end)
    }

    /// `YYYY-MM-DD to YYYY-MM-DD` period label for the aggregate report.
    pub fn period(&self) -> String {
        format!(
            "{} to {}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }

    /// Aggregate file name: `Activities-<start>.json` for a single day,
    /// `Activities-<start>-to-<end>.json` otherwise.
    pub fn file_name(&self) -> String {
        let start = self.start.format("%Y-%m-%d");
        let end = self.end.format("%Y-%m-%d");
        if self.start.date() == self.end.date() {
            format!("Activities-{start}.json")
        } else {
            format!("Activities-{start}-to-{end}.json")
        }
    }
}

fn local_epoch(naive: NaiveDateTime) -> i64 {
    // DST gaps have no local representation; fall back to the UTC reading.
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp())
        .unwrap_or_else(|| naive.and_utc().timestamp())
}

/// Parse a CLI date argument in `YYYY-MM-DD` form.
pub fn parse_date_argument(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Normalize an upstream ISO-8601 timestamp to `YYYY-MM-DD`.
///
/// Accepts:
/// - YYYY-MM-DD (returns as-is)
/// - RFC3339 datetime (extracts date)
/// - Naive datetime YYYY-MM-DDTHH:MM:SS (extracts date)
pub fn normalize_date_str(s: &str) -> Option<String> {
    if NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok() {
        return Some(s.to_string());
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive().format("%Y-%m-%d").to_string());
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(ndt.date().format("%Y-%m-%d").to_string());
    }
    None
}
