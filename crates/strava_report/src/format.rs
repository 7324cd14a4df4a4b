//! Derived display fields shared by the console report and the persisted
//! records: pace, duration text and rounding rules.

/// Render an average speed in m/s as a zero-padded `MM:SS` pace per km.
///
/// This is pace, not speed: lower is faster. Absent, zero or negative speeds
/// all render as `"00:00"`.
pub fn format_pace(average_speed: Option<f64>) -> String {
    let Some(speed) = average_speed else {
        return "00:00".to_string();
    };
    if speed <= 0.0 {
        return "00:00".to_string();
    }
    let seconds_per_km = 1000.0 / speed;
    let minutes = (seconds_per_km / 60.0).floor() as i64;
    let seconds = (seconds_per_km % 60.0).floor() as i64;
    format!("{minutes:02}:{seconds:02}")
}

/// Render a duration in whole seconds as `H:MM:SS`, spelling out days past
/// 24 hours (`1 day, 2:03:04`).
pub fn format_duration(total_seconds: i64) -> String {
    let days = total_seconds / 86_400;
    let rem = total_seconds % 86_400;
    let hours = rem / 3_600;
    let minutes = rem % 3_600 / 60;
    let seconds = rem % 60;
    if days > 0 {
        let unit = if days == 1 { "day" } else { "days" };
        format!("{days} {unit}, {hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{hours}:{minutes:02}:{seconds:02}")
    }
}

/// Round to 2 decimal places, halves away from zero (persisted distances).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 1 decimal place, halves away from zero (elevation differences).
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pace_for_five_minute_kilometers() {
        assert_eq!(format_pace(Some(3.333)), "05:00");
    }

    #[test]
    fn pace_absent_zero_and_negative_are_all_zero() {
        assert_eq!(format_pace(None), "00:00");
        assert_eq!(format_pace(Some(0.0)), "00:00");
        assert_eq!(format_pace(Some(-1.5)), "00:00");
    }

    #[test]
    fn pace_is_monotonically_decreasing_in_speed() {
        let speeds = [0.5, 1.0, 2.0, 2.5, 3.0, 3.333, 4.0, 5.0, 10.0];
        let paces: Vec<String> = speeds.iter().map(|&s| format_pace(Some(s))).collect();
        for pair in paces.windows(2) {
            assert!(pair[0] >= pair[1], "pace {:?} should not increase", pair);
        }
    }

    #[test]
    fn duration_under_a_day() {
        assert_eq!(format_duration(0), "0:00:00");
        assert_eq!(format_duration(1500), "0:25:00");
        assert_eq!(format_duration(3_661), "1:01:01");
        assert_eq!(format_duration(86_399), "23:59:59");
    }

    #[test]
    fn duration_spells_out_days() {
        assert_eq!(format_duration(86_400), "1 day, 0:00:00");
        assert_eq!(format_duration(90_061), "1 day, 1:01:01");
        assert_eq!(format_duration(172_800), "2 days, 0:00:00");
    }

    #[test]
    fn round2_matches_distance_round_trip_cases() {
        for (meters, expected) in [
            (0.0, 0.0),
            (1000.0, 1.0),
            (12_345.0, 12.35),
            (42_195.0, 42.2),
        ] {
            assert_eq!(round2(meters / 1000.0), expected);
        }
    }

    #[test]
    fn round1_keeps_signed_elevation() {
        assert_eq!(round1(2.34), 2.3);
        assert_eq!(round1(-0.55), -0.6);
    }
}
