//! Reading and speaking time estimates.

/// Minutes needed to get through `word_count` words at `wpm`.
pub fn minutes_for(word_count: usize, wpm: f64) -> f64 {
    word_count as f64 / wpm
}

/// Render a duration given in minutes as `"45s"`, `"3m 20s"` or `"2h 5m"`.
///
/// Each unit is rounded up, so any fraction of a second or minute counts as a full one.
pub fn format_duration(minutes: f64) -> String {
    if minutes < 1.0 {
        format!("{}s", (minutes * 60.0).ceil() as u64)
    } else if minutes < 60.0 {
        let mins = minutes.floor();
        let secs = ((minutes - mins) * 60.0).ceil() as u64;
        if secs > 0 {
            format!("{}m {}s", mins as u64, secs)
        } else {
            format!("{}m", mins as u64)
        }
    } else {
        let hours = (minutes / 60.0).floor() as u64;
        let mins = (minutes % 60.0).ceil() as u64;
        format!("{}h {}m", hours, mins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_only() {
        assert_eq!(format_duration(0.0), "0s");
        assert_eq!(format_duration(0.5), "30s");
        // 1 word at 200 wpm is 0.3s, rounded up
        assert_eq!(format_duration(minutes_for(1, 200.0)), "1s");
    }

    #[test]
    fn test_whole_minute_drops_seconds() {
        assert_eq!(format_duration(minutes_for(200, 200.0)), "1m");
        assert_eq!(format_duration(minutes_for(300, 150.0)), "2m");
    }

    #[test]
    fn test_minutes_and_seconds() {
        assert_eq!(format_duration(1.5), "1m 30s");
        assert_eq!(format_duration(minutes_for(250, 200.0)), "1m 15s");
    }

    #[test]
    fn test_hours() {
        assert_eq!(format_duration(60.0), "1h 0m");
        assert_eq!(format_duration(90.5), "1h 31m");
        assert_eq!(format_duration(minutes_for(30_000, 200.0)), "2h 30m");
    }
}
