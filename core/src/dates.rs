//! Mapping a requested day count onto concrete calendar dates
//!
//! Walks forward from a start date one calendar day at a time, keeping
//! the days whose weekday name is in the caller's allow-list.

use chrono::NaiveDate;
use serde::Serialize;

/// Hard cap on calendar days scanned; protects against allow-lists that
/// can never satisfy the requested count (e.g. an empty set)
pub const MAX_SCAN_DAYS: u32 = 100;

/// Weekday names used by the preferred-days allow-list, Mon-Fri
pub const WEEKDAY_NAMES: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// A single scheduled study day
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyDate {
    /// ISO yyyy-mm-dd
    pub date: NaiveDate,
    /// Full weekday name, e.g. "Monday"
    pub day: String,
    /// 1-based position in the requested sequence
    pub day_number: u32,
}

/// Collect up to `total_days` study dates from `start`, keeping only
/// days named in `preferred_days` (case-insensitive).
///
/// May return fewer dates than requested when the allow-list cannot be
/// satisfied within [`MAX_SCAN_DAYS`]; callers treat that as a warning,
/// not a failure. Deterministic for a fixed start date.
pub fn study_dates(total_days: u32, preferred_days: &[String], start: NaiveDate) -> Vec<StudyDate> {
    let mut dates = Vec::new();
    let mut current = start;

    for _ in 0..MAX_SCAN_DAYS {
        if dates.len() as u32 >= total_days {
            break;
        }

        let day_name = current.format("%A").to_string();
        if preferred_days.iter().any(|d| d.eq_ignore_ascii_case(&day_name)) {
            dates.push(StudyDate {
                date: current,
                day: day_name,
                day_number: dates.len() as u32 + 1,
            });
        }

        current = match current.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    dates
}

/// Default allow-list: weekdays only
pub fn default_preferred_days() -> Vec<String> {
    WEEKDAY_NAMES.iter().map(|d| d.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2025-09-01 is a Monday
    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
    }

    #[test]
    fn test_weekdays_skip_weekend() {
        let dates = study_dates(7, &default_preferred_days(), monday());

        assert_eq!(dates.len(), 7);
        for (i, d) in dates.iter().enumerate() {
            assert_eq!(d.day_number, i as u32 + 1);
            assert_ne!(d.day, "Saturday");
            assert_ne!(d.day, "Sunday");
        }

        // Mon 1st through Fri 5th, then the weekend is skipped
        assert_eq!(dates[0].date, NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
        assert_eq!(dates[4].date, NaiveDate::from_ymd_opt(2025, 9, 5).unwrap());
        assert_eq!(dates[5].date, NaiveDate::from_ymd_opt(2025, 9, 8).unwrap());
        assert_eq!(dates[6].date, NaiveDate::from_ymd_opt(2025, 9, 9).unwrap());
    }

    #[test]
    fn test_empty_allow_list_returns_short() {
        let dates = study_dates(7, &[], monday());
        assert!(dates.is_empty());

        let dates = study_dates(7, &["Funday".to_string()], monday());
        assert!(dates.is_empty());
    }

    #[test]
    fn test_single_day_allow_list() {
        let dates = study_dates(3, &["Sunday".to_string()], monday());
        assert_eq!(dates.len(), 3);
        assert!(dates.iter().all(|d| d.day == "Sunday"));
        assert_eq!(dates[0].date, NaiveDate::from_ymd_opt(2025, 9, 7).unwrap());
        assert_eq!(dates[1].date, NaiveDate::from_ymd_opt(2025, 9, 14).unwrap());
    }

    #[test]
    fn test_case_insensitive_match() {
        let dates = study_dates(1, &["monday".to_string()], monday());
        assert_eq!(dates.len(), 1);
        assert_eq!(dates[0].day, "Monday");
    }

    #[test]
    fn test_deterministic() {
        let a = study_dates(5, &default_preferred_days(), monday());
        let b = study_dates(5, &default_preferred_days(), monday());
        assert_eq!(
            a.iter().map(|d| d.date).collect::<Vec<_>>(),
            b.iter().map(|d| d.date).collect::<Vec<_>>()
        );
    }
}
