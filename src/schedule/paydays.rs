//! Biweekly payday generation
//!
//! Produces the ordered sequence of paydays: the start date, then every 14
//! days after it, for as long as the dates fall in the target year.

use chrono::{Datelike, Duration, NaiveDate};

/// Iterator over biweekly paydays within a target year
#[derive(Debug, Clone)]
pub struct Paydays {
    next: NaiveDate,
    target_year: i32,
}

impl Iterator for Paydays {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.next.year() != self.target_year {
            return None;
        }
        let current = self.next;
        self.next = current + Duration::days(14);
        Some(current)
    }
}

/// Generate paydays starting at `start`, stepping 14 days, while the date's
/// year equals `target_year`
///
/// Yields nothing when the start date's year differs from the target year.
pub fn paydays(start: NaiveDate, target_year: i32) -> Paydays {
    Paydays {
        next: start,
        target_year,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_paydays_from_september_start() {
        let dates: Vec<_> = paydays(date(2025, 9, 18), 2025).collect();

        assert_eq!(dates.first(), Some(&date(2025, 9, 18)));
        assert_eq!(dates.get(1), Some(&date(2025, 10, 2)));
        assert_eq!(dates.last(), Some(&date(2025, 12, 25)));
        assert_eq!(dates.len(), 8);
    }

    #[test]
    fn test_consecutive_paydays_differ_by_14_days() {
        let dates: Vec<_> = paydays(date(2025, 1, 3), 2025).collect();

        assert!(!dates.is_empty());
        for pair in dates.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(14));
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_all_paydays_fall_in_target_year() {
        let dates: Vec<_> = paydays(date(2025, 12, 20), 2025).collect();
        assert_eq!(dates, vec![date(2025, 12, 20)]);
    }

    #[test]
    fn test_full_year_payday_count() {
        // Jan 1 start: days 1, 15, ..., 365 of a non-leap year
        let dates: Vec<_> = paydays(date(2025, 1, 1), 2025).collect();
        assert_eq!(dates.len(), 27);
        assert_eq!(dates.last(), Some(&date(2025, 12, 31)));
    }

    #[test]
    fn test_empty_when_start_year_differs() {
        let dates: Vec<_> = paydays(date(2026, 1, 1), 2025).collect();
        assert!(dates.is_empty());
    }
}
