//! Calendar month bounds.

use chrono::{Datelike, Months, NaiveDate};

/// The first and last calendar day of one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl MonthRange {
    /// The month that contains `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let start = date.with_day(1).unwrap_or(date);
        let end = start
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX);

        MonthRange { start, end }
    }

    pub fn len(&self) -> u32 {
        self.end.day() - self.start.day() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Every day of the month, ascending.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |d| *d <= self.end)
    }

    /// Weekday index of the first day, Sunday = 0.
    pub fn leading_weekday(&self) -> u32 {
        self.start.weekday().num_days_from_sunday()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_bounds() {
        let march = MonthRange::containing(date(2025, 3, 20));
        assert_eq!(march.start, date(2025, 3, 1));
        assert_eq!(march.end, date(2025, 3, 31));
        assert_eq!(march.len(), 31);
    }

    #[test]
    fn test_february_leap_years() {
        assert_eq!(MonthRange::containing(date(2024, 2, 10)).len(), 29);
        assert_eq!(MonthRange::containing(date(2025, 2, 10)).len(), 28);
        assert_eq!(MonthRange::containing(date(1900, 2, 1)).len(), 28);
        assert_eq!(MonthRange::containing(date(2000, 2, 1)).len(), 29);
    }

    #[test]
    fn test_december_rolls_into_next_year() {
        let december = MonthRange::containing(date(2025, 12, 31));
        assert_eq!(december.end, date(2025, 12, 31));
        assert_eq!(december.days().count(), 31);
    }

    #[test]
    fn test_leading_weekday() {
        // March 2025 starts on a Saturday, June 2025 on a Sunday
        assert_eq!(MonthRange::containing(date(2025, 3, 15)).leading_weekday(), 6);
        assert_eq!(MonthRange::containing(date(2025, 6, 15)).leading_weekday(), 0);
    }
}
