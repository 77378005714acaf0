//! Month navigation state for a calendar view.

use chrono::{Datelike, Local, Months, NaiveDate};

use crate::error::ValidationError;
use crate::grid::{generate, DaySlot, MonthGrid};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// How many years before and after the current one the year picker offers.
pub const DEFAULT_YEAR_SPAN: i32 = 50;

/// Which month is shown and which day is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    current: NaiveDate,
    selected: Option<NaiveDate>,
}

impl MonthCursor {
    pub fn new(current: NaiveDate) -> Self {
        MonthCursor {
            current,
            selected: None,
        }
    }

    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn current(&self) -> NaiveDate {
        self.current
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn year(&self) -> i32 {
        self.current.year()
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.current.month0() as usize]
    }

    pub fn grid(&self) -> MonthGrid {
        generate(self.current)
    }

    /// Move by whole months. The day is clamped to the target month's
    /// length, so Jan 31 + 1 lands on the last day of February.
    pub fn shift_months(&mut self, offset: i32) {
        let months = Months::new(offset.unsigned_abs());
        let shifted = if offset >= 0 {
            self.current.checked_add_months(months)
        } else {
            self.current.checked_sub_months(months)
        };
        if let Some(date) = shifted {
            self.current = date;
        }
    }

    /// Jump to a month (1-12) of the current year.
    pub fn set_month(&mut self, month: u32) -> Result<(), ValidationError> {
        if !(1..=12).contains(&month) {
            return Err(ValidationError::InvalidMonth(month));
        }
        self.shift_months(month as i32 - self.current.month() as i32);
        Ok(())
    }

    /// Jump to the same month of `year`. A year chrono cannot represent
    /// leaves the cursor where it is.
    pub fn set_year(&mut self, year: i32) {
        let offset = year
            .checked_sub(self.current.year())
            .and_then(|years| years.checked_mul(12));
        if let Some(offset) = offset {
            self.shift_months(offset);
        }
    }

    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.current = today;
        self.selected = Some(today);
    }

    /// Select a grid cell. Padding cells clear the selection.
    pub fn select(&mut self, slot: DaySlot) {
        self.selected = slot.date();
    }

    /// Keep the selection on an event that was moved off the selected day.
    pub fn follow_move(&mut self, from: NaiveDate, to: NaiveDate) {
        if self.selected == Some(from) {
            self.selected = Some(to);
        }
    }

    pub fn year_options(&self, span: i32) -> std::ops::RangeInclusive<i32> {
        let year = self.year();
        year.saturating_sub(span)..=year.saturating_add(span)
    }
}
