//! Month grid generation.
//!
//! A month is always laid out as six full weeks (42 cells), weeks starting
//! on Sunday. Cells before the first of the month are empty padding; cells
//! after the last day of the month continue into the next month.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::month::MonthRange;

pub const DAYS_PER_WEEK: usize = 7;
pub const GRID_WEEKS: usize = 6;
pub const GRID_CELLS: usize = DAYS_PER_WEEK * GRID_WEEKS;

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DaySlot {
    /// Leading padding: no date, not selectable, not a drop target
    Empty,
    Day(NaiveDate),
}

impl DaySlot {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            DaySlot::Day(date) => Some(*date),
            DaySlot::Empty => None,
        }
    }

    pub fn is_drop_target(&self) -> bool {
        matches!(self, DaySlot::Day(_))
    }
}

pub type MonthGrid = [DaySlot; GRID_CELLS];

/// Lay out the month containing `reference` as 42 cells.
pub fn generate(reference: NaiveDate) -> MonthGrid {
    let month = MonthRange::containing(reference);
    let pad = month.leading_weekday() as usize;

    let mut grid = [DaySlot::Empty; GRID_CELLS];
    for (offset, cell) in grid.iter_mut().skip(pad).enumerate() {
        if let Some(date) = month.start.checked_add_days(Days::new(offset as u64)) {
            *cell = DaySlot::Day(date);
        }
    }
    grid
}

/// Number of empty cells in front of the first day of the month.
pub fn leading_pad(reference: NaiveDate) -> usize {
    MonthRange::containing(reference).leading_weekday() as usize
}

/// The grid as six rows of seven cells.
pub fn weeks(grid: &MonthGrid) -> impl Iterator<Item = &[DaySlot]> {
    grid.chunks(DAYS_PER_WEEK)
}

/// Drop-container ids for each cell: "day-0" .. "day-41".
pub fn day_cell_ids(grid: &MonthGrid) -> Vec<String> {
    (0..grid.len()).map(|i| format!("day-{i}")).collect()
}
