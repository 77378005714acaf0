//! Drag-and-drop resolution.
//!
//! A calendar view has two kinds of drop containers: the event list of the
//! selected day and the 42 grid cells. A [`DragDrop`] names where an event
//! was picked up and where it was released; [`EventStore::apply_drop`]
//! turns that into a reorder or a move.

use calgrid_core::{CalGridResult, DaySlot, MonthGrid};
use chrono::NaiveDate;
use tracing::debug;

use crate::store::{EventStore, MoveOutcome};

/// Container id of the selected day's event list.
pub const EVENTS_LIST_ID: &str = "events-list";

const DAY_CELL_PREFIX: &str = "day-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    /// The event list of the selected day
    EventList { day: NaiveDate },
    /// A grid cell, by index into the month grid
    DayCell(usize),
}

impl Container {
    /// Parse a container id. The event list needs a selected day to mean
    /// anything, so it yields `None` without one.
    pub fn parse(id: &str, selected: Option<NaiveDate>) -> Option<Self> {
        if id == EVENTS_LIST_ID {
            return selected.map(|day| Container::EventList { day });
        }
        id.strip_prefix(DAY_CELL_PREFIX)?
            .parse()
            .ok()
            .map(Container::DayCell)
    }

    pub fn id(&self) -> String {
        match self {
            Container::EventList { .. } => EVENTS_LIST_ID.to_string(),
            Container::DayCell(index) => format!("{DAY_CELL_PREFIX}{index}"),
        }
    }

    /// The cell this container stands for on `grid`.
    pub fn slot(&self, grid: &MonthGrid) -> DaySlot {
        match self {
            Container::EventList { day } => DaySlot::Day(*day),
            Container::DayCell(index) => grid.get(*index).copied().unwrap_or(DaySlot::Empty),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragDrop {
    pub from: Container,
    pub to: Container,
    /// Index of the dragged event among the source container's events
    pub previous_index: usize,
    /// Index it was released at in the target container
    pub current_index: usize,
}

impl EventStore {
    /// Apply a finished drag.
    ///
    /// Within the event list this reorders the day. Across containers the
    /// dragged event gets the target's date. That includes dragging from
    /// one grid cell to another, which moves the cell's `previous_index`-th
    /// event. Drops on padding cells, empty source cells and same-cell
    /// drops are ignored.
    pub fn apply_drop(&self, drop: &DragDrop, grid: &MonthGrid) -> CalGridResult<MoveOutcome> {
        match (drop.from, drop.to) {
            (Container::EventList { day }, Container::EventList { day: target }) => {
                if day == target && self.reorder_day(day, drop.previous_index, drop.current_index) {
                    Ok(MoveOutcome::Reordered)
                } else {
                    Ok(MoveOutcome::Ignored)
                }
            }
            (Container::DayCell(a), Container::DayCell(b)) if a == b => Ok(MoveOutcome::Ignored),
            (from, to) => {
                let Some(source_day) = from.slot(grid).date() else {
                    return Ok(MoveOutcome::Ignored);
                };
                let dragged = self.events_for_day(source_day).into_iter().nth(drop.previous_index);
                let Some(event) = dragged else {
                    debug!(from = %from.id(), index = drop.previous_index, "Nothing to drag");
                    return Ok(MoveOutcome::Ignored);
                };
                self.move_to_slot(&event.id, to.slot(grid))
            }
        }
    }
}
