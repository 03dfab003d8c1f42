//! Timetable grid model.
//!
//! The grid is an ordered list of rows. A slot row holds one cell per
//! day column; a break row spans all columns as a single band.

use serde::{Deserialize, Serialize};

use super::session::{Session, SessionId};

/// A distinct `(start, end)` time slot used by at least one session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    /// Start time, `"HH:MM"`.
    pub start: String,
    /// End time, `"HH:MM"`.
    pub end: String,
}

impl Slot {
    /// Creates a slot.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// One row of the timetable, ordered by start time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GridRow {
    /// A teaching slot.
    Slot { start: String, end: String },
    /// A break band spanning every day column.
    Break {
        start: String,
        end: String,
        label: String,
    },
}

impl GridRow {
    /// Row start time.
    pub fn start(&self) -> &str {
        match self {
            GridRow::Slot { start, .. } | GridRow::Break { start, .. } => start,
        }
    }

    /// Row end time.
    pub fn end(&self) -> &str {
        match self {
            GridRow::Slot { end, .. } | GridRow::Break { end, .. } => end,
        }
    }

    /// Whether this is a break band.
    pub fn is_break(&self) -> bool {
        matches!(self, GridRow::Break { .. })
    }
}

impl From<Slot> for GridRow {
    fn from(slot: Slot) -> Self {
        GridRow::Slot {
            start: slot.start,
            end: slot.end,
        }
    }
}

/// A session placed in a grid cell.
///
/// Serializes as the session record with its `id` alongside, so a
/// rendered cell can be traced back to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Store key of the placed session.
    pub id: SessionId,
    /// The session record.
    #[serde(flatten)]
    pub session: Session,
}

impl From<&Session> for Placement {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id.clone(),
            session: session.clone(),
        }
    }
}

/// An assembled row: the row header plus its cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GridLine {
    /// A slot row with one cell per day column, in column order.
    Slot {
        start: String,
        end: String,
        cells: Vec<Vec<Placement>>,
    },
    /// A break band: one merged cell across every column.
    Break {
        start: String,
        end: String,
        label: String,
    },
}

/// Day × slot matrix ready for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    /// Day columns, in display order.
    pub days: Vec<i32>,
    /// Rows, in time order.
    pub lines: Vec<GridLine>,
}

impl Grid {
    /// Placements in row `row`, column `day`.
    ///
    /// Returns `None` for break rows, unknown days or out-of-range rows.
    pub fn cell(&self, row: usize, day: i32) -> Option<&[Placement]> {
        let col = self.days.iter().position(|&d| d == day)?;
        match self.lines.get(row)? {
            GridLine::Slot { cells, .. } => cells.get(col).map(Vec::as_slice),
            GridLine::Break { .. } => None,
        }
    }

    /// Whether the grid has no rows.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of session placements across all cells.
    pub fn placed_count(&self) -> usize {
        self.lines
            .iter()
            .map(|line| match line {
                GridLine::Slot { cells, .. } => cells.iter().map(Vec::len).sum(),
                GridLine::Break { .. } => 0,
            })
            .sum()
    }
}
