//! Timetable layout.
//!
//! Turns a session collection and a break list into the ordered rows of
//! a day × slot grid.
//!
//! # Stages
//!
//! - **`slots`**: distinct time slots in use, interleaved with the breaks
//!   that fall inside the occupied time range.
//! - **`grid`**: places sessions into `(row, day)` cells.
//!
//! Both stages are pure: inputs are never mutated. [`build_timetable`]
//! runs them back to back over one session set.

mod grid;
mod slots;

pub use grid::{assemble_grid, build_timetable};
pub use slots::{build_slots, merge_breaks, should_show_break, slot_choices};
