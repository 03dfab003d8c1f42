//! Timetable domain models.
//!
//! Provides the data types shared by validation, layout and the session
//! store. All types are plain data with serde support; none of them hold
//! references to each other.
//!
//! # Domain Mappings
//!
//! | u-timetable | School | Training center |
//! |-------------|--------|-----------------|
//! | Session | Class period | Course session |
//! | Group | Class / cohort | Course cohort |
//! | Teacher | Teacher / staff role | Instructor |
//! | Break | Recess / lunch | Pause |

mod breaks;
pub mod clock;
mod finding;
mod grid;
mod reference;
mod session;

pub use breaks::{normalize_breaks, Break};
pub use clock::{overlaps, to_minutes, MinuteWindow};
pub use finding::{findings_for, Dimension, Finding, FindingKind};
pub use grid::{Grid, GridLine, GridRow, Placement, Slot};
pub use reference::{Keyed, Reference, ReferenceData, ReferenceIndex, Subject};
pub use session::{normalize_trimester, Session, SessionId};
