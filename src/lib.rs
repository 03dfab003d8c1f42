//! Weekly timetable engine for the U-Engine ecosystem.
//!
//! Validates a set of weekly class sessions and lays them out as a
//! day × time-slot grid. Loading, rendering and persistence belong to the
//! host; this crate works on already-parsed collections.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Session`, `Reference`, `Subject`, `Break`,
//!   `Finding`, `GridRow`, `Grid`, and the `"HH:MM"` clock helpers
//! - **`validation`**: Pairwise overlap detection and per-session checks
//! - **`layout`**: Slot/break composition and grid assembly
//! - **`store`**: The editable session collection with conflict-checked moves
//! - **`filter`**: View filters and list ordering
//! - **`dataset`**: Lenient ingestion of a JSON dataset
//! - **`config`**: Host-tunable settings
//!
//! # Example
//!
//! ```
//! use u_timetable::config::TimetableConfig;
//! use u_timetable::layout::build_timetable;
//! use u_timetable::models::{Break, ReferenceData, Session};
//! use u_timetable::store::SessionStore;
//! use u_timetable::validation::validate;
//!
//! let config = TimetableConfig::default();
//! let store = SessionStore::load(
//!     vec![
//!         Session::new(1, "08:30", "09:25").with_group("G1").with_teacher("T1"),
//!         Session::new(1, "09:40", "10:35").with_group("G1").with_teacher("T2"),
//!     ],
//!     &config,
//! );
//!
//! let findings = validate(store.sessions(), &ReferenceData::default());
//! assert_eq!(findings.len(), 4); // unknown group and teacher, twice
//!
//! let breaks = vec![Break::new("09:25", "09:40", "PATI")];
//! let grid = build_timetable(store.sessions(), &breaks, &config);
//! assert_eq!(grid.lines.len(), 3);
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod layout;
pub mod models;
pub mod store;
pub mod validation;
