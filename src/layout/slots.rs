//! Slot and break composition.
//!
//! # Algorithm
//!
//! 1. Collect the distinct `(start, end)` pairs used by the sessions and
//!    sort them by start minute.
//! 2. Walk the breaks in start order. Before each break, flush every
//!    pending slot that starts strictly before it.
//! 3. Emit the break only if the sessions place it inside their occupied
//!    range: some session ends at or before the break starts, and some
//!    session starts at or after it ends.
//! 4. Flush the remaining slots.
//!
//! Two breaks with no slot between them collapse to the first one.

use std::collections::HashSet;

use crate::config::TimetableConfig;
use crate::models::{to_minutes, Break, GridRow, Session, Slot};

/// Distinct time slots used by `sessions`, sorted by start minute.
///
/// Sessions missing a start or end contribute nothing. Slots sharing a
/// start keep first-seen order.
pub fn build_slots(sessions: &[Session]) -> Vec<Slot> {
    let mut seen = HashSet::new();
    let mut slots = Vec::new();
    for s in sessions {
        let (Some(start), Some(end)) = (timed(&s.start), timed(&s.end)) else {
            continue;
        };
        if seen.insert((start, end)) {
            slots.push(Slot::new(start, end));
        }
    }
    slots.sort_by_key(|slot| to_minutes(&slot.start));
    slots
}

/// Slots for a time selector: those in use, or the configured fallback
/// when no session has usable times.
pub fn slot_choices(sessions: &[Session], config: &TimetableConfig) -> Vec<Slot> {
    let slots = build_slots(sessions);
    if slots.is_empty() {
        config.fallback_slots.clone()
    } else {
        slots
    }
}

/// Whether a break falls inside the time range occupied by `sessions`.
pub fn should_show_break(br: &Break, sessions: &[Session]) -> bool {
    let window = br.window();
    let mut before = false;
    let mut after = false;
    for s in sessions {
        if timed(&s.start).is_none() || timed(&s.end).is_none() {
            continue;
        }
        let w = s.window();
        before |= w.end_min <= window.start_min;
        after |= w.start_min >= window.end_min;
        if before && after {
            return true;
        }
    }
    false
}

/// Interleaves slots and relevant breaks into ordered grid rows.
///
/// `breaks` need not be sorted.
pub fn merge_breaks(slots: &[Slot], sessions: &[Session], breaks: &[Break]) -> Vec<GridRow> {
    let mut ordered: Vec<&Break> = breaks.iter().collect();
    ordered.sort_by_key(|b| b.start_min());

    let mut rows = Vec::with_capacity(slots.len() + ordered.len());
    let mut pending = slots.iter().peekable();

    for br in ordered {
        let break_start = br.start_min();
        while let Some(slot) = pending.next_if(|s| to_minutes(&s.start) < break_start) {
            rows.push(GridRow::from(slot.clone()));
        }

        if !should_show_break(br, sessions) {
            continue;
        }
        if rows.last().is_some_and(GridRow::is_break) {
            tracing::debug!(start = %br.start, label = %br.label, "collapsed adjacent break");
            continue;
        }
        rows.push(GridRow::Break {
            start: br.start.clone(),
            end: br.end.clone(),
            label: br.label.clone(),
        });
    }

    rows.extend(pending.cloned().map(GridRow::from));
    rows
}

fn timed(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|t| !t.trim().is_empty())
}
