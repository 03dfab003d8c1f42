//! Grid assembly.
//!
//! Places sessions into the day × row matrix by exact `(day, start, end)`
//! match. A session whose time matches no composed slot is never placed,
//! so the rows must be composed from the same session set.

use std::collections::HashMap;

use crate::config::TimetableConfig;
use crate::models::{normalize_breaks, Break, Grid, GridLine, GridRow, Placement, Session};

use super::slots::{build_slots, merge_breaks};

/// Lays `sessions` onto `rows` for the given day columns.
///
/// Cells keep sessions in input order (parallel subgroups share a cell),
/// each tagged with its session id.
/// Break rows become a single band across all columns.
pub fn assemble_grid(rows: &[GridRow], sessions: &[Session], days: &[i32]) -> Grid {
    let mut by_cell: HashMap<(i32, &str, &str), Vec<&Session>> = HashMap::new();
    for s in sessions {
        by_cell
            .entry((s.day, s.start_str(), s.end_str()))
            .or_default()
            .push(s);
    }

    let lines = rows
        .iter()
        .map(|row| match row {
            GridRow::Slot { start, end } => GridLine::Slot {
                start: start.clone(),
                end: end.clone(),
                cells: days
                    .iter()
                    .map(|&day| {
                        by_cell
                            .get(&(day, start.as_str(), end.as_str()))
                            .map(|cell| {
                                cell.iter().map(|&s| Placement::from(s)).collect::<Vec<_>>()
                            })
                            .unwrap_or_default()
                    })
                    .collect(),
            },
            GridRow::Break { start, end, label } => GridLine::Break {
                start: start.clone(),
                end: end.clone(),
                label: label.clone(),
            },
        })
        .collect();

    Grid {
        days: days.to_vec(),
        lines,
    }
}

/// Composes rows and assembles the grid for one view in a single pass.
///
/// Breaks are normalized first (see [`normalize_breaks`]).
pub fn build_timetable(sessions: &[Session], breaks: &[Break], config: &TimetableConfig) -> Grid {
    let breaks = normalize_breaks(breaks, &config.default_break_label);
    let slots = build_slots(sessions);
    let rows = merge_breaks(&slots, sessions, &breaks);
    let grid = assemble_grid(&rows, sessions, &config.days);

    tracing::debug!(
        sessions = sessions.len(),
        rows = grid.lines.len(),
        placed = grid.placed_count(),
        "assembled timetable grid"
    );

    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SessionId;

    fn sample_sessions() -> Vec<Session> {
        vec![
            Session::new(1, "08:30", "09:25").with_subject("MAT"),
            Session::new(1, "09:40", "10:35").with_subject("CAT"),
            Session::new(2, "08:30", "09:25").with_subject("ANG").with_group("1A-a"),
            Session::new(2, "08:30", "09:25").with_subject("FIS").with_group("1A-b"),
            Session::new(3, "08:30", "09:25").with_subject("HIS"),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, s)| s.with_id(SessionId::from_index("S", 4, i)))
        .collect()
    }

    #[test]
    fn test_assemble_grid_cells() {
        let sessions = sample_sessions();
        let rows = merge_breaks(&build_slots(&sessions), &sessions, &[]);
        let grid = assemble_grid(&rows, &sessions, &[1, 2, 3, 4, 5]);

        assert_eq!(grid.lines.len(), 2);
        assert_eq!(grid.cell(0, 1).unwrap()[0].session.subject(), Some("MAT"));
        assert_eq!(grid.cell(0, 4).unwrap().len(), 0);
        assert_eq!(grid.cell(1, 1).unwrap()[0].session.subject(), Some("CAT"));
        assert_eq!(grid.placed_count(), 5);
    }

    #[test]
    fn test_parallel_subgroups_share_cell_in_order() {
        let sessions = sample_sessions();
        let rows = merge_breaks(&build_slots(&sessions), &sessions, &[]);
        let grid = assemble_grid(&rows, &sessions, &[1, 2, 3, 4, 5]);

        let cell = grid.cell(0, 2).unwrap();
        assert_eq!(cell.len(), 2);
        assert_eq!(cell[0].session.subject(), Some("ANG"));
        assert_eq!(cell[1].session.subject(), Some("FIS"));
        assert_eq!(cell[0].id.as_str(), "S0002");
        assert_eq!(cell[1].id.as_str(), "S0003");
    }

    #[test]
    fn test_break_row_spans_columns() {
        let sessions = sample_sessions();
        let breaks = vec![Break::new("09:25", "09:40", "PATI")];
        let rows = merge_breaks(&build_slots(&sessions), &sessions, &breaks);
        let grid = assemble_grid(&rows, &sessions, &[1, 2, 3, 4, 5]);

        assert_eq!(grid.lines.len(), 3);
        assert!(matches!(&grid.lines[1], GridLine::Break { label, .. } if label == "PATI"));
        assert!(grid.cell(1, 1).is_none());
    }

    #[test]
    fn test_unmatched_session_not_placed() {
        let sessions = sample_sessions();
        let rows = vec![GridRow::Slot {
            start: "08:30".into(),
            end: "09:25".into(),
        }];
        let grid = assemble_grid(&rows, &sessions, &[1, 2, 3, 4, 5]);
        assert_eq!(grid.placed_count(), 4);
    }

    #[test]
    fn test_days_outside_columns_not_placed() {
        let sessions = vec![Session::new(6, "08:30", "09:25")];
        let grid = build_timetable(&sessions, &[], &TimetableConfig::default());
        assert_eq!(grid.lines.len(), 1);
        assert_eq!(grid.placed_count(), 0);
    }

    #[test]
    fn test_build_timetable_labels_breaks() {
        let sessions = sample_sessions();
        let breaks = vec![Break::new("09:25", "09:40", "")];
        let grid = build_timetable(&sessions, &breaks, &TimetableConfig::default());
        assert!(matches!(&grid.lines[1], GridLine::Break { label, .. } if label == "DESCANS"));
        assert_eq!(grid.days, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_serialized_grid_keeps_session_ids() {
        let sessions = sample_sessions();
        let grid = build_timetable(&sessions, &[], &TimetableConfig::default());
        let json = serde_json::to_value(&grid).unwrap();

        let first_row = &json["lines"][0];
        assert_eq!(first_row["kind"], "slot");
        assert_eq!(first_row["cells"][0][0]["id"], "S0000");
        assert_eq!(first_row["cells"][1][1]["id"], "S0003");
        assert_eq!(json["lines"][1]["cells"][0][0]["id"], "S0001");
    }

    #[test]
    fn test_empty_collection() {
        let breaks = vec![Break::new("09:25", "09:40", "PATI")];
        let grid = build_timetable(&[], &breaks, &TimetableConfig::default());
        assert!(grid.is_empty());
    }
}
