//! Merge newly planned windows into a day that already has slots.
//!
//! Existing slots always win. An incoming window is dropped when it overlaps
//! an existing one, or when the idle time between it and a neighbor (the
//! existing slot it sorts against, the previous existing slot, or the last
//! window already accepted) falls short of the required gap.

use crate::candidates::OccupiedWindow;
use crate::expander::SlotWindow;
use chrono::NaiveDateTime;

type Span = (NaiveDateTime, NaiveDateTime);

fn overlapping(a: Span, b: Span) -> bool {
    a.0 < b.1 && a.1 > b.0
}

/// Idle minutes between two disjoint spans compared against the gap.
/// Overlapping pairs pass; the overlap test owns that case.
fn insufficient_gap(a: Span, b: Span, gap_minutes: i64) -> bool {
    let idle = if a.1 <= b.0 {
        (b.0 - a.1).num_minutes()
    } else if b.1 <= a.0 {
        (a.0 - b.1).num_minutes()
    } else {
        return false;
    };
    idle < gap_minutes
}

/// The incoming windows that survive merging into an existing day.
///
/// Both lists are sorted internally by start time. The walk mirrors a
/// two-pointer merge: existing windows are kept unconditionally and act as
/// anchors; each incoming window is admitted only when it overlaps nothing
/// and honors `gap_minutes` against all of its neighbors. The returned
/// windows are ascending.
pub fn merge_new_windows(
    existing: &[OccupiedWindow],
    incoming: &[SlotWindow],
    gap_minutes: i64,
) -> Vec<SlotWindow> {
    let mut existing: Vec<Span> = existing.iter().map(|w| (w.start, w.end)).collect();
    existing.sort_unstable();
    let mut incoming: Vec<Span> = incoming.iter().map(|w| (w.start, w.end)).collect();
    incoming.sort_unstable();

    let mut accepted: Vec<SlotWindow> = Vec::new();
    let mut last_in_result: Option<Span> = None;
    let (mut i, mut j) = (0, 0);

    while i < existing.len() && j < incoming.len() {
        let current = existing[i];
        let new = incoming[j];

        if current.0 < new.0 {
            // The existing slot sorts first; it enters the merged day as-is.
            last_in_result = Some(current);
            i += 1;
            continue;
        }

        let previous = (i > 0).then(|| existing[i - 1]);

        if overlapping(new, current) || previous.is_some_and(|p| overlapping(new, p)) {
            j += 1;
            continue;
        }

        let gap_ok = !insufficient_gap(new, current, gap_minutes)
            && !previous.is_some_and(|p| insufficient_gap(new, p, gap_minutes))
            && !last_in_result.is_some_and(|l| insufficient_gap(new, l, gap_minutes));

        if gap_ok {
            accepted.push(SlotWindow {
                start: new.0,
                end: new.1,
            });
            last_in_result = Some(new);
        }
        j += 1;
    }

    // Only incoming windows can remain with a live anchor; leftover existing
    // slots mean the incoming list is already exhausted.
    while j < incoming.len() {
        let new = incoming[j];
        j += 1;
        if let Some(last) = last_in_result {
            if overlapping(new, last) || insufficient_gap(new, last, gap_minutes) {
                continue;
            }
        }
        accepted.push(SlotWindow {
            start: new.0,
            end: new.1,
        });
        last_in_result = Some(new);
    }

    accepted
}
