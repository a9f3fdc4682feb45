//! Resizing slots that are already on the schedule.
//!
//! Extensions are vetted against the rest of the day before they apply.
//! Overlapping available slots can be sacrificed by forcing the extension;
//! overlapping booked slots always block it. Reductions never conflict and
//! only have to respect the minimum slot length.

use chrono::Duration;

use crate::clock::TimeOfDay;
use crate::dayview::Slot;
use crate::error::{Result, SlotError};
use crate::validity::MIN_SLOT_MINUTES;

/// Outcome of vetting an extension, in the shape the schedule UI consumes.
///
/// `can_force` is set when every conflict is an available slot, meaning the
/// caller may retry with `force` to remove them and proceed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeCheck {
    pub valid: bool,
    pub conflicting_available: Vec<Slot>,
    pub conflicting_booked: Vec<Slot>,
    pub can_force: bool,
    pub message: Option<String>,
}

impl ResizeCheck {
    fn clear() -> Self {
        ResizeCheck {
            valid: true,
            conflicting_available: Vec::new(),
            conflicting_booked: Vec::new(),
            can_force: false,
            message: None,
        }
    }
}

fn find_slot<'a>(slots: &'a [Slot], slot_id: &str) -> Result<&'a Slot> {
    slots
        .iter()
        .find(|s| s.id == slot_id)
        .ok_or_else(|| SlotError::UnknownSlot(slot_id.to_string()))
}

fn span_list(conflicts: &[Slot]) -> String {
    conflicts
        .iter()
        .map(|s| {
            format!(
                "{} - {}",
                TimeOfDay::from_time(s.start.time()),
                TimeOfDay::from_time(s.end.time())
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Vet extending a slot `earlier_minutes` before its start and
/// `later_minutes` past its end, without changing anything.
///
/// Conflicts are collected against every other slot on the same day using
/// half-open overlap. Booked conflicts make the check final; available
/// conflicts leave it forceable.
///
/// # Errors
///
/// Returns [`SlotError::UnknownSlot`] when `slot_id` is not on the schedule,
/// and [`SlotError::InvalidRange`] for negative extension minutes or an
/// extension that would cross midnight.
pub fn check_resize(
    slots: &[Slot],
    slot_id: &str,
    earlier_minutes: i64,
    later_minutes: i64,
) -> Result<ResizeCheck> {
    if earlier_minutes < 0 || later_minutes < 0 {
        return Err(SlotError::InvalidRange(
            "extension minutes cannot be negative".to_string(),
        ));
    }

    let target = find_slot(slots, slot_id)?;
    let date = target.date();
    let new_start = target.start - Duration::minutes(earlier_minutes);
    let new_end = target.end + Duration::minutes(later_minutes);

    if new_start.date() != date || new_end.date() != date {
        return Err(SlotError::InvalidRange(format!(
            "slot {slot_id} cannot extend across midnight"
        )));
    }

    let mut check = ResizeCheck::clear();
    for slot in slots {
        if slot.id == slot_id || slot.date() != date {
            continue;
        }
        if new_start < slot.end && new_end > slot.start {
            if slot.available {
                check.conflicting_available.push(slot.clone());
            } else {
                check.conflicting_booked.push(slot.clone());
            }
        }
    }

    if !check.conflicting_booked.is_empty() {
        check.valid = false;
        check.message = Some(format!(
            "Cannot extend slot. It overlaps with booked appointments: {}",
            span_list(&check.conflicting_booked)
        ));
    } else if !check.conflicting_available.is_empty() {
        check.valid = false;
        check.can_force = true;
        check.message = Some(format!(
            "Extension will overlap with existing available slots: {}. \
             These slots will be removed if you proceed.",
            span_list(&check.conflicting_available)
        ));
    }

    Ok(check)
}

/// Extend a slot in place, removing conflicting available slots when the
/// caller forces a forceable extension.
///
/// The returned check reports what happened: `valid` is true when the new
/// times were applied, otherwise it carries the conflicts and message from
/// the failed vetting so the caller can offer a forced retry.
pub fn extend_slot(
    slots: &mut Vec<Slot>,
    slot_id: &str,
    earlier_minutes: i64,
    later_minutes: i64,
    force: bool,
) -> Result<ResizeCheck> {
    let mut check = check_resize(slots, slot_id, earlier_minutes, later_minutes)?;
    if !check.valid && !(force && check.can_force) {
        return Ok(check);
    }

    if force && !check.conflicting_available.is_empty() {
        let doomed: Vec<&str> = check
            .conflicting_available
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        slots.retain(|s| !doomed.contains(&s.id.as_str()));
    }

    let target = slots
        .iter_mut()
        .find(|s| s.id == slot_id)
        .ok_or_else(|| SlotError::UnknownSlot(slot_id.to_string()))?;
    target.start -= Duration::minutes(earlier_minutes);
    target.end += Duration::minutes(later_minutes);

    check.valid = true;
    check.message = Some("Slot extended successfully".to_string());
    Ok(check)
}

/// Shrink a slot from either end. Always conflict-free, but the remainder
/// must keep at least [`MIN_SLOT_MINUTES`].
///
/// # Errors
///
/// Returns [`SlotError::UnknownSlot`] when `slot_id` is not on the schedule,
/// and [`SlotError::InvalidRange`] for negative reduction minutes or a
/// remainder shorter than the minimum.
pub fn reduce_slot(
    slots: &mut [Slot],
    slot_id: &str,
    from_start_minutes: i64,
    from_end_minutes: i64,
) -> Result<()> {
    if from_start_minutes < 0 || from_end_minutes < 0 {
        return Err(SlotError::InvalidRange(
            "reduction minutes cannot be negative".to_string(),
        ));
    }

    let target = slots
        .iter_mut()
        .find(|s| s.id == slot_id)
        .ok_or_else(|| SlotError::UnknownSlot(slot_id.to_string()))?;
    let new_start = target.start + Duration::minutes(from_start_minutes);
    let new_end = target.end - Duration::minutes(from_end_minutes);

    if (new_end - new_start).num_minutes() < MIN_SLOT_MINUTES {
        return Err(SlotError::InvalidRange(format!(
            "a slot cannot be reduced below {MIN_SLOT_MINUTES} minutes"
        )));
    }

    target.start = new_start;
    target.end = new_end;
    Ok(())
}
