//! Appointment-facing slot operations: the candidate list for a move,
//! the move itself, releasing a single slot, and ranged cleanup of
//! untaken slots.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::clock::TimeOfDay;
use crate::dayview::Slot;
use crate::error::{Result, SlotError};

/// What releasing a slot amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotRelease {
    /// The slot was booked. Its appointment detaches for cancellation and
    /// the slot stays blocked rather than reopening for booking.
    BookingCancelled { appointment_id: Option<String> },
    /// The slot was untaken and has been removed outright.
    Removed { day_now_empty: bool },
}

/// Available slots on `date` that an appointment could move into,
/// ascending by start time. On the current day, slots that have already
/// started are out.
pub fn reschedule_candidates(slots: &[Slot], date: NaiveDate, now: NaiveDateTime) -> Vec<Slot> {
    let mut candidates: Vec<Slot> = slots
        .iter()
        .filter(|s| s.available && s.date() == date)
        .filter(|s| date != now.date() || s.start > now)
        .cloned()
        .collect();
    candidates.sort_by_key(|s| s.start);
    candidates
}

/// Move the appointment on `old_id` onto `new_id`.
///
/// The old slot must be booked and the new one available; nothing changes
/// unless both hold. Afterwards the old slot is open again and the new slot
/// carries the appointment.
///
/// # Errors
///
/// [`SlotError::UnknownSlot`] when either id is missing,
/// [`SlotError::SlotNotBooked`] when the old slot has no booking, and
/// [`SlotError::SlotUnavailable`] when the new slot is taken. Moving a slot
/// onto itself fails the availability check like any other booked target.
pub fn reschedule(slots: &mut [Slot], old_id: &str, new_id: &str) -> Result<()> {
    let old_index = slot_index(slots, old_id)?;
    if slots[old_index].available {
        return Err(SlotError::SlotNotBooked(old_id.to_string()));
    }

    let new_index = slot_index(slots, new_id)?;
    if !slots[new_index].available {
        return Err(SlotError::SlotUnavailable(new_id.to_string()));
    }

    let appointment_id = slots[old_index].appointment_id.take();
    slots[old_index].available = true;
    slots[new_index].appointment_id = appointment_id;
    slots[new_index].available = false;
    Ok(())
}

/// Release one slot.
///
/// A booked slot gives up its appointment for cancellation but remains on
/// the schedule as blocked. An untaken slot is deleted, and the result says
/// whether its day is now empty so callers can drop the whole day.
pub fn release_slot(slots: &mut Vec<Slot>, slot_id: &str) -> Result<SlotRelease> {
    let index = slot_index(slots, slot_id)?;

    if !slots[index].available {
        let appointment_id = slots[index].appointment_id.take();
        return Ok(SlotRelease::BookingCancelled { appointment_id });
    }

    let date = slots[index].date();
    slots.remove(index);
    let day_now_empty = !slots.iter().any(|s| s.date() == date);
    Ok(SlotRelease::Removed { day_now_empty })
}

/// Delete every available slot whose date falls in `start_date..=end_date`
/// and whose time of day touches `start_time..=end_time` (closed on both
/// ends). Booked slots are never deleted. Returns how many slots went.
///
/// # Errors
///
/// [`SlotError::InvalidRange`] when the range starts in the past or either
/// bound leaves the current month.
pub fn delete_available_in_range(
    slots: &mut Vec<Slot>,
    start_date: NaiveDate,
    end_date: NaiveDate,
    start_time: TimeOfDay,
    end_time: TimeOfDay,
    today: NaiveDate,
) -> Result<usize> {
    if start_date < today {
        return Err(SlotError::InvalidRange(
            "cannot delete slots for past dates".to_string(),
        ));
    }

    let in_current_month =
        |date: NaiveDate| date.year() == today.year() && date.month() == today.month();
    if !in_current_month(start_date) || !in_current_month(end_date) {
        return Err(SlotError::InvalidRange(
            "slots can only be deleted within the current month".to_string(),
        ));
    }

    let before = slots.len();
    slots.retain(|slot| {
        if !slot.available || slot.date() < start_date || slot.date() > end_date {
            return true;
        }
        let slot_start = TimeOfDay::from_time(slot.start.time());
        let slot_end = TimeOfDay::from_time(slot.end.time());
        slot_end < start_time || slot_start > end_time
    });
    Ok(before - slots.len())
}

fn slot_index(slots: &[Slot], slot_id: &str) -> Result<usize> {
    slots
        .iter()
        .position(|s| s.id == slot_id)
        .ok_or_else(|| SlotError::UnknownSlot(slot_id.to_string()))
}
