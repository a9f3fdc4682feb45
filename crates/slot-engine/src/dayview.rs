//! Calendar views over a month of slots: three-day paging, day selection,
//! and per-day partitioning into available and booked lists.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};

/// Days shown per calendar page.
pub const PAGE_DAYS: u32 = 3;

/// A concrete slot on the schedule. Booked slots carry the appointment
/// they were booked under; available slots carry none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub id: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub available: bool,
    pub appointment_id: Option<String>,
}

impl Slot {
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }
}

/// A day's slots split into the two lists the schedule view renders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DayPartition {
    pub available: Vec<Slot>,
    pub booked: Vec<Slot>,
}

/// Slot counts for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayStats {
    pub total: usize,
    pub available: usize,
    pub booked: usize,
}

/// The last day of `date`'s month.
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.pred_opt())
        .unwrap_or(date)
}

/// The page whose window contains `selected`.
pub fn initial_page(selected: NaiveDate) -> u32 {
    (selected.day() - 1) / PAGE_DAYS
}

/// The days shown on `page` of the month containing `anchor`.
///
/// Pages are consecutive three-day windows counted from the first of the
/// month. The final page of a month may spill into the next one; callers
/// filter with [`can_page_forward`] before offering it.
pub fn visible_days(anchor: NaiveDate, page: u32) -> Vec<NaiveDate> {
    let first = anchor.with_day(1).unwrap_or(anchor);
    (0..PAGE_DAYS)
        .filter_map(|offset| {
            first.checked_add_days(Days::new(u64::from(page * PAGE_DAYS + offset)))
        })
        .collect()
}

pub fn can_page_back(page: u32) -> bool {
    page > 0
}

/// Whether a later page still shows a day of this month.
pub fn can_page_forward(anchor: NaiveDate, page: u32) -> bool {
    let first = anchor.with_day(1).unwrap_or(anchor);
    first
        .checked_add_days(Days::new(u64::from(page * PAGE_DAYS + PAGE_DAYS - 1)))
        .is_some_and(|last_visible| last_visible < last_day_of_month(anchor))
}

/// The visible days that belong to `anchor`'s month, which is what the
/// daily schedule is fetched for. Spill-over days are dropped.
pub fn month_view_days(anchor: NaiveDate, page: u32) -> Vec<NaiveDate> {
    visible_days(anchor, page)
        .into_iter()
        .filter(|d| d.year() == anchor.year() && d.month() == anchor.month())
        .collect()
}

/// The day the view selects after paging: today when visible, otherwise
/// the latest visible day. `None` only for an empty page.
pub fn auto_selected_day(visible: &[NaiveDate], today: NaiveDate) -> Option<NaiveDate> {
    if visible.contains(&today) {
        return Some(today);
    }
    visible.iter().max().copied()
}

/// All slots on `date`, ascending by start time.
pub fn slots_on(slots: &[Slot], date: NaiveDate) -> Vec<Slot> {
    let mut day: Vec<Slot> = slots.iter().filter(|s| s.date() == date).cloned().collect();
    day.sort_by_key(|s| s.start);
    day
}

/// Split `date`'s slots into available and booked lists, each ascending.
pub fn partition_slots(slots: &[Slot], date: NaiveDate) -> DayPartition {
    let mut partition = DayPartition::default();
    for slot in slots_on(slots, date) {
        if slot.available {
            partition.available.push(slot);
        } else {
            partition.booked.push(slot);
        }
    }
    partition
}

/// Counts backing the per-day summary line.
pub fn day_stats(slots: &[Slot], date: NaiveDate) -> DayStats {
    let mut stats = DayStats::default();
    for slot in slots.iter().filter(|s| s.date() == date) {
        stats.total += 1;
        if slot.available {
            stats.available += 1;
        } else {
            stats.booked += 1;
        }
    }
    stats
}
