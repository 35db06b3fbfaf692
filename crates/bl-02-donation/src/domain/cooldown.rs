//! Donor cooldown: a computed predicate over `(donor, now)`.
//!
//! The donor record stores only the cooldown end timestamp. Nothing clears
//! it; the predicate simply stops holding once `now` passes the end, so the
//! state can never go stale.

use chrono::{DateTime, Months, Utc};

use shared_types::{DonorUser, Timestamp};

/// Fixed cooldown length after a donation, in calendar months.
pub const COOLDOWN_MONTHS: u32 = 3;

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// The cooldown end for a donation made at `now`.
///
/// Calendar arithmetic, not a fixed number of days: a donation on Nov 30
/// cools down until Feb 28/29.
pub fn cooldown_end_after(now: Timestamp) -> Timestamp {
    now.checked_add_months(Months::new(COOLDOWN_MONTHS))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Returns true while the donor's cooldown window is still open.
pub fn is_on_cooldown(donor: &DonorUser, now: Timestamp) -> bool {
    donor.cooldown_end_date.is_some_and(|end| now < end)
}

/// Whole days until the cooldown expires, rounded up.
///
/// Ceiling division: any fraction of a day still remaining counts as one
/// full day, so the result is always > 0 while the cooldown is active and
/// exactly 0 once it has expired.
pub fn days_remaining(donor: &DonorUser, now: Timestamp) -> u32 {
    let Some(end) = donor.cooldown_end_date else {
        return 0;
    };
    if now >= end {
        return 0;
    }

    let remaining_ms = (end - now).num_milliseconds();
    let days = (remaining_ms + MS_PER_DAY - 1) / MS_PER_DAY;
    // Sub-millisecond remainders still count as an active day.
    days.clamp(1, i64::from(u32::MAX)) as u32
}
