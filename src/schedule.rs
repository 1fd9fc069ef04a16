// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! When to recompute.

use crate::error::{Error, Result};
use crate::julian::{civil_midnight, shift_days, shift_hours, Timestamp};
use chrono::TimeDelta;

/// Seconds added after the chosen boundary so the recompute lands on the
/// new side of it.
pub const SETTLING_MARGIN_SECONDS: i64 = 30;

/// Next instant at which daily ranges should be recomputed.
///
/// The earliest of the next civil midnight, `noon − 12 h`, `noon + 12 h`
/// and `morning_night_end` that lies strictly after `now`, plus
/// [`SETTLING_MARGIN_SECONDS`].
///
/// # Errors
///
/// [`Error::MissingNoon`] when `noon` is `None`.
///
/// # Examples
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use sunphase::next_recompute;
///
/// let tz = FixedOffset::east_opt(3600).unwrap();
/// let now = tz.with_ymd_and_hms(2019, 7, 17, 1, 23, 0).unwrap();
/// let noon = tz.with_ymd_and_hms(2019, 7, 17, 12, 33, 0).unwrap();
/// let night_end = tz.with_ymd_and_hms(2019, 7, 17, 3, 54, 0).unwrap();
///
/// let next = next_recompute(now, Some(noon), Some(night_end)).unwrap();
/// assert_eq!(next, tz.with_ymd_and_hms(2019, 7, 17, 3, 54, 30).unwrap());
/// ```
pub fn next_recompute(
    now: Timestamp,
    noon: Option<Timestamp>,
    morning_night_end: Option<Timestamp>,
) -> Result<Timestamp> {
    let noon = noon.ok_or(Error::MissingNoon)?;

    let next_midnight = civil_midnight(&now)
        .and_then(|midnight| shift_days(&midnight, 1))
        .ok_or(Error::TimeOutOfRange)?;
    let candidates = [
        Some(next_midnight),
        shift_hours(&noon, -12),
        shift_hours(&noon, 12),
        morning_night_end,
    ];

    candidates
        .into_iter()
        .flatten()
        .filter(|candidate| *candidate > now)
        .min()
        .unwrap_or(next_midnight)
        .checked_add_signed(TimeDelta::seconds(SETTLING_MARGIN_SECONDS))
        .ok_or(Error::TimeOutOfRange)
}
