// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Date instant and civil-day helpers.
//!
//! [`JulianDate`] stores a single [`Days`] quantity counted from the Julian
//! Period epoch. All solar formulas work on this axis; presentation goes
//! back through [`JulianDate::to_datetime`] using the offset carried by the
//! caller's [`Timestamp`].
//!
//! The conversion is a plain epoch shift of the Unix clock (no ΔT): the
//! formulas are low-order UT approximations and a minute of accuracy is all
//! the daily events ever need.

use chrono::{DateTime, FixedOffset, TimeDelta, TimeZone, Utc};
use qtty::Days;
use std::ops::{Add, Sub};

/// An absolute instant carrying the civil offset used for local-time
/// decomposition (civil midnight, day of year, "yesterday").
pub type Timestamp = DateTime<FixedOffset>;

const UNIX_EPOCH_JD: f64 = 2_440_587.5;
const MILLIS_PER_DAY: f64 = 86_400_000.0;
const MILLIS_PER_MINUTE: f64 = 60_000.0;

/// A point on the Julian Date axis.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianDate {
    quantity: Days,
}

impl JulianDate {
    /// J2000.0 epoch: 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// Create from a raw Julian Day number.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self { quantity: days }
    }

    /// The underlying Julian Day number.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Julian Date of an absolute instant. Millisecond resolution.
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        let millis = datetime.timestamp_millis() as f64;
        Self::new(UNIX_EPOCH_JD + millis / MILLIS_PER_DAY)
    }

    /// Convert back to a civil timestamp in `offset`, rounded to the
    /// nearest whole minute.
    ///
    /// Returns `None` for non-finite values and for instants outside
    /// chrono's representable range.
    pub fn to_datetime(&self, offset: &FixedOffset) -> Option<Timestamp> {
        let value = self.value();
        if !value.is_finite() {
            return None;
        }
        let minutes = ((value - UNIX_EPOCH_JD) * MILLIS_PER_DAY / MILLIS_PER_MINUTE).round();
        let millis = (minutes * MILLIS_PER_MINUTE) as i64;
        DateTime::<Utc>::from_timestamp_millis(millis).map(|utc| utc.with_timezone(offset))
    }
}

impl Add<Days> for JulianDate {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl Sub<Days> for JulianDate {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl Sub for JulianDate {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

// ── Civil-day helpers ─────────────────────────────────────────────────────

/// 00:00 of the civil day `instant` falls on, in its own offset.
pub fn civil_midnight(instant: &Timestamp) -> Option<Timestamp> {
    instant
        .date_naive()
        .and_hms_opt(0, 0, 0)?
        .and_local_timezone(*instant.offset())
        .single()
}

/// The same wall-clock time `days` civil days away (negative goes back).
pub fn shift_days(instant: &Timestamp, days: i64) -> Option<Timestamp> {
    instant.checked_add_signed(TimeDelta::try_days(days)?)
}

/// `instant` moved by a signed number of hours.
pub fn shift_hours(instant: &Timestamp, hours: i64) -> Option<Timestamp> {
    instant.checked_add_signed(TimeDelta::try_hours(hours)?)
}
