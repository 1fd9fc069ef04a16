// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sun Phase Module
//!
//! This crate computes, for a location and a civil date, the sun's position
//! and clear-sky radiation, the instants of twilight, rise, set and transit,
//! and a gapless set of named phase ranges built from them. Polar day and
//! polar night are handled explicitly: a phase that does not occur on a day
//! is an unbounded [`Range`], never an error.
//!
//! # Core types
//!
//! - [`Location`]: validated latitude, longitude and optional altitude.
//! - [`Timestamp`]: `chrono::DateTime<FixedOffset>`; the offset defines the civil day.
//! - [`JulianDate`]: instant on the Julian Date axis used by the formulas.
//! - [`DailyEvents`]: raw crossing instants of one solar day.
//! - [`DailyRanges`]: the thirteen named phase [`Range`]s.
//! - [`SunPhase`]: the phase an instant falls in.
//! - [`SunInfo`]: all of the above plus host-supplied eclipse, zodiac and season data.
//!
//! # Entry points
//!
//! | Function | Result |
//! |----------|--------|
//! | [`compute_position`] | azimuth, elevation, shade length |
//! | [`compute_radiation`] | direct, diffuse and total irradiance |
//! | [`compute_daily_ranges`] | phase ranges around an instant |
//! | [`classify_phase`] | the phase containing an instant |
//! | [`next_recompute`] | when the ranges go stale |
//!
//! # Example
//!
//! ```
//! use chrono::{FixedOffset, TimeZone};
//! use sunphase::{classify_phase, compute_daily_ranges, Location, SunPhase};
//!
//! let amsterdam = Location::new(52.367607, 4.8978293, None).unwrap();
//! let now = FixedOffset::east_opt(3600).unwrap()
//!     .with_ymd_and_hms(2019, 2, 27, 7, 15, 0).unwrap();
//!
//! let ranges = compute_daily_ranges(now, &amsterdam).unwrap();
//! assert_eq!(classify_phase(&ranges, now), SunPhase::CivilDawn);
//! ```

mod error;
pub mod events;
pub mod geometry;
mod julian;
mod location;
pub mod phase;
mod position;
mod range;
pub mod ranges;
mod schedule;
pub mod sun;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use error::{Error, Result};
pub use events::DailyEvents;
pub use julian::{JulianDate, Timestamp};
pub use location::Location;
pub use phase::{SunPhase, SunPhaseName};
pub use position::{is_sun_up_all_day, Position, Radiation};
pub use range::Range;
pub use ranges::DailyRanges;
pub use schedule::{next_recompute, SETTLING_MARGIN_SECONDS};
pub use sun::{
    Collaborators, EclipseKind, Season, SeasonSource, SunEclipse, SunEclipseSource, SunInfo,
    ZodiacSign, ZodiacSource,
};

// ── Entry points ──────────────────────────────────────────────────────────

/// Sun position at `instant`.
#[inline]
pub fn compute_position(instant: Timestamp, location: &Location) -> Position {
    Position::compute(instant, location)
}

/// Clear-sky radiation for a sun at `elevation` degrees.
#[inline]
pub fn compute_radiation(instant: Timestamp, elevation: f64, altitude: Option<f64>) -> Radiation {
    Radiation::compute(instant, elevation, altitude)
}

/// Phase ranges for the civil day of `instant`.
#[inline]
pub fn compute_daily_ranges(instant: Timestamp, location: &Location) -> Result<DailyRanges> {
    DailyRanges::compute(instant, location)
}

/// The phase containing `now`.
#[inline]
pub fn classify_phase(ranges: &DailyRanges, now: Timestamp) -> SunPhase {
    phase::classify(ranges, now)
}
