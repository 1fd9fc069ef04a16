// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Daily phase ranges.
//!
//! [`DailyRanges::compute`] turns the [`DailyEvents`] of a day into thirteen
//! named [`Range`]s that tile the solar day from one true midnight to the
//! next:
//!
//! ```text
//! true_midnight                      transit                     next_true_midnight
//!     | morning | astro | nautic | civil | rise | daylight | set | civil | nautic | astro | evening |
//!     |  night  | dawn  |  dawn  | dawn  |      |  (noon)  |     | dusk  |  dusk  | dusk  |  night  |
//! ```
//!
//! A band whose outer crossing does not happen that day stretches to the
//! nearest true midnight, one whose inner crossing does not happen stops at
//! transit, and a band with neither crossing is unbounded.
//!
//! Between civil midnight and true midnight the sun is still in the previous
//! solar day, so the previous day's dusk bands replace today's where they
//! reach into that gap. Under polar day the daylight range is searched for
//! up to 190 days in each direction.

use crate::error::{Error, Result};
use crate::events::DailyEvents;
use crate::julian::{civil_midnight, shift_days, Timestamp};
use crate::location::Location;
use crate::phase::SunPhaseName;
use crate::position::Position;
use crate::range::Range;
use chrono::TimeDelta;
use log::{debug, info};

/// Maximum number of days the total-daylight search walks in each direction.
pub const TOTAL_DAYLIGHT_SEARCH_DAYS: i64 = 190;

/// Phase ranges around a query instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyRanges {
    morning_night: Range,
    astro_dawn: Range,
    nautic_dawn: Range,
    civil_dawn: Range,
    rise: Range,
    daylight: Range,
    noon: Range,
    set: Range,
    civil_dusk: Range,
    nautic_dusk: Range,
    astro_dusk: Range,
    evening_night: Range,
    night: Range,
    true_midnight: Timestamp,
    next_true_midnight: Timestamp,
}

// ── Single-day bands ──────────────────────────────────────────────────────

/// The twelve bands of one day, before any cross-day reconciliation.
#[derive(Debug, Clone, Copy)]
struct DayBands {
    morning_night: Range,
    astro_dawn: Range,
    nautic_dawn: Range,
    civil_dawn: Range,
    rise: Range,
    daylight: Range,
    noon: Range,
    set: Range,
    civil_dusk: Range,
    nautic_dusk: Range,
    astro_dusk: Range,
    evening_night: Range,
}

impl DayBands {
    fn from_events(events: &DailyEvents) -> Result<Self> {
        let transit = events.transit();
        let true_midnight = events.true_midnight();
        let next_true_midnight = events.next_true_midnight();

        // `outer` is the crossing further from transit.
        let dawn = |outer: Option<Timestamp>, inner: Option<Timestamp>| match (outer, inner) {
            (Some(outer), Some(inner)) => Range::new(outer, inner),
            (None, Some(inner)) => Range::new(true_midnight, inner),
            (Some(outer), None) => Range::new(outer, transit),
            (None, None) => Range::unbounded(),
        };
        let dusk = |inner: Option<Timestamp>, outer: Option<Timestamp>| match (inner, outer) {
            (Some(inner), Some(outer)) => Range::new(inner, outer),
            (Some(inner), None) => Range::new(inner, next_true_midnight),
            (None, Some(outer)) => Range::new(transit, outer),
            (None, None) => Range::unbounded(),
        };

        let noon_end = transit
            .checked_add_signed(TimeDelta::minutes(1))
            .ok_or(Error::TimeOutOfRange)?;

        Ok(Self {
            morning_night: Range::from_bounds(Some(true_midnight), events.astro_dawn_start()),
            astro_dawn: dawn(events.astro_dawn_start(), events.nautic_dawn_start()),
            nautic_dawn: dawn(events.nautic_dawn_start(), events.civil_dawn_start()),
            civil_dawn: dawn(events.civil_dawn_start(), events.rise_start()),
            rise: dawn(events.rise_start(), events.rise_end()),
            daylight: Range::from_bounds(events.rise_end(), events.set_start()),
            noon: Range::new(transit, noon_end),
            set: dusk(events.set_start(), events.set_end()),
            civil_dusk: dusk(events.set_end(), events.nautic_dusk_start()),
            nautic_dusk: dusk(events.nautic_dusk_start(), events.astro_dusk_start()),
            astro_dusk: dusk(events.astro_dusk_start(), events.night_start()),
            evening_night: Range::from_bounds(events.night_start(), Some(next_true_midnight)),
        })
    }
}

// ── Cross-day reconciliation ──────────────────────────────────────────────

impl DailyRanges {
    /// Ranges for the civil day of `instant`, reconciled against the
    /// previous solar day when `instant` falls before today's true midnight.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{FixedOffset, TimeZone};
    /// use sunphase::{DailyRanges, Location};
    ///
    /// let amsterdam = Location::new(52.367607, 4.8978293, None).unwrap();
    /// let instant = FixedOffset::east_opt(3600).unwrap()
    ///     .with_ymd_and_hms(2019, 2, 27, 0, 59, 0).unwrap();
    ///
    /// let ranges = DailyRanges::compute(instant, &amsterdam).unwrap();
    /// assert!(ranges.rise().is_bounded());
    /// assert_eq!(ranges.daylight().end(), ranges.set().start());
    /// ```
    pub fn compute(instant: Timestamp, location: &Location) -> Result<Self> {
        let events = DailyEvents::compute(instant, location)?;
        let today = DayBands::from_events(&events)?;

        let mut ranges = Self {
            morning_night: today.morning_night,
            astro_dawn: today.astro_dawn,
            nautic_dawn: today.nautic_dawn,
            civil_dawn: today.civil_dawn,
            rise: today.rise,
            daylight: today.daylight,
            noon: today.noon,
            set: today.set,
            civil_dusk: today.civil_dusk,
            nautic_dusk: today.nautic_dusk,
            astro_dusk: today.astro_dusk,
            evening_night: today.evening_night,
            night: Range::unbounded(),
            true_midnight: events.true_midnight(),
            next_true_midnight: events.next_true_midnight(),
        };

        let midnight = civil_midnight(&instant).ok_or(Error::TimeOutOfRange)?;
        let before_true_midnight = Range::new(midnight, events.true_midnight());

        if before_true_midnight.matches(instant) {
            let yesterday_date = shift_days(&instant, -1).ok_or(Error::TimeOutOfRange)?;
            let yesterday = DayBands::from_events(&DailyEvents::compute(yesterday_date, location)?)?;

            let carried = [
                (&mut ranges.evening_night, yesterday.evening_night, "evening night"),
                (&mut ranges.astro_dusk, yesterday.astro_dusk, "astro dusk"),
                (&mut ranges.nautic_dusk, yesterday.nautic_dusk, "nautic dusk"),
                (&mut ranges.civil_dusk, yesterday.civil_dusk, "civil dusk"),
            ];
            for (slot, previous, name) in carried {
                if previous.intersects(&before_true_midnight) {
                    debug!("{instant}: using previous day's {name} {previous}");
                    *slot = previous;
                }
            }

            ranges.night =
                Range::from_bounds(yesterday.evening_night.start(), today.morning_night.end());
        } else if today.morning_night.matches(instant) {
            // Night start mirrored from the morning-night duration.
            if let Some((_, end)) = today.morning_night.bounds() {
                let start = events
                    .true_midnight()
                    .checked_sub_signed(end - events.true_midnight())
                    .ok_or(Error::TimeOutOfRange)?;
                ranges.night = Range::new(start, end);
            }
        } else if let Some((start, _)) = today.evening_night.bounds() {
            // Night end mirrored from the evening-night duration.
            let end = events
                .next_true_midnight()
                .checked_add_signed(events.next_true_midnight() - start)
                .ok_or(Error::TimeOutOfRange)?;
            ranges.night = Range::new(start, end);
        }

        if let Some(daylight) = total_daylight(&events, &today, location)? {
            ranges.daylight = daylight;
        }

        Ok(ranges)
    }

    pub fn morning_night(&self) -> Range {
        self.morning_night
    }

    pub fn astro_dawn(&self) -> Range {
        self.astro_dawn
    }

    pub fn nautic_dawn(&self) -> Range {
        self.nautic_dawn
    }

    pub fn civil_dawn(&self) -> Range {
        self.civil_dawn
    }

    pub fn rise(&self) -> Range {
        self.rise
    }

    pub fn daylight(&self) -> Range {
        self.daylight
    }

    /// One-minute window starting at transit.
    pub fn noon(&self) -> Range {
        self.noon
    }

    pub fn set(&self) -> Range {
        self.set
    }

    pub fn civil_dusk(&self) -> Range {
        self.civil_dusk
    }

    pub fn nautic_dusk(&self) -> Range {
        self.nautic_dusk
    }

    pub fn astro_dusk(&self) -> Range {
        self.astro_dusk
    }

    pub fn evening_night(&self) -> Range {
        self.evening_night
    }

    /// The whole dark period containing or nearest to the query instant.
    pub fn night(&self) -> Range {
        self.night
    }

    pub fn true_midnight(&self) -> Timestamp {
        self.true_midnight
    }

    pub fn next_true_midnight(&self) -> Timestamp {
        self.next_true_midnight
    }

    /// The range stored under `name`.
    pub fn get(&self, name: SunPhaseName) -> Range {
        match name {
            SunPhaseName::MorningNight => self.morning_night,
            SunPhaseName::AstroDawn => self.astro_dawn,
            SunPhaseName::NauticDawn => self.nautic_dawn,
            SunPhaseName::CivilDawn => self.civil_dawn,
            SunPhaseName::SunRise => self.rise,
            SunPhaseName::Daylight => self.daylight,
            SunPhaseName::Noon => self.noon,
            SunPhaseName::SunSet => self.set,
            SunPhaseName::CivilDusk => self.civil_dusk,
            SunPhaseName::NauticDusk => self.nautic_dusk,
            SunPhaseName::AstroDusk => self.astro_dusk,
            SunPhaseName::EveningNight => self.evening_night,
            SunPhaseName::Night => self.night,
        }
    }

    /// Every range paired with its name, in [`SunPhaseName::ALL`] order.
    pub fn all_ranges(&self) -> [(SunPhaseName, Range); 13] {
        SunPhaseName::ALL.map(|name| (name, self.get(name)))
    }
}

// ── Total daylight ────────────────────────────────────────────────────────

/// Daylight range under polar day, or `None` when the day has a rise or set
/// or the sun is below the horizon at transit.
fn total_daylight(events: &DailyEvents, today: &DayBands, location: &Location) -> Result<Option<Range>> {
    if today.rise.is_bounded() || today.set.is_bounded() {
        return Ok(None);
    }
    if Position::compute(events.transit(), location).elevation() <= 0.0 {
        return Ok(None);
    }

    let start = search_boundary(events.transit(), location, -1, DailyEvents::rise_end)?;
    let end = search_boundary(events.transit(), location, 1, DailyEvents::set_start)?;
    if start.is_none() || end.is_none() {
        info!(
            "no daylight boundary within {TOTAL_DAYLIGHT_SEARCH_DAYS} days of {}, daylight left unbounded",
            events.transit()
        );
    }
    Ok(Some(Range::from_bounds(start, end)))
}

/// First day, walking `step` days at a time from `from`, on which
/// `boundary` exists.
fn search_boundary(
    from: Timestamp,
    location: &Location,
    step: i64,
    boundary: fn(&DailyEvents) -> Option<Timestamp>,
) -> Result<Option<Timestamp>> {
    for q in 1..=TOTAL_DAYLIGHT_SEARCH_DAYS {
        let date = shift_days(&from, step * q).ok_or(Error::TimeOutOfRange)?;
        if let Some(found) = boundary(&DailyEvents::compute(date, location)?) {
            debug!("daylight boundary {found} found {q} days from {from}");
            return Ok(Some(found));
        }
    }
    Ok(None)
}
