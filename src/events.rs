// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Raw daily event instants.
//!
//! For one civil day, [`DailyEvents`] holds the transit and every altitude
//! crossing around it. Crossings the sun never makes that day are `None`.
//! Morning crossings are mirrored from the afternoon ones around transit.

use crate::error::{Error, Result};
use crate::geometry::{self, H_ASTRO, H_DARKNESS, H_NAUTIC, H_SUN_DISC, SUN_DIAMETER};
use crate::julian::{civil_midnight, shift_hours, JulianDate, Timestamp};
use crate::location::Location;
use chrono::FixedOffset;
use qtty::Days;

/// Transit and altitude crossings of one solar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyEvents {
    transit: Timestamp,
    true_midnight: Timestamp,
    next_true_midnight: Timestamp,
    rise_start: Option<Timestamp>,
    rise_end: Option<Timestamp>,
    set_start: Option<Timestamp>,
    set_end: Option<Timestamp>,
    astro_dawn_start: Option<Timestamp>,
    nautic_dawn_start: Option<Timestamp>,
    civil_dawn_start: Option<Timestamp>,
    nautic_dusk_start: Option<Timestamp>,
    astro_dusk_start: Option<Timestamp>,
    night_start: Option<Timestamp>,
}

impl DailyEvents {
    /// Events of the civil day `date` falls on. The time of day is ignored,
    /// the offset is kept for every returned instant.
    pub fn compute(date: Timestamp, location: &Location) -> Result<Self> {
        let offset = *date.offset();
        let midnight = civil_midnight(&date).ok_or(Error::TimeOutOfRange)?;
        let lw = location.lw();
        let phi = location.phi();

        let j = JulianDate::from_datetime(&midnight) + Days::new(0.5);
        let n = geometry::julian_cycle(j, lw);
        let js = geometry::approx_solar_transit(0.0, lw, n);
        let m = geometry::solar_mean_anomaly(js);
        let c = geometry::equation_of_center(m);
        let lsun = geometry::ecliptic_longitude(m, c);
        let d = geometry::declination(lsun);
        let jtransit = geometry::solar_transit(js, m, lsun);

        let crossing = |h: f64| {
            geometry::sunset_julian_date(geometry::hour_angle(h, phi, d), m, lsun, lw, n)
        };
        let mirrored = |jset: Option<JulianDate>| geometry::sunrise_julian_date(jtransit, jset);

        let jset = crossing(H_SUN_DISC);
        let jsetstart = crossing(H_SUN_DISC + SUN_DIAMETER);
        let jnau = crossing(H_NAUTIC);
        let jastro = crossing(H_ASTRO);
        let jdark = crossing(H_DARKNESS);

        let transit = civil(jtransit, &offset)?;
        Ok(Self {
            transit,
            true_midnight: shift_hours(&transit, -12).ok_or(Error::TimeOutOfRange)?,
            next_true_midnight: shift_hours(&transit, 12).ok_or(Error::TimeOutOfRange)?,
            rise_start: maybe_civil(mirrored(jset), &offset)?,
            rise_end: maybe_civil(mirrored(jsetstart), &offset)?,
            set_start: maybe_civil(jsetstart, &offset)?,
            set_end: maybe_civil(jset, &offset)?,
            astro_dawn_start: maybe_civil(mirrored(jdark), &offset)?,
            nautic_dawn_start: maybe_civil(mirrored(jastro), &offset)?,
            civil_dawn_start: maybe_civil(mirrored(jnau), &offset)?,
            nautic_dusk_start: maybe_civil(jnau, &offset)?,
            astro_dusk_start: maybe_civil(jastro, &offset)?,
            night_start: maybe_civil(jdark, &offset)?,
        })
    }

    /// Solar noon.
    pub fn transit(&self) -> Timestamp {
        self.transit
    }

    /// Anti-transit before [`transit`](Self::transit), twelve hours earlier.
    pub fn true_midnight(&self) -> Timestamp {
        self.true_midnight
    }

    /// Anti-transit after [`transit`](Self::transit), twelve hours later.
    pub fn next_true_midnight(&self) -> Timestamp {
        self.next_true_midnight
    }

    /// Upper limb crosses the horizon.
    pub fn rise_start(&self) -> Option<Timestamp> {
        self.rise_start
    }

    /// Whole disc above the horizon.
    pub fn rise_end(&self) -> Option<Timestamp> {
        self.rise_end
    }

    pub fn set_start(&self) -> Option<Timestamp> {
        self.set_start
    }

    pub fn set_end(&self) -> Option<Timestamp> {
        self.set_end
    }

    /// Morning −18° crossing.
    pub fn astro_dawn_start(&self) -> Option<Timestamp> {
        self.astro_dawn_start
    }

    /// Morning −12° crossing.
    pub fn nautic_dawn_start(&self) -> Option<Timestamp> {
        self.nautic_dawn_start
    }

    /// Morning −6° crossing.
    pub fn civil_dawn_start(&self) -> Option<Timestamp> {
        self.civil_dawn_start
    }

    /// Evening −6° crossing.
    pub fn nautic_dusk_start(&self) -> Option<Timestamp> {
        self.nautic_dusk_start
    }

    /// Evening −12° crossing.
    pub fn astro_dusk_start(&self) -> Option<Timestamp> {
        self.astro_dusk_start
    }

    /// Evening −18° crossing.
    pub fn night_start(&self) -> Option<Timestamp> {
        self.night_start
    }
}

fn civil(jd: JulianDate, offset: &FixedOffset) -> Result<Timestamp> {
    jd.to_datetime(offset).ok_or(Error::TimeOutOfRange)
}

fn maybe_civil(jd: Option<JulianDate>, offset: &FixedOffset) -> Result<Option<Timestamp>> {
    jd.map(|jd| civil(jd, offset)).transpose()
}
