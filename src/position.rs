// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Instantaneous sun position and clear-sky radiation.

use crate::error::{Error, Result};
use crate::geometry::{self, DEG2RAD, SUN_ANGLE};
use crate::julian::{civil_midnight, JulianDate, Timestamp};
use crate::location::Location;
use chrono::{Datelike, NaiveDate, TimeDelta};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sun position as seen from a [`Location`], in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    azimuth: f64,
    elevation: f64,
    shade_length: f64,
}

impl Position {
    /// Position of the sun at `instant`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{FixedOffset, TimeZone};
    /// use sunphase::{Location, Position};
    ///
    /// let amsterdam = Location::new(52.367607, 4.8978293, None).unwrap();
    /// let noon = FixedOffset::east_opt(3600).unwrap()
    ///     .with_ymd_and_hms(2019, 2, 27, 12, 53, 0).unwrap();
    ///
    /// let position = Position::compute(noon, &amsterdam);
    /// assert!((position.azimuth() - 180.0).abs() < 3.0);
    /// assert!(position.elevation() > 28.0 && position.elevation() < 30.0);
    /// ```
    pub fn compute(instant: Timestamp, location: &Location) -> Self {
        let lw = location.lw();
        let phi = location.phi();
        let j = JulianDate::from_datetime(&instant);

        let m = geometry::solar_mean_anomaly(j);
        let c = geometry::equation_of_center(m);
        let lsun = geometry::ecliptic_longitude(m, c);
        let d = geometry::declination(lsun);
        let a = geometry::right_ascension(lsun);
        let th = geometry::sidereal_time(j, lw);

        let azimuth = geometry::azimuth(th, a, phi, d) / DEG2RAD;
        let elevation = geometry::elevation(th, a, phi, d) / DEG2RAD;

        Self {
            azimuth: azimuth + 180.0,
            elevation,
            shade_length: shade_length(elevation),
        }
    }

    /// Degrees clockwise from north, in `[0, 360)`.
    #[inline]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Degrees above the horizon.
    #[inline]
    pub const fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Shadow length of a unit-height object. Only meaningful while the sun
    /// is above the horizon, see [`has_shade`](Self::has_shade).
    #[inline]
    pub const fn shade_length(&self) -> f64 {
        self.shade_length
    }

    #[inline]
    pub fn has_shade(&self) -> bool {
        self.elevation > 0.0
    }
}

fn shade_length(elevation: f64) -> f64 {
    1.0 / (elevation * DEG2RAD).tan()
}

// ── Radiation ─────────────────────────────────────────────────────────────

const SOLAR_CONSTANT: f64 = 1367.0;
const ATMOSPHERIC_TRANSPARENCY: f64 = 0.6;
/// Below this elevation the air-mass model is not used.
const MIN_RADIATION_ELEVATION: f64 = 3.0;

/// Clear-sky irradiance in W/m².
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Radiation {
    direct: f64,
    diffuse: f64,
    total: f64,
}

impl Radiation {
    pub const NONE: Self = Self {
        direct: 0.0,
        diffuse: 0.0,
        total: 0.0,
    };

    /// Radiation for a sun at `elevation` degrees on the civil day of
    /// `instant`, optionally corrected for `altitude` meters above sea level.
    ///
    /// All components are zero when `elevation <= 3°`.
    pub fn compute(instant: Timestamp, elevation: f64, altitude: Option<f64>) -> Self {
        if elevation <= MIN_RADIATION_ELEVATION {
            return Self::NONE;
        }

        let day_of_year = instant.ordinal() as i32;
        let days_in_year = if NaiveDate::from_yo_opt(instant.year(), 366).is_some() {
            366
        } else {
            365
        };
        let eccentricity = f64::from(360 * day_of_year / days_in_year) * DEG2RAD;
        let outer = SOLAR_CONSTANT * (0.034 * eccentricity.cos() + 1.0);

        let sin_alpha = (elevation * DEG2RAD).sin();
        let altitude_ratio = altitude.map_or(1.0, |alt| {
            1.0 / (1.0 - (6.5 / 288.0) * (alt / 1000.0)).powf(5.256)
        });
        let air_mass = ((1229.0 + (614.0 * sin_alpha).powi(2)).sqrt() - 614.0 * sin_alpha)
            * altitude_ratio;
        let transmitted = ATMOSPHERIC_TRANSPARENCY.powf(air_mass);

        let direct = outer * transmitted * sin_alpha;
        let diffuse = outer * (0.271 - 0.294 * transmitted) * sin_alpha;

        Self {
            direct,
            diffuse,
            total: direct + diffuse,
        }
    }

    #[inline]
    pub const fn direct(&self) -> f64 {
        self.direct
    }

    #[inline]
    pub const fn diffuse(&self) -> f64 {
        self.diffuse
    }

    #[inline]
    pub const fn total(&self) -> f64 {
        self.total
    }
}

// ── Whole-day checks ──────────────────────────────────────────────────────

const SAMPLE_INTERVAL_MINUTES: i64 = 20;
const MINUTES_PER_DAY: i64 = 24 * 60;

/// Whether the sun disc stays above the rise/set altitude for the whole
/// civil day of `date`, sampled every 20 minutes.
pub fn is_sun_up_all_day(date: Timestamp, location: &Location) -> Result<bool> {
    let midnight = civil_midnight(&date).ok_or(Error::TimeOutOfRange)?;
    for minutes in (0..=MINUTES_PER_DAY).step_by(SAMPLE_INTERVAL_MINUTES as usize) {
        let instant = midnight
            .checked_add_signed(TimeDelta::minutes(minutes))
            .ok_or(Error::TimeOutOfRange)?;
        if Position::compute(instant, location).elevation() < SUN_ANGLE {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::{FixedOffset, TimeZone};

    fn at(offset_hours: i32, y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Timestamp {
        FixedOffset::east_opt(offset_hours * 3600)
            .unwrap()
            .with_ymd_and_hms(y, mo, d, h, mi, 0)
            .unwrap()
    }

    fn amsterdam() -> Location {
        Location::new(52.367607, 4.8978293, None).unwrap()
    }

    #[test]
    fn test_position_at_solar_noon_faces_south() {
        let position = Position::compute(at(1, 2019, 2, 27, 12, 53), &amsterdam());
        assert_abs_diff_eq!(position.azimuth(), 180.0, epsilon = 3.0);
        // 90 - 52.37 - 8.6 (declination at the end of February)
        assert_abs_diff_eq!(position.elevation(), 29.0, epsilon = 1.0);
        assert!(position.has_shade());
        assert_abs_diff_eq!(position.shade_length(), 1.0 / (29.0f64.to_radians()).tan(), epsilon = 0.1);
    }

    #[test]
    fn test_position_at_night() {
        let position = Position::compute(at(1, 2019, 2, 27, 0, 53), &amsterdam());
        assert!(position.elevation() < -25.0);
        assert!(!position.has_shade());
        assert!(position.shade_length() < 0.0);
    }

    #[test]
    fn test_azimuth_is_normalized() {
        for hour in 0..24 {
            let position = Position::compute(at(1, 2019, 6, 21, hour, 0), &amsterdam());
            assert!((0.0..360.0).contains(&position.azimuth()), "{hour}: {}", position.azimuth());
        }
    }

    #[test]
    fn test_radiation_zero_near_horizon() {
        let instant = at(1, 2019, 6, 21, 12, 0);
        assert_eq!(Radiation::compute(instant, 3.0, None), Radiation::NONE);
        assert_eq!(Radiation::compute(instant, -20.0, Some(500.0)), Radiation::NONE);
    }

    #[test]
    fn test_radiation_components() {
        let radiation = Radiation::compute(at(1, 2019, 6, 21, 12, 0), 60.0, None);
        assert!(radiation.direct() > 0.0);
        assert!(radiation.diffuse() > 0.0);
        assert_abs_diff_eq!(radiation.total(), radiation.direct() + radiation.diffuse(), epsilon = 1e-9);
        assert!(radiation.total() < SOLAR_CONSTANT * 1.034);
    }

    #[test]
    fn test_altitude_scales_air_mass() {
        let instant = at(1, 2019, 6, 21, 12, 0);
        let sea = Radiation::compute(instant, 45.0, None);
        let zero = Radiation::compute(instant, 45.0, Some(0.0));
        let mountain = Radiation::compute(instant, 45.0, Some(3000.0));
        assert_abs_diff_eq!(zero.total(), sea.total(), epsilon = 1e-9);
        assert!(mountain.direct() < sea.direct());
    }

    #[test]
    fn test_radiation_seasonal_eccentricity() {
        // Earth is closest to the sun in early January.
        let january = Radiation::compute(at(0, 2019, 1, 3, 12, 0), 30.0, None);
        let july = Radiation::compute(at(0, 2019, 7, 4, 12, 0), 30.0, None);
        assert!(january.total() > july.total());
    }

    #[test]
    fn test_sun_up_all_day() {
        let murmansk = Location::new(68.9368528, 33.0454321, None).unwrap();
        assert!(is_sun_up_all_day(at(3, 2019, 6, 21, 10, 0), &murmansk).unwrap());
        assert!(!is_sun_up_all_day(at(1, 2019, 6, 21, 10, 0), &amsterdam()).unwrap());
    }
}
