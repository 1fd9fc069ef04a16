// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Low-order solar geometry.
//!
//! Closed-form approximations over the Julian Date axis, accurate to a few
//! minutes. Angles are radians unless a name says otherwise. `lw` is the
//! west longitude in radians (`-longitude · π/180`) and `phi` the latitude in
//! radians.
//!
//! An altitude the sun never reaches on a given day has no hour angle; that
//! is reported as `None` and flows through the crossing helpers unchanged.

use crate::julian::JulianDate;
use qtty::Days;
use std::f64::consts::{PI, TAU};

pub const DEG2RAD: f64 = PI / 180.0;

// ── Altitude thresholds ───────────────────────────────────────────────────

/// Sun-disc altitude used for rise and set, in degrees.
pub const SUN_ANGLE: f64 = -0.83;
/// Apparent diameter of the sun disc, radians.
pub const SUN_DIAMETER: f64 = 0.53 * DEG2RAD;

/// Rise/set altitude, radians.
pub const H_SUN_DISC: f64 = SUN_ANGLE * DEG2RAD;
/// End of civil twilight, radians.
pub const H_NAUTIC: f64 = -6.0 * DEG2RAD;
/// End of nautical twilight, radians.
pub const H_ASTRO: f64 = -12.0 * DEG2RAD;
/// End of astronomical twilight, radians.
pub const H_DARKNESS: f64 = -18.0 * DEG2RAD;

// ── Orbital constants ─────────────────────────────────────────────────────

const J0: f64 = 0.0009;
const J1: f64 = 0.0053;
const J2: f64 = -0.0069;
const M0: f64 = 357.5291 * DEG2RAD;
const M1: f64 = 0.985_600_28 * DEG2RAD;
const C1: f64 = 1.9148 * DEG2RAD;
const C2: f64 = 0.0200 * DEG2RAD;
const C3: f64 = 0.0003 * DEG2RAD;
const P: f64 = 102.9372 * DEG2RAD;
const E: f64 = 23.45 * DEG2RAD;
const TH0: f64 = 280.1600 * DEG2RAD;
const TH1: f64 = 360.985_623_5 * DEG2RAD;

#[inline]
fn since_j2000(j: JulianDate) -> f64 {
    (j - JulianDate::J2000).value()
}

/// Whole number of solar days between J2000 and the transit nearest `j`.
pub fn julian_cycle(j: JulianDate, lw: f64) -> f64 {
    (since_j2000(j) - J0 - lw / TAU).round()
}

/// First estimate of the instant the sun reaches hour angle `ht` on cycle `n`.
pub fn approx_solar_transit(ht: f64, lw: f64, n: f64) -> JulianDate {
    JulianDate::J2000 + Days::new(J0 + (ht + lw) / TAU + n)
}

pub fn solar_mean_anomaly(js: JulianDate) -> f64 {
    M0 + M1 * since_j2000(js)
}

pub fn equation_of_center(m: f64) -> f64 {
    C1 * m.sin() + C2 * (2.0 * m).sin() + C3 * (3.0 * m).sin()
}

pub fn ecliptic_longitude(m: f64, c: f64) -> f64 {
    m + P + c + PI
}

/// Refines an approximate transit with the equation of time.
pub fn solar_transit(js: JulianDate, m: f64, lsun: f64) -> JulianDate {
    js + Days::new(J1 * m.sin() + J2 * (2.0 * lsun).sin())
}

pub fn declination(lsun: f64) -> f64 {
    (lsun.sin() * E.sin()).asin()
}

pub fn right_ascension(lsun: f64) -> f64 {
    (lsun.sin() * E.cos()).atan2(lsun.cos())
}

pub fn sidereal_time(j: JulianDate, lw: f64) -> f64 {
    TH0 + TH1 * since_j2000(j) - lw
}

/// Azimuth measured from south, westward positive.
pub fn azimuth(th: f64, a: f64, phi: f64, d: f64) -> f64 {
    let h = th - a;
    h.sin().atan2(h.cos() * phi.sin() - d.tan() * phi.cos())
}

pub fn elevation(th: f64, a: f64, phi: f64, d: f64) -> f64 {
    (phi.sin() * d.sin() + phi.cos() * d.cos() * (th - a).cos()).asin()
}

/// Hour angle at which the sun reaches altitude `h`, or `None` when it
/// stays entirely above or below it for the day.
pub fn hour_angle(h: f64, phi: f64, d: f64) -> Option<f64> {
    let x = (h.sin() - phi.sin() * d.sin()) / (phi.cos() * d.cos());
    if x.abs() <= 1.0 {
        Some(x.acos())
    } else {
        None
    }
}

/// Afternoon crossing for hour angle `w0`.
pub fn sunset_julian_date(w0: Option<f64>, m: f64, lsun: f64, lw: f64, n: f64) -> Option<JulianDate> {
    w0.map(|w0| solar_transit(approx_solar_transit(w0, lw, n), m, lsun))
}

/// Morning crossing, mirrored from `jset` around `jtransit`.
pub fn sunrise_julian_date(jtransit: JulianDate, jset: Option<JulianDate>) -> Option<JulianDate> {
    jset.map(|jset| jtransit - (jset - jtransit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_julian_cycle_at_j2000() {
        assert_eq!(julian_cycle(JulianDate::J2000, 0.0), 0.0);
        assert_eq!(julian_cycle(JulianDate::J2000 + Days::new(10.0), 0.0), 10.0);
    }

    #[test]
    fn test_mean_anomaly_at_j2000() {
        assert_abs_diff_eq!(solar_mean_anomaly(JulianDate::J2000), M0, epsilon = 1e-12);
    }

    #[test]
    fn test_equation_of_center_vanishes_at_perihelion() {
        assert_abs_diff_eq!(equation_of_center(0.0), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(equation_of_center(PI), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_declination_bounded_by_obliquity() {
        for step in 0..360 {
            let lsun = f64::from(step) * DEG2RAD;
            assert!(declination(lsun).abs() <= E + 1e-12);
        }
        assert_abs_diff_eq!(declination(PI / 2.0), E, epsilon = 1e-12);
    }

    #[test]
    fn test_right_ascension_at_equinoxes() {
        assert_abs_diff_eq!(right_ascension(0.0), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(right_ascension(PI).abs(), PI, epsilon = 1e-12);
    }

    #[test]
    fn test_elevation_on_meridian() {
        // Hour angle zero: altitude is 90° - |phi - d|.
        let phi = 52.0 * DEG2RAD;
        let d = 10.0 * DEG2RAD;
        assert_abs_diff_eq!(elevation(1.0, 1.0, phi, d), 48.0 * DEG2RAD, epsilon = 1e-12);
    }

    #[test]
    fn test_hour_angle_at_equator_equinox() {
        // Horizon crossing six hours from transit.
        let w = hour_angle(0.0, 0.0, 0.0).unwrap();
        assert_abs_diff_eq!(w, PI / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_hour_angle_undefined_in_polar_day_and_night() {
        let d = 23.0 * DEG2RAD;
        let phi = 80.0 * DEG2RAD;
        assert_eq!(hour_angle(H_SUN_DISC, phi, d), None);
        assert_eq!(hour_angle(H_SUN_DISC, phi, -d), None);
        assert!(hour_angle(H_SUN_DISC, 45.0 * DEG2RAD, d).is_some());
    }

    #[test]
    fn test_hour_angle_undefined_at_pole() {
        assert_eq!(hour_angle(H_ASTRO, PI / 2.0, 0.0), None);
    }

    #[test]
    fn test_crossings_propagate_absence() {
        let transit = JulianDate::J2000;
        assert_eq!(sunset_julian_date(None, 0.0, 0.0, 0.0, 0.0), None);
        assert_eq!(sunrise_julian_date(transit, None), None);
    }

    #[test]
    fn test_sunrise_mirrors_sunset() {
        let transit = JulianDate::J2000;
        let set = transit + Days::new(0.25);
        let rise = sunrise_julian_date(transit, Some(set)).unwrap();
        assert_abs_diff_eq!((transit - rise).value(), 0.25, epsilon = 1e-12);
    }
}
