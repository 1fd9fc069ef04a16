// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Observer location.

use crate::error::{Error, Result};
use crate::geometry::DEG2RAD;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geographic position of the observer.
///
/// Latitude and longitude are decimal degrees (north and east positive),
/// altitude is meters above sea level and only affects radiation.
///
/// With the `serde` feature enabled, deserialization goes through the same
/// validation as [`Location::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawLocation"))]
pub struct Location {
    latitude: f64,
    longitude: f64,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    altitude: Option<f64>,
}

impl Location {
    /// Validated location.
    ///
    /// # Errors
    ///
    /// [`Error::LatitudeOutOfRange`] / [`Error::LongitudeOutOfRange`] for
    /// coordinates outside ±90° / ±180° (or not finite), and
    /// [`Error::InvalidAltitude`] for a non-finite altitude.
    ///
    /// # Examples
    ///
    /// ```
    /// use sunphase::Location;
    ///
    /// let amsterdam = Location::new(52.367607, 4.8978293, None).unwrap();
    /// assert_eq!(amsterdam.latitude(), 52.367607);
    /// assert!(Location::new(91.0, 0.0, None).is_err());
    /// ```
    pub fn new(latitude: f64, longitude: f64, altitude: Option<f64>) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::LongitudeOutOfRange(longitude));
        }
        if let Some(altitude) = altitude.filter(|a| !a.is_finite()) {
            return Err(Error::InvalidAltitude(altitude));
        }
        Ok(Self {
            latitude,
            longitude,
            altitude,
        })
    }

    #[inline]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    #[inline]
    pub const fn altitude(&self) -> Option<f64> {
        self.altitude
    }

    /// West longitude in radians.
    #[inline]
    pub(crate) fn lw(&self) -> f64 {
        -self.longitude * DEG2RAD
    }

    /// Latitude in radians.
    #[inline]
    pub(crate) fn phi(&self) -> f64 {
        self.latitude * DEG2RAD
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawLocation {
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    altitude: Option<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawLocation> for Location {
    type Error = Error;

    fn try_from(raw: RawLocation) -> Result<Self> {
        Location::new(raw.latitude, raw.longitude, raw.altitude)
    }
}
