// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Named-phase time range.
//!
//! A [`Range`] is either *bounded* (`[start, end)`) or *unbounded*, which
//! means the phase does not occur on that day. A range with only one of its
//! endpoints cannot be constructed.

use crate::julian::Timestamp;
use chrono::TimeDelta;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

/// Half-open interval between two timestamps, or the absence of one.
///
/// # Examples
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use sunphase::Range;
///
/// let cet = FixedOffset::east_opt(3600).unwrap();
/// let start = cet.with_ymd_and_hms(2019, 2, 27, 7, 31, 0).unwrap();
/// let end = cet.with_ymd_and_hms(2019, 2, 27, 7, 35, 0).unwrap();
/// let rise = Range::new(start, end);
///
/// assert!(rise.matches(start));
/// assert!(!rise.matches(end));
/// assert!(!Range::unbounded().matches(start));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Range {
    bounds: Option<(Timestamp, Timestamp)>,
}

impl Range {
    /// A bounded range `[start, end)`.
    ///
    /// `start > end` is allowed: such a range matches nothing but still
    /// takes part in [`intersects`](Self::intersects).
    pub const fn new(start: Timestamp, end: Timestamp) -> Self {
        Self {
            bounds: Some((start, end)),
        }
    }

    /// The range of a phase that does not occur.
    pub const fn unbounded() -> Self {
        Self { bounds: None }
    }

    /// Bounded if both endpoints are present, unbounded otherwise.
    pub fn from_bounds(start: Option<Timestamp>, end: Option<Timestamp>) -> Self {
        match (start, end) {
            (Some(start), Some(end)) => Self::new(start, end),
            _ => Self::unbounded(),
        }
    }

    #[inline]
    pub const fn is_bounded(&self) -> bool {
        self.bounds.is_some()
    }

    #[inline]
    pub fn start(&self) -> Option<Timestamp> {
        self.bounds.map(|(start, _)| start)
    }

    #[inline]
    pub fn end(&self) -> Option<Timestamp> {
        self.bounds.map(|(_, end)| end)
    }

    /// Both endpoints, if bounded.
    #[inline]
    pub const fn bounds(&self) -> Option<(Timestamp, Timestamp)> {
        self.bounds
    }

    /// Length of the range; zero when inverted, `None` when unbounded.
    pub fn duration(&self) -> Option<TimeDelta> {
        self.bounds
            .map(|(start, end)| (end - start).max(TimeDelta::zero()))
    }

    /// `start <= instant < end`. Always `false` for an unbounded range.
    pub fn matches(&self, instant: Timestamp) -> bool {
        match self.bounds {
            Some((start, end)) => start <= instant && instant < end,
            None => false,
        }
    }

    /// Whether the two ranges overlap. Touching endpoints count; an
    /// unbounded range intersects nothing.
    pub fn intersects(&self, other: &Self) -> bool {
        match (self.bounds, other.bounds) {
            (Some((start, end)), Some((other_start, other_end))) => {
                !(other_start > end || other_end < start)
            }
            _ => false,
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bounds {
            Some((start, end)) => write!(f, "{} to {}", start, end),
            None => f.write_str("unbounded"),
        }
    }
}

// Unbounded ranges serialize with both fields set to null.
#[cfg(feature = "serde")]
impl Serialize for Range {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Range", 2)?;
        s.serialize_field("start", &self.start())?;
        s.serialize_field("end", &self.end())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Range {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            start: Option<Timestamp>,
            end: Option<Timestamp>,
        }

        let raw = Raw::deserialize(deserializer)?;
        match (raw.start, raw.end) {
            (Some(_), None) | (None, Some(_)) => Err(serde::de::Error::custom(
                "range must have both or neither of start and end",
            )),
            (start, end) => Ok(Range::from_bounds(start, end)),
        }
    }
}
