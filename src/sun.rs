// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Everything known about the sun at one instant.
//!
//! [`SunInfo`] bundles the computed ranges, phase, position and radiation
//! with values this crate does not compute itself: solar eclipses, the
//! zodiac sign and the season. Those come from host-supplied
//! [`Collaborators`]. Each collaborator trait is also implemented for
//! matching closures.

use crate::error::Result;
use crate::julian::Timestamp;
use crate::location::Location;
use crate::phase::{classify, SunPhase};
use crate::position::{Position, Radiation};
use crate::ranges::DailyRanges;
use crate::schedule::next_recompute;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ── Collaborators ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EclipseKind {
    Partial,
    Ring,
    Total,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

/// Next solar eclipse of a kind, searched from a date.
pub trait SunEclipseSource {
    fn eclipse(&self, date: Timestamp, kind: EclipseKind) -> Option<Timestamp>;
}

impl<F> SunEclipseSource for F
where
    F: Fn(Timestamp, EclipseKind) -> Option<Timestamp>,
{
    fn eclipse(&self, date: Timestamp, kind: EclipseKind) -> Option<Timestamp> {
        self(date, kind)
    }
}

pub trait ZodiacSource {
    fn zodiac_sign(&self, date: Timestamp) -> ZodiacSign;
}

impl<F> ZodiacSource for F
where
    F: Fn(Timestamp) -> ZodiacSign,
{
    fn zodiac_sign(&self, date: Timestamp) -> ZodiacSign {
        self(date)
    }
}

/// Season at a date; depends on the hemisphere of `latitude`.
pub trait SeasonSource {
    fn season(&self, date: Timestamp, latitude: f64) -> Season;
}

impl<F> SeasonSource for F
where
    F: Fn(Timestamp, f64) -> Season,
{
    fn season(&self, date: Timestamp, latitude: f64) -> Season {
        self(date, latitude)
    }
}

/// The host-supplied lookups used by [`SunInfo::compute`].
#[derive(Clone, Copy)]
pub struct Collaborators<'a> {
    pub eclipses: &'a dyn SunEclipseSource,
    pub zodiac: &'a dyn ZodiacSource,
    pub seasons: &'a dyn SeasonSource,
}

// ── Aggregate ─────────────────────────────────────────────────────────────

/// Next solar eclipses after a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SunEclipse {
    pub partial: Option<Timestamp>,
    pub ring: Option<Timestamp>,
    pub total: Option<Timestamp>,
}

impl SunEclipse {
    pub fn lookup(source: &dyn SunEclipseSource, date: Timestamp) -> Self {
        Self {
            partial: source.eclipse(date, EclipseKind::Partial),
            ring: source.eclipse(date, EclipseKind::Ring),
            total: source.eclipse(date, EclipseKind::Total),
        }
    }

    pub fn get(&self, kind: EclipseKind) -> Option<Timestamp> {
        match kind {
            EclipseKind::Partial => self.partial,
            EclipseKind::Ring => self.ring,
            EclipseKind::Total => self.total,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunInfo {
    ranges: DailyRanges,
    phase: SunPhase,
    position: Position,
    radiation: Radiation,
    eclipse: SunEclipse,
    zodiac: ZodiacSign,
    season: Season,
    next_recompute: Timestamp,
}

impl SunInfo {
    /// Compute everything for `now` at `location`.
    pub fn compute(now: Timestamp, location: &Location, collaborators: &Collaborators<'_>) -> Result<Self> {
        let ranges = DailyRanges::compute(now, location)?;
        let position = Position::compute(now, location);
        let radiation = Radiation::compute(now, position.elevation(), location.altitude());

        Ok(Self {
            phase: classify(&ranges, now),
            next_recompute: next_recompute(now, ranges.noon().start(), ranges.morning_night().end())?,
            eclipse: SunEclipse::lookup(collaborators.eclipses, now),
            zodiac: collaborators.zodiac.zodiac_sign(now),
            season: collaborators.seasons.season(now, location.latitude()),
            ranges,
            position,
            radiation,
        })
    }

    pub fn ranges(&self) -> &DailyRanges {
        &self.ranges
    }

    pub fn phase(&self) -> SunPhase {
        self.phase
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn radiation(&self) -> Radiation {
        self.radiation
    }

    pub fn eclipse(&self) -> SunEclipse {
        self.eclipse
    }

    pub fn zodiac(&self) -> ZodiacSign {
        self.zodiac
    }

    pub fn season(&self) -> Season {
        self.season
    }

    /// When this snapshot goes stale.
    pub fn next_recompute(&self) -> Timestamp {
        self.next_recompute
    }
}
