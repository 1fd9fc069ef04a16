// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Current sun phase.

use crate::julian::Timestamp;
use crate::ranges::DailyRanges;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Name of each range in [`DailyRanges`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum SunPhaseName {
    MorningNight,
    AstroDawn,
    NauticDawn,
    CivilDawn,
    SunRise,
    Daylight,
    Noon,
    SunSet,
    CivilDusk,
    NauticDusk,
    AstroDusk,
    EveningNight,
    Night,
}

impl SunPhaseName {
    /// Dawn-to-dusk order, followed by the whole night. Also the scan order
    /// of [`classify`]: later entries take precedence.
    pub const ALL: [Self; 13] = [
        Self::MorningNight,
        Self::AstroDawn,
        Self::NauticDawn,
        Self::CivilDawn,
        Self::SunRise,
        Self::Daylight,
        Self::Noon,
        Self::SunSet,
        Self::CivilDusk,
        Self::NauticDusk,
        Self::AstroDusk,
        Self::EveningNight,
        Self::Night,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MorningNight => "MORNING_NIGHT",
            Self::AstroDawn => "ASTRO_DAWN",
            Self::NauticDawn => "NAUTIC_DAWN",
            Self::CivilDawn => "CIVIL_DAWN",
            Self::SunRise => "SUN_RISE",
            Self::Daylight => "DAYLIGHT",
            Self::Noon => "NOON",
            Self::SunSet => "SUN_SET",
            Self::CivilDusk => "CIVIL_DUSK",
            Self::NauticDusk => "NAUTIC_DUSK",
            Self::AstroDusk => "ASTRO_DUSK",
            Self::EveningNight => "EVENING_NIGHT",
            Self::Night => "NIGHT",
        }
    }
}

impl fmt::Display for SunPhaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Externally reported phase. Morning and evening night both report as
/// [`SunPhase::Night`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum SunPhase {
    Night,
    AstroDawn,
    NauticDawn,
    CivilDawn,
    SunRise,
    Daylight,
    Noon,
    SunSet,
    CivilDusk,
    NauticDusk,
    AstroDusk,
    #[default]
    Unknown,
}

impl From<SunPhaseName> for SunPhase {
    fn from(name: SunPhaseName) -> Self {
        match name {
            SunPhaseName::MorningNight | SunPhaseName::EveningNight | SunPhaseName::Night => {
                Self::Night
            }
            SunPhaseName::AstroDawn => Self::AstroDawn,
            SunPhaseName::NauticDawn => Self::NauticDawn,
            SunPhaseName::CivilDawn => Self::CivilDawn,
            SunPhaseName::SunRise => Self::SunRise,
            SunPhaseName::Daylight => Self::Daylight,
            SunPhaseName::Noon => Self::Noon,
            SunPhaseName::SunSet => Self::SunSet,
            SunPhaseName::CivilDusk => Self::CivilDusk,
            SunPhaseName::NauticDusk => Self::NauticDusk,
            SunPhaseName::AstroDusk => Self::AstroDusk,
        }
    }
}

impl fmt::Display for SunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Night => "NIGHT",
            Self::AstroDawn => "ASTRO_DAWN",
            Self::NauticDawn => "NAUTIC_DAWN",
            Self::CivilDawn => "CIVIL_DAWN",
            Self::SunRise => "SUN_RISE",
            Self::Daylight => "DAYLIGHT",
            Self::Noon => "NOON",
            Self::SunSet => "SUN_SET",
            Self::CivilDusk => "CIVIL_DUSK",
            Self::NauticDusk => "NAUTIC_DUSK",
            Self::AstroDusk => "ASTRO_DUSK",
            Self::Unknown => "UNKNOWN",
        };
        f.write_str(name)
    }
}

/// The range of `ranges` containing `now`, scanned in
/// [`SunPhaseName::ALL`] order with the last match winning (so noon
/// overrides daylight). [`SunPhase::Unknown`] if none does.
pub fn classify(ranges: &DailyRanges, now: Timestamp) -> SunPhase {
    ranges
        .all_ranges()
        .into_iter()
        .rev()
        .find(|(_, range)| range.matches(now))
        .map_or(SunPhase::Unknown, |(name, _)| name.into())
}
