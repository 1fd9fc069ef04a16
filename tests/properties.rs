// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Structural properties of the daily ranges over many locations and dates.

mod common;

use chrono::TimeDelta;
use common::*;
use sunphase::{
    classify_phase, compute_daily_ranges, DailyRanges, Location, SunPhase, SunPhaseName, Timestamp,
};

/// The dawn-to-dusk chain without the one-minute noon marker, which sits
/// inside daylight.
const CHAIN: [SunPhaseName; 11] = [
    SunPhaseName::MorningNight,
    SunPhaseName::AstroDawn,
    SunPhaseName::NauticDawn,
    SunPhaseName::CivilDawn,
    SunPhaseName::SunRise,
    SunPhaseName::Daylight,
    SunPhaseName::SunSet,
    SunPhaseName::CivilDusk,
    SunPhaseName::NauticDusk,
    SunPhaseName::AstroDusk,
    SunPhaseName::EveningNight,
];

fn sites() -> Vec<(Location, i32)> {
    vec![
        (amsterdam(), 1),
        (warsaw(), 2),
        (malmo(), 2),
        (murmansk(), 3),
        (alert(), -5),
        (mcmurdo(), 13),
        (Location::new(0.0, 0.0, None).unwrap(), 0),
        (Location::new(-33.8688, 151.2093, Some(58.0)).unwrap(), 10),
        (Location::new(64.1466, -21.9426, None).unwrap(), 0),
    ]
}

/// Mid-month dates through 2019, at local noon so every range comes from a
/// single solar day.
fn noons(offset_hours: i32) -> impl Iterator<Item = Timestamp> {
    (1..=12).map(move |month| at(offset_hours, 2019, month, 15, 12, 0))
}

fn assert_contiguous(ranges: &DailyRanges, context: &str) {
    for pair in CHAIN.windows(2) {
        let (earlier, later) = (ranges.get(pair[0]), ranges.get(pair[1]));
        if earlier.is_bounded() && later.is_bounded() {
            assert_eq!(
                earlier.end(),
                later.start(),
                "{context}: {} ends at {earlier}, {} starts at {later}",
                pair[0],
                pair[1]
            );
        }
    }
}

#[test]
fn bounded_ranges_are_contiguous() {
    for (location, offset) in sites() {
        for date in noons(offset) {
            let ranges = compute_daily_ranges(date, &location).unwrap();
            assert_contiguous(&ranges, &format!("{location:?} {date}"));
        }
    }
}

#[test]
fn rise_and_set_mirror_around_noon() {
    for (location, offset) in sites() {
        for date in noons(offset) {
            let ranges = compute_daily_ranges(date, &location).unwrap();
            let (Some(rise), Some(set), Some(noon)) =
                (ranges.rise().start(), ranges.set().end(), ranges.noon().start())
            else {
                continue;
            };
            let skew = (set - noon) - (noon - rise);
            assert!(
                skew.abs() <= TimeDelta::minutes(2),
                "{location:?} {date}: rise {rise}, noon {noon}, set {set}"
            );
        }
    }
}

#[test]
fn bands_stay_within_one_solar_day() {
    for (location, offset) in sites() {
        for date in noons(offset) {
            let ranges = compute_daily_ranges(date, &location).unwrap();
            for name in CHAIN.iter().filter(|n| **n != SunPhaseName::Daylight) {
                if let Some((start, end)) = ranges.get(*name).bounds() {
                    assert!(start >= ranges.true_midnight(), "{name} {date}");
                    assert!(end <= ranges.next_true_midnight(), "{name} {date}");
                    assert!(start <= end, "{name} {date}");
                }
            }
        }
    }
}

#[test]
fn no_range_is_half_bounded() {
    for (location, offset) in sites() {
        for date in noons(offset) {
            for hour in [0, 1, 2, 23] {
                let instant = date - TimeDelta::hours(12) + TimeDelta::hours(hour);
                let ranges = compute_daily_ranges(instant, &location).unwrap();
                for (name, range) in ranges.all_ranges() {
                    assert_eq!(
                        range.start().is_some(),
                        range.end().is_some(),
                        "{name} at {instant}: {range}"
                    );
                }
            }
        }
    }
}

#[test]
fn computation_is_idempotent() {
    for (location, offset) in sites() {
        let instant = at(offset, 2019, 5, 16, 0, 10);
        assert_eq!(
            compute_daily_ranges(instant, &location).unwrap(),
            compute_daily_ranges(instant, &location).unwrap()
        );
    }
}

#[test]
fn night_before_true_midnight_starts_with_previous_evening() {
    let location = warsaw();
    let instant = at(2, 2019, 5, 16, 0, 0);
    let today = compute_daily_ranges(instant, &location).unwrap();
    assert!(instant < today.true_midnight());

    let previous_evening = compute_daily_ranges(at(2, 2019, 5, 15, 12, 0), &location)
        .unwrap()
        .evening_night();
    assert_eq!(today.night().start(), previous_evening.start());
    assert_eq!(today.evening_night(), previous_evening);
}

#[test]
fn at_most_one_phase_besides_noon_matches() {
    let location = amsterdam();
    let mut instant = at(1, 2019, 2, 27, 1, 0);
    let end = at(1, 2019, 2, 28, 0, 0);
    while instant < end {
        let ranges = compute_daily_ranges(instant, &location).unwrap();
        let matching: Vec<_> = ranges
            .all_ranges()
            .into_iter()
            .filter(|(name, range)| {
                range.matches(instant)
                    && !matches!(name, SunPhaseName::Noon | SunPhaseName::Night)
            })
            .collect();
        assert!(matching.len() <= 1, "{instant}: {matching:?}");
        assert_ne!(classify_phase(&ranges, instant), SunPhase::Unknown, "{instant}");
        instant += TimeDelta::minutes(7);
    }
}

#[test]
fn polar_night_keeps_astronomical_twilight() {
    let ranges = compute_daily_ranges(at(-5, 2019, 12, 21, 12, 0), &alert()).unwrap();
    for range in [
        ranges.rise(),
        ranges.set(),
        ranges.civil_dawn(),
        ranges.nautic_dawn(),
        ranges.civil_dusk(),
        ranges.nautic_dusk(),
    ] {
        assert_unbounded(range);
    }
    assert!(ranges.astro_dawn().is_bounded());
    assert!(ranges.astro_dusk().is_bounded());
}

#[test]
fn polar_day_finds_daylight_by_search() {
    let ranges = compute_daily_ranges(at(-4, 2019, 6, 21, 12, 0), &alert()).unwrap();
    for name in CHAIN.iter().filter(|n| **n != SunPhaseName::Daylight) {
        assert_unbounded(ranges.get(*name));
    }
    let (start, end) = ranges.daylight().bounds().unwrap();
    assert!(end - start > TimeDelta::days(100));
    assert!(ranges.daylight().matches(at(-4, 2019, 6, 21, 12, 0)));
}

#[test]
fn exhausted_daylight_search_leaves_daylight_unbounded() {
    // At the pole no crossing exists on any day, so both searches run out.
    let pole = Location::new(90.0, 0.0, None).unwrap();
    let ranges = compute_daily_ranges(at(0, 2019, 6, 21, 12, 0), &pole).unwrap();
    assert_unbounded(ranges.rise());
    assert_unbounded(ranges.set());
    assert_unbounded(ranges.daylight());
    assert!(ranges.noon().is_bounded());
}
