// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

#![allow(dead_code)]

use chrono::{FixedOffset, TimeDelta, TimeZone};
use sunphase::{Location, Range, Timestamp};

/// Reference ephemerides are given to the minute; the formulas are good to a
/// few minutes.
pub const TOLERANCE_MINUTES: i64 = 5;

pub fn at(offset_hours: i32, y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Timestamp {
    FixedOffset::east_opt(offset_hours * 3600)
        .unwrap()
        .with_ymd_and_hms(y, mo, d, h, mi, 0)
        .unwrap()
}

#[track_caller]
pub fn assert_near(actual: Timestamp, expected: Timestamp) {
    assert!(
        (actual - expected).abs() <= TimeDelta::minutes(TOLERANCE_MINUTES),
        "expected {expected}, got {actual}"
    );
}

#[track_caller]
pub fn assert_range(range: Range, start: Timestamp, end: Timestamp) {
    let (actual_start, actual_end) = range
        .bounds()
        .unwrap_or_else(|| panic!("expected {start} to {end}, got an unbounded range"));
    assert_near(actual_start, start);
    assert_near(actual_end, end);
}

#[track_caller]
pub fn assert_unbounded(range: Range) {
    assert!(!range.is_bounded(), "expected unbounded, got {range}");
}

pub fn amsterdam() -> Location {
    Location::new(52.367607, 4.8978293, None).unwrap()
}

pub fn warsaw() -> Location {
    Location::new(52.236927, 21.040482, None).unwrap()
}

pub fn malmo() -> Location {
    Location::new(55.5700886, 12.8758905, None).unwrap()
}

pub fn murmansk() -> Location {
    Location::new(68.9368528, 33.0454321, None).unwrap()
}

pub fn alert() -> Location {
    Location::new(82.5059388, -62.5296812, None).unwrap()
}

pub fn mcmurdo() -> Location {
    Location::new(-77.8401191, 166.6445298, None).unwrap()
}
