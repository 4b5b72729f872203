//! Tests for day-scoped normalization (strict merge).

use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;
use chrono_tz::UTC;
use muhurat_engine::normalize::normalize;
use muhurat_engine::Interval;

fn at(day: u32, hour: u32, min: u32) -> DateTime<Tz> {
    UTC.with_ymd_and_hms(2024, 1, day, hour, min, 0).unwrap()
}

fn iv(start: (u32, u32), stop: (u32, u32)) -> Interval {
    Interval::new(at(1, start.0, start.1), at(1, stop.0, stop.1))
}

fn lower() -> DateTime<Tz> {
    at(1, 0, 0)
}

fn upper() -> DateTime<Tz> {
    at(2, 0, 0)
}

#[test]
fn touching_intervals_stay_separate() {
    let input = vec![iv((8, 0), (9, 0)), iv((9, 0), (10, 0))];

    let out = normalize(&input, lower(), upper());

    assert_eq!(out, input, "strict rule: touching intervals are not merged");
}

#[test]
fn overlapping_and_contained_intervals_merge() {
    let input = vec![
        iv((10, 0), (11, 30)),
        iv((11, 0), (12, 0)),
        iv((11, 15), (11, 45)),
        iv((14, 0), (15, 0)),
    ];

    let out = normalize(&input, lower(), upper());

    assert_eq!(out, vec![iv((10, 0), (12, 0)), iv((14, 0), (15, 0))]);
}

#[test]
fn unsorted_input_is_sorted() {
    let input = vec![iv((14, 0), (15, 0)), iv((6, 0), (7, 0)), iv((9, 0), (9, 30))];

    let out = normalize(&input, lower(), upper());

    assert_eq!(out, vec![iv((6, 0), (7, 0)), iv((9, 0), (9, 30)), iv((14, 0), (15, 0))]);
}

#[test]
fn interval_ending_before_scope_is_dropped() {
    let before = Interval::new(
        UTC.with_ymd_and_hms(2023, 12, 31, 20, 0, 0).unwrap(),
        UTC.with_ymd_and_hms(2023, 12, 31, 22, 0, 0).unwrap(),
    );

    let out = normalize(&[before, iv((9, 0), (10, 0))], lower(), upper());

    assert_eq!(out, vec![iv((9, 0), (10, 0))]);
}

#[test]
fn previous_day_spillover_is_clipped_to_lower_bound() {
    let spill = Interval::new(
        UTC.with_ymd_and_hms(2023, 12, 31, 22, 0, 0).unwrap(),
        at(1, 1, 30),
    );

    let out = normalize(&[spill], lower(), upper());

    assert_eq!(out, vec![iv((0, 0), (1, 30))]);
}

#[test]
fn next_day_spillover_is_clipped_to_upper_bound() {
    let spill = Interval::new(at(1, 23, 0), at(2, 1, 0));

    let out = normalize(&[spill], lower(), upper());

    assert_eq!(out, vec![Interval::new(at(1, 23, 0), upper())]);
}

#[test]
fn interval_starting_after_upper_bound_is_preserved() {
    let next_day = Interval::new(at(2, 3, 0), at(2, 4, 0));

    let out = normalize(&[iv((9, 0), (10, 0)), next_day], lower(), upper());

    assert_eq!(out, vec![iv((9, 0), (10, 0)), next_day]);
}

#[test]
fn interval_spanning_both_boundaries_is_clipped_on_both_ends() {
    let span = Interval::new(
        UTC.with_ymd_and_hms(2023, 12, 31, 4, 0, 0).unwrap(),
        at(3, 2, 0),
    );

    let out = normalize(&[span], lower(), upper());

    assert_eq!(out, vec![Interval::new(lower(), upper())]);
}

#[test]
fn empty_input_yields_empty_output() {
    assert!(normalize(&[], lower(), upper()).is_empty());
}

#[test]
fn input_is_left_untouched() {
    let input = vec![iv((11, 0), (12, 0)), iv((10, 0), (11, 30))];
    let snapshot = input.clone();

    let _ = normalize(&input, lower(), upper());

    assert_eq!(input, snapshot);
}

#[test]
fn normalize_is_idempotent() {
    let input = vec![
        iv((10, 0), (11, 30)),
        iv((11, 0), (12, 0)),
        iv((12, 0), (13, 0)),
        Interval::new(at(1, 22, 0), at(2, 2, 0)),
    ];

    let once = normalize(&input, lower(), upper());
    let twice = normalize(&once, lower(), upper());

    assert_eq!(once, twice);
}
