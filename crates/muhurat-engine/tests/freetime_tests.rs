//! Tests for the free-time complement.

use chrono::{Duration, NaiveDate, TimeZone};
use chrono_tz::Asia::Kolkata;
use muhurat_engine::freetime::{free_between, free_time};
use muhurat_engine::{total_duration, DayIntervals, DayScope, Interval};

fn iv(start: (u32, u32), stop: (u32, u32)) -> Interval {
    Interval::new(
        Kolkata.with_ymd_and_hms(2024, 1, 1, start.0, start.1, 0).unwrap(),
        Kolkata.with_ymd_and_hms(2024, 1, 1, stop.0, stop.1, 0).unwrap(),
    )
}

fn scope() -> DayScope {
    DayScope::for_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), Kolkata).unwrap()
}

fn day(entries: &[(&str, Vec<Interval>)]) -> DayIntervals {
    entries
        .iter()
        .map(|(label, intervals)| (label.to_string(), intervals.clone()))
        .collect()
}

fn until_midnight(start: (u32, u32)) -> Interval {
    Interval::new(iv(start, start).start, scope().next_day)
}

#[test]
fn gaps_around_rahu_and_dur_muhurat() {
    let day = day(&[
        ("Rahu", vec![iv((9, 0), (10, 30))]),
        ("Dur Muhurat", vec![iv((12, 0), (12, 48))]),
    ]);

    let free = free_time(&scope(), &day);

    assert_eq!(
        free,
        vec![iv((0, 0), (9, 0)), iv((10, 30), (12, 0)), until_midnight((12, 48))]
    );
}

#[test]
fn empty_day_is_entirely_free() {
    let free = free_time(&scope(), &DayIntervals::new());

    assert_eq!(free, vec![scope().as_interval()]);
    assert_eq!(total_duration(&free), Duration::hours(24));
}

#[test]
fn categories_outside_the_busy_group_do_not_block_time() {
    let day = day(&[
        ("Amrit Kaal", vec![iv((5, 0), (6, 30))]),
        ("Abhijit Muhurat", vec![iv((12, 5), (12, 50))]),
    ]);

    assert_eq!(free_time(&scope(), &day), vec![scope().as_interval()]);
}

#[test]
fn yamaganda_and_gulika_count_as_busy() {
    let day = day(&[
        ("Yamaganda", vec![iv((7, 0), (8, 0))]),
        ("Gulika", vec![iv((20, 0), (21, 0))]),
    ]);

    let free = free_time(&scope(), &day);

    assert_eq!(
        free,
        vec![iv((0, 0), (7, 0)), iv((8, 0), (20, 0)), until_midnight((21, 0))]
    );
}

#[test]
fn touching_busy_windows_leave_no_gap() {
    let day = day(&[
        ("Gulika", vec![iv((7, 30), (9, 0))]),
        ("Rahu", vec![iv((9, 0), (10, 30))]),
    ]);

    let free = free_time(&scope(), &day);

    assert_eq!(free, vec![iv((0, 0), (7, 30)), until_midnight((10, 30))]);
}

#[test]
fn busy_window_crossing_midnight_ends_free_time_early() {
    let varjyam = Interval::new(
        Kolkata.with_ymd_and_hms(2024, 1, 1, 23, 0, 0).unwrap(),
        Kolkata.with_ymd_and_hms(2024, 1, 2, 1, 0, 0).unwrap(),
    );
    let day = day(&[("Varjyam", vec![varjyam])]);

    let free = free_time(&scope(), &day);

    assert_eq!(free, vec![iv((0, 0), (23, 0))]);
}

#[test]
fn previous_day_spillover_blocks_early_morning() {
    let rahu = Interval::new(
        Kolkata.with_ymd_and_hms(2023, 12, 31, 22, 0, 0).unwrap(),
        Kolkata.with_ymd_and_hms(2024, 1, 1, 2, 0, 0).unwrap(),
    );
    let day = day(&[("Rahu", vec![rahu])]);

    assert_eq!(free_time(&scope(), &day), vec![until_midnight((2, 0))]);
}

#[test]
fn next_day_busy_windows_are_ignored() {
    let tomorrow = Interval::new(
        Kolkata.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap(),
        Kolkata.with_ymd_and_hms(2024, 1, 2, 10, 0, 0).unwrap(),
    );

    let free = free_between(&scope(), &[iv((9, 0), (10, 0)), tomorrow]);

    assert_eq!(free, vec![iv((0, 0), (9, 0)), until_midnight((10, 0))]);
}

#[test]
fn free_plus_busy_covers_the_whole_day() {
    let busy = vec![
        iv((1, 0), (2, 0)),
        iv((1, 30), (3, 0)),
        iv((9, 0), (10, 30)),
        iv((10, 30), (11, 0)),
        iv((22, 15), (23, 0)),
    ];

    let free = free_between(&scope(), &busy);
    let merged = muhurat_engine::merge_all(&busy);

    assert_eq!(total_duration(&free) + total_duration(&merged), Duration::hours(24));
}
