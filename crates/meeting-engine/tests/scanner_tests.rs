//! Tests for free-window scanning over a busy set.

use meeting_engine::{scan_free_windows, BusySet, TimeRange, DAY_SLOTS};

fn range(start: u32, end: u32) -> TimeRange {
    TimeRange::from_start_end(start, end).unwrap()
}

fn busy(ranges: &[(u32, u32)]) -> BusySet {
    ranges.iter().map(|&(s, e)| range(s, e)).collect()
}

#[test]
fn empty_busy_set_yields_whole_day() {
    let windows = scan_free_windows(&BusySet::new(), 30);
    assert_eq!(windows, vec![TimeRange::WHOLE_DAY]);
}

#[test]
fn whole_day_duration_fits_an_empty_day_exactly() {
    let windows = scan_free_windows(&BusySet::new(), DAY_SLOTS);
    assert_eq!(windows, vec![TimeRange::WHOLE_DAY]);
}

#[test]
fn duration_longer_than_day_yields_nothing() {
    assert!(scan_free_windows(&BusySet::new(), DAY_SLOTS + 1).is_empty());
}

#[test]
fn single_block_splits_the_day() {
    let windows = scan_free_windows(&busy(&[(600, 660)]), 30);
    assert_eq!(windows, vec![range(0, 600), range(660, 1440)]);
}

#[test]
fn gaps_shorter_than_duration_are_skipped() {
    // Free: 0-60 (60), 90-120 (30), 180-1440 (1260)
    let windows = scan_free_windows(&busy(&[(60, 90), (120, 180)]), 45);
    assert_eq!(windows, vec![range(0, 60), range(180, 1440)]);
}

#[test]
fn gap_exactly_equal_to_duration_qualifies() {
    let windows = scan_free_windows(&busy(&[(0, 60), (90, 1440)]), 30);
    assert_eq!(windows, vec![range(60, 90)]);
}

#[test]
fn blocks_at_both_ends_of_the_day() {
    let windows = scan_free_windows(&busy(&[(0, 480), (1020, 1440)]), 60);
    assert_eq!(windows, vec![range(480, 1020)]);
}

#[test]
fn full_day_block_leaves_nothing() {
    assert!(scan_free_windows(&busy(&[(0, 1440)]), 1).is_empty());
}

#[test]
fn adjacent_blocks_leave_no_zero_width_window() {
    let windows = scan_free_windows(&busy(&[(60, 120), (120, 180)]), 1);
    assert_eq!(windows, vec![range(0, 60), range(180, 1440)]);
}

#[test]
fn zero_duration_never_emits_degenerate_windows() {
    let windows = scan_free_windows(&busy(&[(0, 60), (60, 1440)]), 0);
    assert!(windows.is_empty());
}
