//! Compute free windows from a merged busy set.
//!
//! Walks the busy blocks in ascending order with a cursor at the end of the
//! last block seen, emitting each gap that is long enough, then the tail of the
//! day after the final block.

use crate::busy::BusySet;
use crate::time_range::{TimeRange, DAY_SLOTS};

/// Every maximal free window of at least `duration` minutes, in chronological order.
///
/// A `duration` longer than the day yields nothing. A zero `duration` is
/// treated as one minute so degenerate windows are never produced.
pub fn scan_free_windows(busy: &BusySet, duration: u32) -> Vec<TimeRange> {
    if duration > DAY_SLOTS {
        return Vec::new();
    }
    let duration = duration.max(1);

    let mut windows = Vec::new();
    let mut cursor = 0;

    for block in busy.iter() {
        // Blocks are disjoint and sorted, so cursor <= block.start().
        let gap = block.start() - cursor;
        if gap >= duration {
            windows.push(TimeRange::new_unchecked(cursor, block.start()));
        }
        cursor = block.end();
    }

    // Trailing window after the last busy block.
    if DAY_SLOTS - cursor >= duration {
        windows.push(TimeRange::new_unchecked(cursor, DAY_SLOTS));
    }

    windows
}
