//! Fold relevant events into a minimal set of disjoint busy blocks.
//!
//! Blocks are kept in a `BTreeMap` keyed by start minute, so the neighbor
//! lookups the merge rule needs ("greatest block starting at or before x") are
//! a single reverse range scan.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use tracing::trace;

use crate::event::Event;
use crate::time_range::TimeRange;

/// Sorted, pairwise non-overlapping busy blocks.
///
/// For consecutive blocks `a`, `b`: `a.end() <= b.start()`. Blocks that merely
/// touch may stay separate; that zero-width gap never qualifies as free time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(into = "Vec<TimeRange>")]
pub struct BusySet {
    blocks: BTreeMap<u32, TimeRange>,
}

impl BusySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `range`, coalescing it with every block it overlaps.
    ///
    /// - `before` is the block with the greatest start `<= range.start()`; if it
    ///   runs past `range.start()` the merged block starts where it starts.
    /// - `after` is the block with the greatest start `<= range.end()`; if it
    ///   runs past `range.end()` the merged block ends where it ends.
    /// - Every block starting in `[merged_start, range.end()]` is subsumed.
    ///
    /// A block touching `range` on the right is absorbed, one touching it on the
    /// left is not. Repeating an insert therefore never changes which minutes are
    /// busy, but may coalesce touching blocks.
    pub fn insert(&mut self, range: TimeRange) {
        let before = self.floor(range.start());
        let after = self.floor(range.end());

        let merged_start = match before {
            Some(b) if b.end() > range.start() => b.start(),
            _ => range.start(),
        };
        let merged_end = match after {
            Some(a) if a.end() > range.end() => a.end(),
            _ => range.end(),
        };

        let subsumed: Vec<u32> = self
            .blocks
            .range(merged_start..=range.end())
            .map(|(&start, _)| start)
            .collect();
        for start in &subsumed {
            self.blocks.remove(start);
        }

        let merged = TimeRange::new_unchecked(merged_start, merged_end);
        trace!(%range, %merged, subsumed = subsumed.len(), "busy block inserted");
        self.blocks.insert(merged_start, merged);
    }

    /// Block with the greatest start at or before `minute`.
    fn floor(&self, minute: u32) -> Option<TimeRange> {
        self.blocks.range(..=minute).next_back().map(|(_, r)| *r)
    }

    /// Blocks in ascending order of start.
    pub fn iter(&self) -> impl Iterator<Item = TimeRange> + '_ {
        self.blocks.values().copied()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Total busy minutes across all blocks.
    pub fn busy_minutes(&self) -> u32 {
        self.iter().map(|r| r.duration()).sum()
    }

    /// True iff some block covers `minute`.
    pub fn is_busy_at(&self, minute: u32) -> bool {
        self.floor(minute).is_some_and(|r| r.contains(minute))
    }
}

impl FromIterator<TimeRange> for BusySet {
    fn from_iter<I: IntoIterator<Item = TimeRange>>(iter: I) -> Self {
        let mut set = BusySet::new();
        for range in iter {
            set.insert(range);
        }
        set
    }
}

impl From<BusySet> for Vec<TimeRange> {
    fn from(set: BusySet) -> Self {
        set.blocks.into_values().collect()
    }
}

/// Merge the ranges of every event that involves at least one of `attendees`.
///
/// Events none of whose attendees appear in `attendees` impose no constraint
/// and are skipped.
pub fn merge_busy_blocks<'a, I>(events: &[Event], attendees: I) -> BusySet
where
    I: IntoIterator<Item = &'a str>,
{
    let required: HashSet<&str> = attendees.into_iter().collect();

    events
        .iter()
        .filter(|event| event.involves_any(&required))
        .map(|event| event.when)
        .collect()
}
