//! Max-priority frontier of `(priority, position)` entries.
//!
//! Entries are plain values: the same position may be queued several times
//! and nothing is ever updated in place. Among equal priorities the entry
//! pushed first pops first, so runs are reproducible.
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// One queued frontier pixel.
#[derive(Clone, Copy, Debug)]
pub struct FrontierEntry {
    pub priority: f32,
    pub x: usize,
    pub y: usize,
    /// Times this position was re-queued to reach this entry.
    pub deferrals: u32,
    seq: u64,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, priority: f32, x: usize, y: usize) {
        self.push_entry(priority, x, y, 0);
    }

    /// Re-queue `entry` one priority step lower.
    pub fn defer(&mut self, entry: &FrontierEntry) {
        self.push_entry(entry.priority - 1.0, entry.x, entry.y, entry.deferrals + 1);
    }

    fn push_entry(&mut self, priority: f32, x: usize, y: usize, deferrals: u32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(FrontierEntry {
            priority,
            x,
            y,
            deferrals,
            seq,
        });
    }

    /// Remove the highest-priority entry.
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
