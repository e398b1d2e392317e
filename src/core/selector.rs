// src/core/selector.rs
use crate::core::types::{Candidate, Count};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Outcome of offering a candidate to a full or non-full selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    /// There was free capacity.
    Inserted,
    /// The selector was full and this candidate pushed out the minimum.
    Replaced(Candidate),
    /// Count was not above the current minimum, or capacity is zero.
    Rejected,
}

/// A retained candidate plus the order in which it arrived.
#[derive(Debug)]
struct Slot {
    candidate: Candidate,
    arrival: u64,
}

impl Slot {
    // Lower count ranks lower. Among equal counts the later arrival ranks
    // lower, so it is the one evicted and earlier arrivals keep their place.
    fn rank(&self) -> (Count, Reverse<u64>) {
        (self.candidate.count, Reverse(self.arrival))
    }
}

impl PartialEq for Slot {
    fn eq(&self, other: &Self) -> bool {
        self.rank() == other.rank()
    }
}

impl Eq for Slot {}

impl PartialOrd for Slot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Slot {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

/// Keeps the `capacity` largest counts out of an arbitrarily long stream of
/// candidates using a min-heap of at most `capacity` entries.
///
/// The heap root serves both as the admission threshold and as the
/// eviction target, so each offer is O(log K) and memory is O(K) no matter
/// how many candidates pass through.
#[derive(Debug)]
pub struct TopKSelector {
    heap: BinaryHeap<Reverse<Slot>>,
    capacity: usize,
    arrivals: u64,
}

impl TopKSelector {
    /// A capacity of zero is allowed and rejects everything.
    /// Nothing is reserved up front; the heap grows only as entries arrive.
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            capacity,
            arrivals: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.capacity
    }

    /// Smallest retained count; a candidate must beat this once full.
    pub fn min_count(&self) -> Option<Count> {
        self.heap.peek().map(|Reverse(slot)| slot.candidate.count)
    }

    pub fn offer(&mut self, candidate: Candidate) -> Admission {
        if self.capacity == 0 {
            return Admission::Rejected;
        }
        let arrival = self.arrivals;
        self.arrivals += 1;

        if self.heap.len() < self.capacity {
            self.heap.push(Reverse(Slot { candidate, arrival }));
            return Admission::Inserted;
        }

        match self.min_count() {
            Some(min) if candidate.count > min => {
                let evicted = self.heap.pop().map(|Reverse(slot)| slot.candidate);
                log::trace!(
                    "'{}' ({}) replaces the minimum ({})",
                    candidate.token,
                    candidate.count,
                    min
                );
                self.heap.push(Reverse(Slot { candidate, arrival }));
                evicted.map_or(Admission::Inserted, Admission::Replaced)
            }
            _ => Admission::Rejected,
        }
    }

    /// Removes and returns the current minimum.
    pub fn pop_min(&mut self) -> Option<Candidate> {
        self.heap.pop().map(|Reverse(slot)| slot.candidate)
    }

    /// Empties the selector lowest count first.
    /// Counts are non-decreasing; the order among equal counts is unspecified.
    pub fn drain(&mut self) -> impl Iterator<Item = Candidate> + '_ {
        std::iter::from_fn(move || self.pop_min())
    }

    pub fn into_ascending(mut self) -> Vec<Candidate> {
        let mut out = Vec::with_capacity(self.heap.len());
        out.extend(self.drain());
        out
    }
}

impl Extend<Candidate> for TopKSelector {
    fn extend<I: IntoIterator<Item = Candidate>>(&mut self, iter: I) {
        for candidate in iter {
            self.offer(candidate);
        }
    }
}

/// Runs `candidates` through a fresh selector and returns the survivors in
/// ascending count order.
pub fn top_k<I>(candidates: I, capacity: usize) -> Vec<Candidate>
where
    I: IntoIterator<Item = Candidate>,
{
    let mut selector = TopKSelector::new(capacity);
    selector.extend(candidates);
    selector.into_ascending()
}
