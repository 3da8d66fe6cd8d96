// SPDX-License-Identifier: MPL-2.0
//! Time source and deferred-action queue driving toast lifecycles.
//!
//! Nothing here sleeps. A [`Clock`] reports how much time has passed and a
//! [`TimerQueue`] hands back the actions whose deadline has been reached,
//! so the same lifecycle code runs against wall-clock time, tokio time or a
//! [`ManualClock`] in tests.

use std::cell::Cell;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic time source.
pub trait Clock {
    /// Time elapsed since the clock's origin.
    fn elapsed(&self) -> Duration;
}

/// Wall-clock time measured from creation.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn elapsed(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Tokio time measured from creation. Follows paused time in tests.
#[derive(Debug, Clone, Copy)]
pub struct TokioClock {
    origin: tokio::time::Instant,
}

impl TokioClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: tokio::time::Instant::now(),
        }
    }

    /// Converts an offset on this clock back into a tokio instant.
    #[must_use]
    pub fn instant_at(&self, offset: Duration) -> tokio::time::Instant {
        self.origin + offset
    }
}

impl Default for TokioClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for TokioClock {
    fn elapsed(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Virtual time that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle and give the
/// other to a notifier.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get().saturating_add(by));
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    /// Moves time to `at`. Time never goes backwards.
    pub fn set(&self, at: Duration) {
        if at > self.now.get() {
            self.now.set(at);
        }
    }
}

impl Clock for ManualClock {
    fn elapsed(&self) -> Duration {
        self.now.get()
    }
}

struct Entry<A> {
    deadline: Duration,
    seq: u64,
    action: A,
}

impl<A> PartialEq for Entry<A> {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline && self.seq == other.seq
    }
}

impl<A> Eq for Entry<A> {}

impl<A> PartialOrd for Entry<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Reversed so the max-heap yields the earliest deadline, then the oldest entry.
impl<A> Ord for Entry<A> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .deadline
            .cmp(&self.deadline)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Actions waiting for a deadline.
pub struct TimerQueue<A> {
    heap: BinaryHeap<Entry<A>>,
    next_seq: u64,
}

impl<A> TimerQueue<A> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn schedule_at(&mut self, deadline: Duration, action: A) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            deadline,
            seq,
            action,
        });
    }

    /// Removes and returns the earliest action due at `now`, with its deadline.
    pub fn pop_due(&mut self, now: Duration) -> Option<(Duration, A)> {
        if self.heap.peek()?.deadline > now {
            return None;
        }
        self.heap.pop().map(|entry| (entry.deadline, entry.action))
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.heap.peek().map(|entry| entry.deadline)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<A> Default for TimerQueue<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> std::fmt::Debug for TimerQueue<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerQueue")
            .field("pending", &self.heap.len())
            .field("next_deadline", &self.next_deadline())
            .finish()
    }
}
