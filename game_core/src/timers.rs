//! Cancellable timer group
//!
//! Every delayed step of a game (each playback flash, the start of the
//! player's turn, the next level) is a timer in one group. Leaving a phase
//! cancels the whole group at once, so nothing scheduled for an old phase
//! can fire into a new one.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::pads::Color;

/// Work a timer performs when it comes due
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTask {
    Flash(Color),
    BeginPlayerTurn,
    AdvanceLevel,
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    due_ms: u64,
    seq: u64,
    task: TimerTask,
}

// Min-heap on (due, seq): earlier deadline first, then scheduling order
impl Ord for Timer {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.due_ms, other.seq).cmp(&(self.due_ms, self.seq))
    }
}

impl PartialOrd for Timer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Timer {
    fn eq(&self, other: &Self) -> bool {
        self.due_ms == other.due_ms && self.seq == other.seq
    }
}

impl Eq for Timer {}

/// Pending timers, fired in deadline order and cancelled as one unit
#[derive(Debug, Default)]
pub struct TimerGroup {
    pending: BinaryHeap<Timer>,
    next_seq: u64,
}

impl TimerGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_ms: u64, task: TimerTask) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Timer { due_ms, seq, task });
    }

    /// Drop every pending timer. Returns how many were cancelled.
    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.pending.len();
        self.pending.clear();
        cancelled
    }

    /// Remove and return the earliest timer due at or before `now_ms`
    pub fn pop_due(&mut self, now_ms: u64) -> Option<(u64, TimerTask)> {
        if self.pending.peek()?.due_ms > now_ms {
            return None;
        }
        self.pending.pop().map(|t| (t.due_ms, t.task))
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.peek().map(|t| t.due_ms)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
