//! Deferred phase transitions
//!
//! The classic game leaned on one-shot OS timers for its respawn and restart
//! delays. Here those are entries in an explicit priority queue keyed by due
//! tick, drained at the top of each tick. Same-tick events fire in the order
//! they were scheduled.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};

/// A one-shot deferred transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScheduledEvent {
    /// End the death pause: respawn if lives remain, otherwise game over
    Respawn,
    /// Leave the game-over screen for the welcome screen
    ShowTitle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    due_tick: u64,
    seq: u64,
    event: ScheduledEvent,
}

/// Priority queue of one-shot deferred events
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    heap: BinaryHeap<Reverse<Entry>>,
    seq: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `event` to fire once the tick counter reaches `due_tick`
    pub fn schedule(&mut self, due_tick: u64, event: ScheduledEvent) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry {
            due_tick,
            seq,
            event,
        }));
    }

    /// Pop the next event that is due at tick `now`, if any
    pub fn pop_due(&mut self, now: u64) -> Option<ScheduledEvent> {
        if self.heap.peek().is_some_and(|Reverse(e)| e.due_tick <= now) {
            self.heap.pop().map(|Reverse(e)| e.event)
        } else {
            None
        }
    }

    /// Drop all pending events
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_at_due_tick_not_before() {
        let mut queue = EventQueue::new();
        queue.schedule(10, ScheduledEvent::Respawn);

        assert_eq!(queue.pop_due(9), None);
        assert_eq!(queue.pop_due(10), Some(ScheduledEvent::Respawn));
        assert_eq!(queue.pop_due(10), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn earliest_due_fires_first() {
        let mut queue = EventQueue::new();
        queue.schedule(20, ScheduledEvent::ShowTitle);
        queue.schedule(5, ScheduledEvent::Respawn);

        assert_eq!(queue.pop_due(30), Some(ScheduledEvent::Respawn));
        assert_eq!(queue.pop_due(30), Some(ScheduledEvent::ShowTitle));
    }

    #[test]
    fn same_tick_fires_in_schedule_order() {
        let mut queue = EventQueue::new();
        queue.schedule(7, ScheduledEvent::ShowTitle);
        queue.schedule(7, ScheduledEvent::Respawn);

        assert_eq!(queue.pop_due(7), Some(ScheduledEvent::ShowTitle));
        assert_eq!(queue.pop_due(7), Some(ScheduledEvent::Respawn));
    }

    #[test]
    fn clear_drops_pending() {
        let mut queue = EventQueue::new();
        queue.schedule(1, ScheduledEvent::Respawn);
        queue.schedule(2, ScheduledEvent::ShowTitle);
        assert_eq!(queue.len(), 2);

        queue.clear();
        assert_eq!(queue.pop_due(u64::MAX), None);
    }
}
