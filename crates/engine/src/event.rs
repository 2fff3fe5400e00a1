//! The single FIFO event queue.
//!
//! Ticks and input commands share one queue and are applied strictly in
//! arrival order, one at a time.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::types::GameCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameEvent {
    /// Scheduler tick: one automatic step down.
    Tick,
    /// Player input.
    Command(GameCommand),
}

#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: VecDeque<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.events.push_back(event);
    }

    pub fn pop(&mut self) -> Option<GameEvent> {
        self.events.pop_front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drop everything still queued.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_arrival_order() {
        let mut q = EventQueue::new();
        q.push(GameEvent::Command(GameCommand::MoveLeft));
        q.push(GameEvent::Tick);
        q.push(GameEvent::Command(GameCommand::Rotate));

        assert_eq!(q.len(), 3);
        assert_eq!(q.pop(), Some(GameEvent::Command(GameCommand::MoveLeft)));
        assert_eq!(q.pop(), Some(GameEvent::Tick));
        assert_eq!(q.pop(), Some(GameEvent::Command(GameCommand::Rotate)));
        assert_eq!(q.pop(), None);
        assert!(q.is_empty());
    }

    #[test]
    fn events_serialize_compactly() {
        let tick = serde_json::to_string(&GameEvent::Tick).unwrap();
        assert_eq!(tick, "\"tick\"");
        let cmd = serde_json::to_string(&GameEvent::Command(GameCommand::SoftDrop)).unwrap();
        assert_eq!(cmd, "{\"command\":\"softDrop\"}");
    }
}
