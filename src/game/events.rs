//! Event queues
//!
//! Frame-local events decouple the scene update from its side effects:
//! the overlap watcher sends hit events, the movement handler sends audio
//! cues, and each consumer drains its own queue. The collision code never
//! touches the sound bank directly.

/// A queue for events of a single type, collected during the frame and
/// drained at a specific point.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Add an event to the queue.
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Drain all events, clearing the queue.
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A laser overlapped an enemy this frame. Slot indices into the two pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaserHitEvent {
    pub laser: usize,
    pub enemy: usize,
}

/// One-shot sound requests produced by scene logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    /// Movement whoosh while steering the ship
    Woosh,
    /// Laser fired
    LaserShot,
    /// Enemy destroyed by a laser
    EnemyHit,
}

/// Container for all scene event queues.
#[derive(Debug, Default)]
pub struct Events {
    /// Laser/enemy overlaps detected this frame
    pub hits: EventQueue<LaserHitEvent>,
    /// Sounds to trigger; drained by the main loop into the sound bank
    pub audio: EventQueue<AudioCue>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_and_drain() {
        let mut queue: EventQueue<i32> = EventQueue::new();
        queue.send(1);
        queue.send(2);
        assert_eq!(queue.len(), 2);

        let collected: Vec<_> = queue.drain().collect();
        assert_eq!(collected, vec![1, 2]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_events_container() {
        let mut events = Events::new();
        events.hits.send(LaserHitEvent { laser: 0, enemy: 3 });
        events.audio.send(AudioCue::EnemyHit);

        assert_eq!(events.hits.len(), 1);
        assert_eq!(
            events.audio.drain().next(),
            Some(AudioCue::EnemyHit)
        );
    }
}
