//! Fixed-capacity object pool
//!
//! Enemies and lasers are never allocated mid-game. Each pool is built once
//! from a factory closure, hands out slot indices from a free list, and takes
//! them back on release. `acquire` returns `None` when the pool is exhausted;
//! callers treat that as a quiet no-op for the frame.

/// A fixed-capacity pool of reusable objects, keyed by slot index.
pub struct Pool<T> {
    slots: Vec<T>,
    in_use: Vec<bool>,
    /// Free slot indices (LIFO so recently released slots are reused first)
    free: Vec<usize>,
}

impl<T> Pool<T> {
    /// Build a pool of `capacity` objects from the factory.
    pub fn new<F: FnMut() -> T>(capacity: usize, mut factory: F) -> Self {
        Self {
            slots: (0..capacity).map(|_| factory()).collect(),
            in_use: vec![false; capacity],
            free: (0..capacity).rev().collect(),
        }
    }

    /// Take a slot out of the free list. `None` when exhausted.
    pub fn acquire(&mut self) -> Option<usize> {
        let slot = self.free.pop()?;
        self.in_use[slot] = true;
        Some(slot)
    }

    /// Return a slot to the free list. Releasing a free slot is a no-op.
    pub fn release(&mut self, slot: usize) {
        if slot < self.slots.len() && self.in_use[slot] {
            self.in_use[slot] = false;
            self.free.push(slot);
        }
    }

    /// Access a live slot. `None` if the slot is free or out of bounds.
    pub fn get(&self, slot: usize) -> Option<&T> {
        if self.in_use.get(slot).copied().unwrap_or(false) {
            self.slots.get(slot)
        } else {
            None
        }
    }

    /// Mutable access to a live slot.
    pub fn get_mut(&mut self, slot: usize) -> Option<&mut T> {
        if self.in_use.get(slot).copied().unwrap_or(false) {
            self.slots.get_mut(slot)
        } else {
            None
        }
    }

    /// Iterate over live slots.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(i, _)| self.in_use[*i])
    }

    /// Iterate mutably over live slots.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> {
        let in_use = &self.in_use;
        self.slots
            .iter_mut()
            .enumerate()
            .filter(move |(i, _)| in_use[*i])
    }

    /// Number of slots currently acquired.
    pub fn live_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Total capacity of the pool.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}
