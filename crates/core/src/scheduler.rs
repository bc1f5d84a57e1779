//! Cooperative round-robin scheduler.
//!
//! Units run in registration order, one step each per tick, on a single
//! thread. The canvas is only touched by the unit whose turn it is, so no
//! locking is involved.

use tracing::debug;

use crate::canvas::Canvas;
use crate::types::Movement;
use crate::units::{Tickable, Unit};

/// Handle returned on registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitId(u64);

/// What the driver should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Frame complete; keep going.
    Running,
    /// Every unit required for continuation has finished.
    Finished,
}

#[derive(Debug)]
struct Entry<U> {
    id: UnitId,
    unit: U,
    required: bool,
}

#[derive(Debug)]
pub struct Scheduler<U = Unit> {
    entries: Vec<Entry<U>>,
    next_id: u64,
    required_registered: usize,
    ticks: u64,
}

impl<U> Default for Scheduler<U> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            required_registered: 0,
            ticks: 0,
        }
    }
}

impl<U: Tickable> Scheduler<U> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a unit that runs until it dies or the program exits.
    pub fn register(&mut self, unit: impl Into<U>) -> UnitId {
        self.push(unit.into(), false)
    }

    /// Add a unit the run depends on: once every such unit has died the
    /// scheduler reports [`TickOutcome::Finished`].
    pub fn register_required(&mut self, unit: impl Into<U>) -> UnitId {
        self.required_registered += 1;
        self.push(unit.into(), true)
    }

    fn push(&mut self, unit: U, required: bool) -> UnitId {
        let id = UnitId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, unit, required });
        id
    }

    /// Advance every unit once, in registration order, then prune the dead.
    pub fn tick(&mut self, canvas: &mut Canvas, movement: Movement) -> TickOutcome {
        self.ticks += 1;

        for entry in &mut self.entries {
            entry.unit.advance(canvas, movement);
        }

        let before = self.entries.len();
        self.entries.retain(|e| e.unit.is_alive());
        let pruned = before - self.entries.len();
        if pruned > 0 {
            debug!(tick = self.ticks, pruned, "pruned finished units");
        }

        if self.required_registered > 0 && !self.entries.iter().any(|e| e.required) {
            TickOutcome::Finished
        } else {
            TickOutcome::Running
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Live unit ids in the order they advance.
    pub fn ids(&self) -> impl Iterator<Item = UnitId> + '_ {
        self.entries.iter().map(|e| e.id)
    }

    pub fn get(&self, id: UnitId) -> Option<&U> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.unit)
    }

    pub fn units(&self) -> impl Iterator<Item = &U> + '_ {
        self.entries.iter().map(|e| &e.unit)
    }
}
