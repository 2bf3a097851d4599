//! Routine state container
//!
//! Owns the checklist and the selected affirmation. Every mutation applies
//! its change first, then calls each subscriber synchronously, in
//! subscription order, before returning.

use super::affirmation::AffirmationPool;
use super::checklist::{Checklist, ChecklistEntry};
use crate::error::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Change notification delivered to subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutineEvent {
    EntryToggled { index: usize, checked: bool },
    AffirmationChanged { index: usize },
}

/// Handle returned by [`Routine::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&RoutineEvent)>;

pub struct Routine<R = StdRng> {
    checklist: Checklist,
    pool: AffirmationPool,
    selected: usize,
    rng: R,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl Routine<StdRng> {
    /// Default checklist and affirmations with an entropy-seeded RNG
    pub fn initialize() -> Self {
        Routine::with_rng(
            Checklist::default(),
            AffirmationPool::default(),
            StdRng::from_entropy(),
        )
    }
}

impl<R: Rng> Routine<R> {
    /// Build a routine and pick the first affirmation with `rng`
    pub fn with_rng(checklist: Checklist, pool: AffirmationPool, mut rng: R) -> Self {
        let selected = pool.pick(&mut rng);
        Routine {
            checklist,
            pool,
            selected,
            rng,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn entries(&self) -> &[ChecklistEntry] {
        self.checklist.entries()
    }

    pub fn checklist(&self) -> &Checklist {
        &self.checklist
    }

    pub fn pool(&self) -> &AffirmationPool {
        &self.pool
    }

    /// Currently displayed affirmation; always a pool member
    pub fn selected_affirmation(&self) -> &str {
        self.pool.get(self.selected).unwrap_or_default()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Flip the entry at `index` and notify subscribers.
    /// An unknown index leaves state untouched and notifies nobody.
    pub fn toggle(&mut self, index: usize) -> Result<bool> {
        let checked = self.checklist.toggle(index)?;
        debug!(index, checked, "Checklist entry toggled");
        self.notify(RoutineEvent::EntryToggled { index, checked });
        Ok(checked)
    }

    /// Draw a new affirmation uniformly from the pool and notify subscribers
    pub fn reshuffle_affirmation(&mut self) -> &str {
        self.selected = self.pool.pick(&mut self.rng);
        debug!(index = self.selected, "Affirmation reshuffled");
        self.notify(RoutineEvent::AffirmationChanged {
            index: self.selected,
        });
        self.selected_affirmation()
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&RoutineEvent) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    fn notify(&mut self, event: RoutineEvent) {
        for (_, observer) in self.observers.iter_mut() {
            observer(&event);
        }
    }
}

impl<R> std::fmt::Debug for Routine<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Routine")
            .field("checklist", &self.checklist)
            .field("pool", &self.pool)
            .field("selected", &self.selected)
            .field("observers", &self.observers.len())
            .finish()
    }
}
