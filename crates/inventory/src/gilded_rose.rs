use gildedrose_core::{DomainError, DomainResult};

use crate::engine::UpdateEngine;
use crate::item::Item;

/// An owned inventory stepped one day at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GildedRose {
    items: Vec<Item>,
    engine: UpdateEngine,
    day: u64,
}

impl GildedRose {
    pub fn new(items: Vec<Item>) -> Self {
        Self::with_engine(items, UpdateEngine::new())
    }

    pub fn with_engine(items: Vec<Item>, engine: UpdateEngine) -> Self {
        Self {
            items,
            engine,
            day: 0,
        }
    }

    /// Advance the whole inventory by one day.
    pub fn update_quality(&mut self) {
        self.engine.advance_day(&mut self.items);
        self.day += 1;
        tracing::debug!(day = self.day, items = self.items.len(), "day closed");
    }

    /// Number of days advanced so far.
    pub fn day(&self) -> u64 {
        self.day
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Check that every non-legendary item is within the engine's bounds.
    ///
    /// Legendary items are exempt; their quality is never bound-checked.
    pub fn audit(&self) -> DomainResult<()> {
        let bounds = self.engine.bounds();
        for item in self.items.iter().filter(|i| !i.category().is_legendary()) {
            bounds.ensure_contains(item.quality).map_err(|e| match e {
                DomainError::InvariantViolation(msg) => {
                    DomainError::invariant(format!("{}: {msg}", item.name))
                }
                other => other,
            })?;
        }
        Ok(())
    }
}
