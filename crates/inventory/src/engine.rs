//! Daily update rules.
//!
//! Model:
//! - Legendary items are skipped outright.
//! - Everything else loses one day of sell-in *first*; "expired" below means
//!   the post-decrement `sell_in < 0`.
//! - Quality then moves in single bounded steps per category, followed by a
//!   final clamp into the bounds.

use crate::category::ItemCategory;
use crate::item::Item;
use crate::quality::QualityBounds;

/// Stateless rule engine (aside from its configured bounds).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct UpdateEngine {
    bounds: QualityBounds,
}

impl UpdateEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bounds(mut self, bounds: QualityBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn bounds(&self) -> QualityBounds {
        self.bounds
    }

    /// Advance every item by one simulated day.
    ///
    /// Items are independent; the exclusive borrow is the only
    /// synchronization needed.
    #[tracing::instrument(level = "debug", skip_all, fields(items = items.len()))]
    pub fn advance_day(&self, items: &mut [Item]) {
        for item in items.iter_mut() {
            let category = self.update_item(item);
            tracing::trace!(
                item = %item.name,
                category = ?category,
                sell_in = item.sell_in,
                quality = item.quality,
                "item advanced"
            );
        }
    }

    /// Apply one day's rules to a single item, returning the category used.
    pub fn update_item(&self, item: &mut Item) -> ItemCategory {
        let category = item.category();
        if category.is_legendary() {
            return category;
        }

        item.sell_in = item.sell_in.saturating_sub(1);

        match category {
            ItemCategory::Legendary => {}
            ItemCategory::Ripening => self.ripen(item),
            ItemCategory::EventTicket => self.approach_event(item),
            ItemCategory::Standard => self.degrade(item),
        }

        item.quality = self.bounds.clamp(item.quality);
        category
    }

    fn ripen(&self, item: &mut Item) {
        let steps = if item.is_expired() { 2 } else { 1 };
        self.raise(item, steps);
    }

    fn approach_event(&self, item: &mut Item) {
        if item.is_expired() {
            item.quality = self.bounds.min();
            return;
        }

        let steps = match item.sell_in {
            i64::MIN..=4 => 3,
            5..=9 => 2,
            _ => 1,
        };
        self.raise(item, steps);
    }

    fn degrade(&self, item: &mut Item) {
        let steps = if item.is_expired() { 2 } else { 1 };
        for _ in 0..steps {
            item.quality = self.bounds.decrement(item.quality);
        }
    }

    fn raise(&self, item: &mut Item, steps: u8) {
        for _ in 0..steps {
            item.quality = self.bounds.increment(item.quality);
        }
    }
}
