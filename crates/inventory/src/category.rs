//! Item categories and their name-based classification.

use serde::{Deserialize, Serialize};

pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
pub const AGED_BRIE: &str = "Aged Brie";
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Update policy selected by an item's name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    /// Never sold, never degrades.
    Legendary,
    /// Improves with age, twice as fast once expired.
    Ripening,
    /// Gains value as the event approaches; worthless afterwards.
    EventTicket,
    /// Degrades with age, twice as fast once expired.
    Standard,
}

impl ItemCategory {
    /// Exact, case-sensitive match; anything unrecognised is `Standard`.
    pub fn classify(name: &str) -> Self {
        match name {
            SULFURAS => ItemCategory::Legendary,
            AGED_BRIE => ItemCategory::Ripening,
            BACKSTAGE_PASSES => ItemCategory::EventTicket,
            _ => ItemCategory::Standard,
        }
    }

    pub fn is_legendary(self) -> bool {
        matches!(self, ItemCategory::Legendary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_map_to_their_category() {
        assert_eq!(ItemCategory::classify(SULFURAS), ItemCategory::Legendary);
        assert_eq!(ItemCategory::classify(AGED_BRIE), ItemCategory::Ripening);
        assert_eq!(
            ItemCategory::classify(BACKSTAGE_PASSES),
            ItemCategory::EventTicket
        );
    }

    #[test]
    fn near_misses_fall_back_to_standard() {
        for name in [
            "aged brie",
            "Aged Brie ",
            "Sulfuras",
            "Backstage passes to a Metallica concert",
            "Conjured Mana Cake",
            "",
        ] {
            assert_eq!(ItemCategory::classify(name), ItemCategory::Standard, "{name:?}");
        }
    }
}
