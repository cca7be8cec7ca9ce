use serde::{Deserialize, Serialize};

use crate::category::ItemCategory;

/// One stock-keeping unit.
///
/// Plain data: the engine mutates `sell_in` and `quality` in place and never
/// touches `name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    /// Days left before the sell-by date; negative once expired.
    pub sell_in: i64,
    pub quality: i64,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i64, quality: i64) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    pub fn category(&self) -> ItemCategory {
        ItemCategory::classify(&self.name)
    }

    pub fn is_expired(&self) -> bool {
        self.sell_in < 0
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
