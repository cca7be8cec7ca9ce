//! Quality bounds and the single-step helpers the rules are built from.

use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult, ValueObject};

pub const MIN_QUALITY: i64 = 0;
pub const MAX_QUALITY: i64 = 50;

/// Closed range `[min, max]` that non-legendary quality must stay in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBounds")]
pub struct QualityBounds {
    min: i64,
    max: i64,
}

#[derive(Deserialize)]
struct RawBounds {
    min: i64,
    max: i64,
}

impl TryFrom<RawBounds> for QualityBounds {
    type Error = DomainError;

    fn try_from(raw: RawBounds) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

impl ValueObject for QualityBounds {}

impl Default for QualityBounds {
    fn default() -> Self {
        Self {
            min: MIN_QUALITY,
            max: MAX_QUALITY,
        }
    }
}

impl QualityBounds {
    pub fn new(min: i64, max: i64) -> DomainResult<Self> {
        if min > max {
            return Err(DomainError::validation(format!(
                "quality floor {min} is above ceiling {max}"
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    /// One unit up, unless already at (or above) the ceiling.
    pub fn increment(&self, quality: i64) -> i64 {
        if quality < self.max { quality + 1 } else { quality }
    }

    /// One unit down, unless already at (or below) the floor.
    pub fn decrement(&self, quality: i64) -> i64 {
        if quality > self.min { quality - 1 } else { quality }
    }

    pub fn clamp(&self, quality: i64) -> i64 {
        quality.min(self.max).max(self.min)
    }

    pub fn contains(&self, quality: i64) -> bool {
        (self.min..=self.max).contains(&quality)
    }

    pub fn ensure_contains(&self, quality: i64) -> DomainResult<()> {
        if self.contains(quality) {
            Ok(())
        } else {
            Err(DomainError::invariant(format!(
                "quality {quality} outside [{}, {}]",
                self.min, self.max
            )))
        }
    }
}
