//! Inventory domain module: daily sell-in and quality updates.
//!
//! This crate contains business rules for the shop's stock, implemented purely
//! as deterministic domain logic (no IO, no storage).

pub mod category;
pub mod engine;
pub mod gilded_rose;
pub mod item;
pub mod quality;

pub use category::{AGED_BRIE, BACKSTAGE_PASSES, ItemCategory, SULFURAS};
pub use engine::UpdateEngine;
pub use gilded_rose::GildedRose;
pub use item::Item;
pub use quality::{MAX_QUALITY, MIN_QUALITY, QualityBounds};
