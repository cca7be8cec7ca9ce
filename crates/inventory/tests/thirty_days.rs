//! Full-inventory run over a month of simulated days.

use gildedrose_inventory::{
    AGED_BRIE, BACKSTAGE_PASSES, GildedRose, Item, ItemCategory, SULFURAS,
};

fn fixture() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(AGED_BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(SULFURAS, 0, 80),
        Item::new(SULFURAS, -1, 80),
        Item::new(BACKSTAGE_PASSES, 15, 20),
        Item::new(BACKSTAGE_PASSES, 10, 49),
        Item::new(BACKSTAGE_PASSES, 5, 49),
        Item::new("Conjured Mana Cake", 3, 6),
    ]
}

#[test]
fn invariants_hold_every_day() {
    gildedrose_observability::init_with_default_filter("gildedrose_inventory=debug");

    let initial = fixture();
    let mut shop = GildedRose::new(initial.clone());

    for day in 1..=30i64 {
        shop.update_quality();
        shop.audit().unwrap();

        for (before, after) in initial.iter().zip(shop.items()) {
            assert_eq!(before.name, after.name);
            if before.category() == ItemCategory::Legendary {
                assert_eq!(before, after);
            } else {
                assert_eq!(after.sell_in, before.sell_in - day);
            }
        }
    }
    assert_eq!(shop.day(), 30);
}

#[test]
fn known_states_after_a_few_days() {
    let mut shop = GildedRose::new(fixture());
    for _ in 0..3 {
        shop.update_quality();
    }

    let rendered: Vec<String> = shop.items().iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        [
            "+5 Dexterity Vest, 7, 17",
            "Aged Brie, -1, 4",
            "Elixir of the Mongoose, 2, 4",
            "Sulfuras, Hand of Ragnaros, 0, 80",
            "Sulfuras, Hand of Ragnaros, -1, 80",
            "Backstage passes to a TAFKAL80ETC concert, 12, 23",
            "Backstage passes to a TAFKAL80ETC concert, 7, 50",
            "Backstage passes to a TAFKAL80ETC concert, 2, 50",
            "Conjured Mana Cake, 0, 3",
        ]
    );
}

#[test]
fn passes_are_worthless_after_the_concert() {
    let mut shop = GildedRose::new(vec![Item::new(BACKSTAGE_PASSES, 5, 10)]);
    let mut history = Vec::new();
    for _ in 0..7 {
        shop.update_quality();
        history.push(shop.items()[0].quality);
    }
    assert_eq!(history, [13, 16, 19, 22, 25, 0, 0]);
}
