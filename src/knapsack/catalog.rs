//! The bundled reference instance: ten household items, capacity 30.

use super::types::Item;

/// Weight capacity of the reference instance.
pub const REFERENCE_CAPACITY: u64 = 30;

/// Population size used with the reference instance.
pub const REFERENCE_POPULATION: usize = 10;

/// The reference item catalog, in bit order.
pub fn reference_items() -> Vec<Item> {
    vec![
        Item::new("Clay Pot", 20, 30.0),
        Item::new("Tooth Pick", 1, 3.0),
        Item::new("Mouse Pad", 4, 50.0),
        Item::new("Canvas", 10, 40.0),
        Item::new("Pencil", 2, 4.0),
        Item::new("Mirror", 10, 30.0),
        Item::new("Eraser", 2, 3.0),
        Item::new("Bottle Cap", 1, 1.0),
        Item::new("Rusty Nail", 5, 1.0),
        Item::new("Peanuts", 6, 10.0),
    ]
}
