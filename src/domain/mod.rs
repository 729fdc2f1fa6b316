//! Domain types for the inventory.

pub mod item;

pub use item::{now_timestamp, Item, NewItem};
