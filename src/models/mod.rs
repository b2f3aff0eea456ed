mod item;

pub use item::{EditSession, Item, ItemDraft};
