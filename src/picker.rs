//! Terminal picker built on the autocomplete controller

mod loader;
mod matcher;
mod picker_events;
mod picker_render;
mod picker_state;

pub use loader::{parse_items, read_items};
pub use matcher::{ItemMatch, ItemMatcher};
pub use picker_state::Picker;
