//! Registry of the items currently shown in the menu
//!
//! Indices are contiguous from 0 in render order. The preferred way to fill it
//! is `from_items` with the already-filtered list; the two `register_*`
//! operations exist for consumers that register rows while rendering.

use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct VisibleItemRegistry<T> {
    items: BTreeMap<usize, T>,
    item_count: usize,
}

impl<T> Default for VisibleItemRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> VisibleItemRegistry<T> {
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
            item_count: 0,
        }
    }

    /// Build the registry for one render pass from the filtered item list.
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
        let items: BTreeMap<usize, T> = items.into_iter().enumerate().collect();
        let item_count = items.len();
        Self { items, item_count }
    }

    /// Declare how many items are visible.
    ///
    /// Entries at or beyond the new count are dropped so navigation never
    /// lands on a stale row.
    pub fn register_item_count(&mut self, count: usize) {
        self.item_count = count;
        self.items.retain(|index, _| *index < count);
    }

    /// Store the item rendered at `index`, overwriting any previous entry.
    ///
    /// An index outside the declared count is kept (so pointer interaction
    /// still works) but keyboard navigation never reaches it.
    pub fn register_visible_item(&mut self, index: usize, item: T) {
        self.items.insert(index, item);
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(&index)
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Number of stored entries, which may differ from the declared count.
    pub fn registered_len(&self) -> usize {
        self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.item_count = 0;
    }

    /// Clamp an index into `0..item_count`, or `None` when there are no items.
    pub fn clamp(&self, index: usize) -> Option<usize> {
        if self.item_count == 0 {
            None
        } else {
            Some(index.min(self.item_count - 1))
        }
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;
