//! Layout regions tracking for picker components

use ratatui::layout::Rect;

/// Identifies a picker region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    InputField,
    /// Menu border and padding, not on a row
    Menu,
    /// A visible menu row, by item index
    MenuItem(usize),
    StatusLine,
}

/// Tracks rendered areas of picker components
///
/// Updated during each render pass. `menu` is `None` while the menu is closed.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct LayoutRegions {
    pub input_field: Option<Rect>,
    pub menu: Option<Rect>,
    /// Rows inside the menu border
    pub menu_rows: Option<Rect>,
    /// Item index drawn on the first menu row
    pub menu_first_index: usize,
    /// Number of item rows actually drawn
    pub menu_row_count: usize,
    pub status_line: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all regions before a new render pass
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when the point lies on the input or the open menu.
    pub fn is_inside_root(&self, x: u16, y: u16) -> bool {
        matches!(
            super::region_at(self, x, y),
            Some(Region::InputField | Region::Menu | Region::MenuItem(_))
        )
    }
}
