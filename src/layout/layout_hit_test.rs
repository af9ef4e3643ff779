//! Hit testing for layout regions

use ratatui::layout::Rect;

use super::layout_regions::{LayoutRegions, Region};

fn contains(rect: &Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

/// Returns the topmost region containing the given point
///
/// The menu is an overlay, so it is checked before the base regions.
pub fn region_at(regions: &LayoutRegions, x: u16, y: u16) -> Option<Region> {
    if let Some(rows) = &regions.menu_rows {
        if contains(rows, x, y) {
            let row = (y - rows.y) as usize;
            if row < regions.menu_row_count {
                return Some(Region::MenuItem(regions.menu_first_index + row));
            }
        }
    }

    if let Some(rect) = &regions.menu {
        if contains(rect, x, y) {
            return Some(Region::Menu);
        }
    }

    if let Some(rect) = &regions.input_field {
        if contains(rect, x, y) {
            return Some(Region::InputField);
        }
    }

    if let Some(rect) = &regions.status_line {
        if contains(rect, x, y) {
            return Some(Region::StatusLine);
        }
    }

    None
}
