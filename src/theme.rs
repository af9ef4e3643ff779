//! Centralized theme configuration for the picker.
//!
//! Render code uses `theme::module::CONSTANT`; no `Color::*` literals in
//! render files.

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);

    pub const WARNING: Color = Color::Rgb(255, 217, 61);
    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const GREEN: Color = Color::Rgb(107, 203, 119);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);

    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Input field styles
pub mod input {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::CYAN;
    pub const BORDER_UNFOCUSED: Color = palette::TEXT_DIM;
    pub const TITLE: Color = palette::PURPLE;
}

/// Suggestion menu styles
pub mod menu {
    use super::*;

    pub const BORDER: Color = palette::CYAN;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const ITEM: Color = palette::TEXT;
    pub const ITEM_HIGHLIGHTED_FG: Color = palette::TEXT;
    pub const ITEM_HIGHLIGHTED_BG: Color = palette::BG_HIGHLIGHT;
    pub const ITEM_SELECTED: Color = palette::GREEN;
    pub const MATCHED: Color = palette::CYAN;
    pub const NO_MATCHES: Color = palette::TEXT_MUTED;
    pub const HIGHLIGHT_MARKER: &str = "► ";
    pub const ROW_PADDING: &str = "  ";
}

/// Status line styles
pub mod status {
    use super::*;

    pub const TEXT: Color = palette::TEXT_MUTED;
    pub const WARNING: Color = palette::WARNING;
    pub const SELECTED: Color = palette::GREEN;
}
