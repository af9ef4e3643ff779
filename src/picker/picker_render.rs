use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use super::picker_state::Picker;
use crate::autocomplete::{Attributes, ItemOverrides};
use crate::theme;
use crate::widgets::popup;

const INPUT_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 1;
const MENU_BORDER_HEIGHT: u16 = 2;

impl Picker {
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let layout = Layout::vertical([
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

        let input_area = layout[0];
        let menu_bounds = input_area.union(layout[1]);
        let status_area = layout[2];

        self.render_input_field(frame, input_area);
        self.render_status_line(frame, status_area);

        // Last so it overlays the body
        self.render_menu(frame, input_area, menu_bounds);
    }

    fn render_input_field(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focused {
            theme::input::BORDER_FOCUSED
        } else {
            theme::input::BORDER_UNFOCUSED
        };

        let cursor_style = if self.focused {
            theme::palette::CURSOR
        } else {
            Style::default()
        };
        self.textarea.set_cursor_style(cursor_style);

        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    " Filter ",
                    Style::default().fg(theme::input::TITLE),
                ))
                .border_style(Style::default().fg(border_color)),
        );

        frame.render_widget(&self.textarea, area);
        self.layout_regions.input_field = Some(area);
    }

    fn render_menu(&mut self, frame: &mut Frame, input_area: Rect, bounds: Rect) {
        let Some(menu) = self.controller.get_menu_props(Attributes::new()) else {
            return;
        };

        let wanted_rows = menu.item_count.clamp(1, self.max_visible());
        let wanted_height = u16::try_from(wanted_rows)
            .unwrap_or(u16::MAX)
            .saturating_add(MENU_BORDER_HEIGHT);
        let popup_area = popup::popup_below_anchor(input_area, wanted_height, bounds);
        if popup_area.height <= MENU_BORDER_HEIGHT {
            return;
        }

        popup::clear_area(frame, popup_area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::menu::BORDER))
            .style(Style::default().bg(theme::menu::BACKGROUND));
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);
        self.layout_regions.menu = Some(popup_area);

        if menu.item_count == 0 {
            let empty = Paragraph::new(Line::from(Span::styled(
                format!("{}No matches", theme::menu::ROW_PADDING),
                Style::default().fg(theme::menu::NO_MATCHES),
            )));
            frame.render_widget(empty, inner);
            return;
        }

        self.menu_viewport = inner.height as usize;
        let max_offset = menu.item_count.saturating_sub(self.menu_viewport);
        self.scroll_offset = self.scroll_offset.min(max_offset);

        let range = self.visible_range();
        let selected = self.controller.selected_item().cloned();
        let mut lines = Vec::with_capacity(range.len());

        for index in range.clone() {
            let Some(item) = self.controller.item(index).cloned() else {
                continue;
            };
            let is_selected = selected.as_ref() == Some(&item);
            let props = self
                .controller
                .get_item_props(item.clone(), index, ItemOverrides::new());

            let (prefix, base) = if props.is_highlighted {
                (
                    theme::menu::HIGHLIGHT_MARKER,
                    Style::default()
                        .fg(theme::menu::ITEM_HIGHLIGHTED_FG)
                        .bg(theme::menu::ITEM_HIGHLIGHTED_BG)
                        .add_modifier(Modifier::BOLD),
                )
            } else if is_selected {
                (
                    theme::menu::ROW_PADDING,
                    Style::default().fg(theme::menu::ITEM_SELECTED),
                )
            } else {
                (theme::menu::ROW_PADDING, Style::default().fg(theme::menu::ITEM))
            };

            let mut spans = vec![Span::styled(prefix, base)];
            spans.extend(emphasize_matches(
                &item,
                self.match_positions(index),
                base,
                base.fg(theme::menu::MATCHED).add_modifier(Modifier::UNDERLINED),
            ));
            lines.push(Line::from(spans));
        }

        frame.render_widget(Paragraph::new(lines), inner);

        self.layout_regions.menu_rows = Some(inner);
        self.layout_regions.menu_first_index = range.start;
        self.layout_regions.menu_row_count = range.len();

        if let Some(mut state) = self.menu_scrollbar_state(menu.item_count) {
            let style = Style::default().fg(theme::menu::BORDER);
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None)
                .thumb_style(style)
                .track_style(style);
            frame.render_stateful_widget(scrollbar, popup_area, &mut state);
        }
    }

    /// Scrollbar over the menu's right border, `None` while every match fits.
    ///
    /// Each scroll offset is one scrollbar position, so the thumb sits on the
    /// bottom edge once the last match is on screen.
    fn menu_scrollbar_state(&self, item_count: usize) -> Option<ScrollbarState> {
        if self.menu_viewport == 0 || item_count <= self.menu_viewport {
            return None;
        }
        let last_offset = item_count - self.menu_viewport;
        Some(
            ScrollbarState::new(last_offset + 1)
                .position(self.scroll_offset.min(last_offset))
                .viewport_content_length(self.menu_viewport),
        )
    }

    fn render_status_line(&mut self, frame: &mut Frame, area: Rect) {
        let line = if let Some(warning) = self.warning() {
            Line::from(Span::styled(
                format!(" {}", warning),
                Style::default().fg(theme::status::WARNING),
            ))
        } else if let Some(selected) = self.controller.selected_item() {
            Line::from(vec![
                Span::styled(
                    format!(" Selected: {}", selected),
                    Style::default().fg(theme::status::SELECTED),
                ),
                Span::styled(
                    " | Enter: accept | Esc: quit",
                    Style::default().fg(theme::status::TEXT),
                ),
            ])
        } else {
            Line::from(Span::styled(
                format!(
                    " {}/{} | Up/Down: move | Enter/Tab: select | Esc: close",
                    self.match_count(),
                    self.total_count()
                ),
                Style::default().fg(theme::status::TEXT),
            ))
        };

        frame.render_widget(Paragraph::new(line), area);
        self.layout_regions.status_line = Some(area);
    }
}

/// Split `text` into runs, styling the chars at `positions` with `matched`.
fn emphasize_matches(
    text: &str,
    positions: &[usize],
    base: Style,
    matched: Style,
) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_matched = false;

    for (offset, ch) in text.chars().enumerate() {
        let is_matched = positions.binary_search(&offset).is_ok();
        if is_matched != run_matched && !run.is_empty() {
            let style = if run_matched { matched } else { base };
            spans.push(Span::styled(std::mem::take(&mut run), style));
        }
        run_matched = is_matched;
        run.push(ch);
    }
    if !run.is_empty() {
        let style = if run_matched { matched } else { base };
        spans.push(Span::styled(run, style));
    }
    spans
}
