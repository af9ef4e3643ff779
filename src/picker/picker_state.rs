use std::ops::Range;

use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

use super::matcher::{ItemMatch, ItemMatcher};
use crate::autocomplete::{AutocompleteController, AutocompleteEvent, ControlledProps};
use crate::config::Config;
use crate::layout::LayoutRegions;

/// Picker state: the item list, the input line and the controller driving the menu.
///
/// The input text is owned by the textarea and handed to the controller as a
/// controlled prop on every [`sync`](Picker::sync).
pub struct Picker {
    items: Vec<String>,
    /// Items matching the current query, best first
    matches: Vec<ItemMatch>,
    filtered_query: Option<String>,
    matcher: ItemMatcher,
    pub controller: AutocompleteController<String>,
    pub textarea: TextArea<'static>,
    pub scroll_offset: usize,
    max_visible: usize,
    /// Rows available to the menu on the last render
    pub(super) menu_viewport: usize,
    pub focused: bool,
    pub layout_regions: LayoutRegions,
    warning: Option<String>,
    accepted: Option<String>,
    should_quit: bool,
}

fn new_textarea(text: &str) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![text.to_string()]);
    textarea.set_cursor_line_style(Style::default());
    textarea.move_cursor(CursorMove::End);
    textarea
}

impl Picker {
    pub fn new(items: Vec<String>, config: &Config) -> Self {
        let controller =
            AutocompleteController::new(|item: &String| item.clone(), config.autocomplete.clone());
        let max_visible = config.picker.max_visible.max(1);

        let mut picker = Self {
            items,
            matches: Vec::new(),
            filtered_query: None,
            matcher: ItemMatcher::new(),
            controller,
            textarea: new_textarea(""),
            scroll_offset: 0,
            max_visible,
            menu_viewport: max_visible,
            focused: false,
            layout_regions: LayoutRegions::new(),
            warning: None,
            accepted: None,
            should_quit: false,
        };
        picker.sync();
        picker
    }

    /// Start with `query` in the input line.
    pub fn with_query(mut self, query: &str) -> Self {
        self.set_query(query);
        self.sync();
        self
    }

    pub fn query(&self) -> &str {
        self.textarea.lines().first().map(String::as_str).unwrap_or("")
    }

    /// Replace the input text, cursor at the end.
    pub fn set_query(&mut self, text: &str) {
        self.textarea = new_textarea(text);
    }

    /// Push this frame's props into the controller and refilter when the
    /// query changed.
    pub fn sync(&mut self) {
        let query = self.query().to_string();

        if self.filtered_query.as_deref() != Some(query.as_str()) {
            self.matches = self.matcher.filter(&query, &self.items);
            self.scroll_offset = 0;

            let visible: Vec<String> = self
                .matches
                .iter()
                .map(|found| self.items[found.index].clone())
                .collect();
            self.controller.set_items(visible);

            #[cfg(debug_assertions)]
            log::debug!("picker: {:?} matches {} items", query, self.matches.len());

            self.filtered_query = Some(query.clone());
        }

        self.controller
            .set_props(ControlledProps::new().input_value(query));
    }

    /// React to a batch of controller events, then resync.
    pub fn apply(&mut self, events: Vec<AutocompleteEvent<String>>) {
        for event in events {
            match event {
                AutocompleteEvent::Select { item, .. } => {
                    self.set_query(&item);
                }
                AutocompleteEvent::InputValueChange(text) => {
                    if text != self.query() {
                        self.set_query(&text);
                    }
                }
                AutocompleteEvent::ScrollIntoView(index) => {
                    self.ensure_visible(index);
                }
                AutocompleteEvent::Open
                | AutocompleteEvent::Close
                | AutocompleteEvent::HighlightChange(_) => {}
            }
        }
        self.sync();
    }

    /// Adjust the scroll offset so `index` is on screen.
    pub fn ensure_visible(&mut self, index: usize) {
        let viewport = self.menu_viewport.max(1);
        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if index >= self.scroll_offset.saturating_add(viewport) {
            self.scroll_offset = index + 1 - viewport;
        }
    }

    /// Scroll the menu by `delta` rows without moving the highlight.
    pub fn scroll_by(&mut self, delta: isize) {
        let max_offset = self.matches.len().saturating_sub(self.menu_viewport);
        let next = self.scroll_offset.saturating_add_signed(delta);
        self.scroll_offset = next.min(max_offset);
    }

    /// Items on screen for the current scroll position.
    pub fn visible_range(&self) -> Range<usize> {
        let end = self
            .scroll_offset
            .saturating_add(self.menu_viewport)
            .min(self.matches.len());
        self.scroll_offset.min(end)..end
    }

    /// Accept the selected item and quit. No-op without a selection.
    pub fn accept(&mut self) {
        if let Some(item) = self.controller.selected_item().cloned() {
            #[cfg(debug_assertions)]
            log::debug!("picker: accepted {:?}", item);

            self.accepted = Some(item);
            self.should_quit = true;
        }
    }

    pub fn accepted(&self) -> Option<&str> {
        self.accepted.as_deref()
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Matched char offsets of the menu row at `index`.
    pub fn match_positions(&self, index: usize) -> &[usize] {
        self.matches
            .get(index)
            .map(|found| found.positions.as_slice())
            .unwrap_or(&[])
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    pub fn show_warning(&mut self, message: &str) {
        self.warning = Some(message.to_string());
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }
}

#[cfg(test)]
#[path = "picker_state_tests.rs"]
mod picker_state_tests;
