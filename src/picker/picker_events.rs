use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::io;
use std::time::Duration;

use super::picker_state::Picker;
use crate::autocomplete::{
    InputEvent, InputOverrides, ItemEvent, ItemOverrides, Key, PointerTarget, map_key,
};
use crate::layout::{Region, region_at};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl Picker {
    /// Focus the input line, opening the menu.
    pub fn start(&mut self) {
        self.dispatch_input(InputEvent::Focus);
    }

    pub fn handle_events(&mut self) -> io::Result<()> {
        let events = self.controller.tick();
        if !events.is_empty() {
            self.apply(events);
        }

        if event::poll(EVENT_POLL_TIMEOUT)? {
            let event = event::read()?;
            self.handle_event(event);
        }
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::FocusGained => self.dispatch_input(InputEvent::Focus),
            Event::FocusLost => self.dispatch_input(InputEvent::Blur),
            Event::Paste(text) => self.handle_paste_event(&text),
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        let is_open = self.controller.is_open();
        match map_key(key) {
            Some(Key::Escape) if !is_open => self.quit(),
            Some(Key::Enter) if !is_open => self.accept(),
            Some(Key::ArrowDown | Key::ArrowUp) if !is_open => {
                let events = self.controller.actions().open();
                self.apply(events);
            }
            Some(mapped) => self.dispatch_input(InputEvent::KeyDown(mapped)),
            None => self.edit_input(key),
        }
    }

    fn edit_input(&mut self, key: KeyEvent) {
        if !self.textarea.input(key) {
            return;
        }

        // Single line only
        if self.textarea.lines().len() > 1 {
            let joined = self.textarea.lines().concat();
            self.set_query(&joined);
        }

        let text = self.query().to_string();
        self.dispatch_input(InputEvent::Change(text));
    }

    fn handle_paste_event(&mut self, text: &str) {
        let line: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        if line.is_empty() {
            return;
        }
        self.textarea.insert_str(&line);
        let text = self.query().to_string();
        self.dispatch_input(InputEvent::Change(text));
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let region = region_at(&self.layout_regions, mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => match region {
                Some(Region::MenuItem(index)) => self.dispatch_item(index, ItemEvent::Click),
                _ => self.pointer_down(mouse),
            },
            MouseEventKind::Down(_) => self.pointer_down(mouse),
            MouseEventKind::Moved => {
                if let Some(Region::MenuItem(index)) = region {
                    self.dispatch_item(index, ItemEvent::MouseMove);
                }
            }
            MouseEventKind::ScrollDown if self.is_over_menu(region) => self.scroll_by(1),
            MouseEventKind::ScrollUp if self.is_over_menu(region) => self.scroll_by(-1),
            _ => {}
        }
    }

    fn is_over_menu(&self, region: Option<Region>) -> bool {
        matches!(region, Some(Region::Menu | Region::MenuItem(_)))
    }

    fn pointer_down(&mut self, mouse: MouseEvent) {
        let target = if self.layout_regions.is_inside_root(mouse.column, mouse.row) {
            PointerTarget::Inside
        } else {
            PointerTarget::Outside
        };

        let root = self.controller.get_root_props();
        let events = root.dispatch_pointer_down(&mut self.controller, target);
        self.apply(events);
    }

    fn dispatch_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Focus => self.focused = true,
            InputEvent::Blur => self.focused = false,
            InputEvent::Change(_) | InputEvent::KeyDown(_) => {}
        }

        let mut props = self.controller.get_input_props(InputOverrides::new());
        let events = props.dispatch(&mut self.controller, event);
        self.apply(events);
    }

    fn dispatch_item(&mut self, index: usize, event: ItemEvent) {
        let Some(item) = self.controller.item(index).cloned() else {
            return;
        };

        let mut props = self
            .controller
            .get_item_props(item, index, ItemOverrides::new());
        let events = props.dispatch(&mut self.controller, event);
        self.apply(events);
    }
}

#[cfg(test)]
#[path = "picker_events_tests.rs"]
mod picker_events_tests;
