//! Prop getters: attribute/handler bundles for the rendered tree
//!
//! Each getter merges caller overrides with the controller's own attributes
//! (controller-owned keys win) and returns a bundle whose `dispatch` runs the
//! internal handler first and the caller's handlers after it.

use std::collections::BTreeMap;

use super::controller::{AutocompleteController, Events};
use super::events::Key;
use super::handler_chain::HandlerChain;

pub type Attributes = BTreeMap<String, String>;

fn item_id(index: usize) -> String {
    format!("autocomplete-item-{}", index)
}

fn merge(
    mut overrides: Attributes,
    owned: impl IntoIterator<Item = (&'static str, String)>,
) -> Attributes {
    for (key, value) in owned {
        overrides.insert(key.to_string(), value);
    }
    overrides
}

/// Where a pointer press landed relative to the root container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Inside,
    Outside,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RootProps {
    pub attributes: Attributes,
}

impl RootProps {
    /// Click-outside detection scope: a press outside closes the menu.
    pub fn dispatch_pointer_down<T: Clone>(
        &self,
        controller: &mut AutocompleteController<T>,
        target: PointerTarget,
    ) -> Events<T> {
        match target {
            PointerTarget::Inside => Vec::new(),
            PointerTarget::Outside => controller.handle_click_outside(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Focus,
    Blur,
    Change(String),
    KeyDown(Key),
}

/// Caller additions for the input bundle.
#[derive(Debug, Default)]
pub struct InputOverrides<'a> {
    attributes: Attributes,
    on_focus: HandlerChain<'a, ()>,
    on_blur: HandlerChain<'a, ()>,
    on_change: HandlerChain<'a, String>,
    on_key_down: HandlerChain<'a, Key>,
}

impl<'a> InputOverrides<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn on_focus(mut self, mut handler: impl FnMut() + 'a) -> Self {
        self.on_focus.push(move |_: &()| handler());
        self
    }

    pub fn on_blur(mut self, mut handler: impl FnMut() + 'a) -> Self {
        self.on_blur.push(move |_: &()| handler());
        self
    }

    pub fn on_change(mut self, handler: impl FnMut(&String) + 'a) -> Self {
        self.on_change.push(handler);
        self
    }

    pub fn on_key_down(mut self, handler: impl FnMut(&Key) + 'a) -> Self {
        self.on_key_down.push(handler);
        self
    }
}

#[derive(Debug)]
pub struct InputProps<'a> {
    pub value: String,
    pub attributes: Attributes,
    handlers: InputOverrides<'a>,
}

impl InputProps<'_> {
    pub fn dispatch<T: Clone>(
        &mut self,
        controller: &mut AutocompleteController<T>,
        event: InputEvent,
    ) -> Events<T> {
        match event {
            InputEvent::Focus => {
                let events = controller.handle_focus();
                self.handlers.on_focus.run(&());
                events
            }
            InputEvent::Blur => {
                let events = controller.handle_blur();
                self.handlers.on_blur.run(&());
                events
            }
            InputEvent::Change(text) => {
                let events = controller.handle_input_change(text.clone());
                self.handlers.on_change.run(&text);
                events
            }
            InputEvent::KeyDown(key) => {
                let events = controller.handle_key_down(key);
                self.handlers.on_key_down.run(&key);
                events
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuProps {
    pub attributes: Attributes,
    pub item_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemEvent {
    Click,
    MouseEnter,
    MouseMove,
}

/// Caller additions for an item bundle. Handlers receive the row index.
#[derive(Debug, Default)]
pub struct ItemOverrides<'a> {
    attributes: Attributes,
    on_click: HandlerChain<'a, usize>,
    on_mouse_enter: HandlerChain<'a, usize>,
    on_mouse_move: HandlerChain<'a, usize>,
}

impl<'a> ItemOverrides<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn on_click(mut self, handler: impl FnMut(&usize) + 'a) -> Self {
        self.on_click.push(handler);
        self
    }

    pub fn on_mouse_enter(mut self, handler: impl FnMut(&usize) + 'a) -> Self {
        self.on_mouse_enter.push(handler);
        self
    }

    pub fn on_mouse_move(mut self, handler: impl FnMut(&usize) + 'a) -> Self {
        self.on_mouse_move.push(handler);
        self
    }
}

#[derive(Debug)]
pub struct ItemProps<'a> {
    pub index: usize,
    pub is_highlighted: bool,
    pub attributes: Attributes,
    handlers: ItemOverrides<'a>,
}

impl ItemProps<'_> {
    pub fn dispatch<T: Clone>(
        &mut self,
        controller: &mut AutocompleteController<T>,
        event: ItemEvent,
    ) -> Events<T> {
        let index = self.index;
        match event {
            ItemEvent::Click => {
                let events = controller.handle_item_click(index);
                self.handlers.on_click.run(&index);
                events
            }
            ItemEvent::MouseEnter => {
                let events = controller.handle_item_hover(index);
                self.handlers.on_mouse_enter.run(&index);
                events
            }
            ItemEvent::MouseMove => {
                let events = controller.handle_item_hover(index);
                self.handlers.on_mouse_move.run(&index);
                events
            }
        }
    }
}

impl<T: Clone> AutocompleteController<T> {
    pub fn get_root_props(&self) -> RootProps {
        RootProps {
            attributes: merge(
                Attributes::new(),
                [
                    ("role", String::from("combobox")),
                    ("aria-haspopup", String::from("listbox")),
                    ("aria-expanded", self.is_open().to_string()),
                ],
            ),
        }
    }

    pub fn get_input_props<'a>(&self, overrides: InputOverrides<'a>) -> InputProps<'a> {
        let InputOverrides {
            attributes,
            on_focus,
            on_blur,
            on_change,
            on_key_down,
        } = overrides;

        let mut owned = vec![
            ("value", self.input_value().to_string()),
            ("autocomplete", String::from("off")),
            ("aria-autocomplete", String::from("list")),
            ("aria-expanded", self.is_open().to_string()),
        ];
        if let Some(index) = self.highlighted_index() {
            owned.push(("aria-activedescendant", item_id(index)));
        }

        InputProps {
            value: self.input_value().to_string(),
            attributes: merge(attributes, owned),
            handlers: InputOverrides {
                attributes: Attributes::new(),
                on_focus,
                on_blur,
                on_change,
                on_key_down,
            },
        }
    }

    /// Menu container attributes, `None` while the menu is closed.
    pub fn get_menu_props(&self, overrides: Attributes) -> Option<MenuProps> {
        if !self.is_open() {
            return None;
        }
        Some(MenuProps {
            attributes: merge(overrides, [("role", String::from("listbox"))]),
            item_count: self.item_count(),
        })
    }

    /// Bundle for one rendered row; also records `item` at `index`.
    pub fn get_item_props<'a>(
        &mut self,
        item: T,
        index: usize,
        overrides: ItemOverrides<'a>,
    ) -> ItemProps<'a> {
        self.register_visible_item(index, item);

        let is_highlighted = self.highlighted_index() == Some(index);
        let ItemOverrides {
            attributes,
            on_click,
            on_mouse_enter,
            on_mouse_move,
        } = overrides;

        ItemProps {
            index,
            is_highlighted,
            attributes: merge(
                attributes,
                [
                    ("id", item_id(index)),
                    ("role", String::from("option")),
                    ("aria-selected", is_highlighted.to_string()),
                ],
            ),
            handlers: ItemOverrides {
                attributes: Attributes::new(),
                on_click,
                on_mouse_enter,
                on_mouse_move,
            },
        }
    }
}

#[cfg(test)]
#[path = "props_tests.rs"]
mod props_tests;
