//! Headless autocomplete controller
//!
//! Owns the open/closed state, the input text, the highlighted row and the
//! selected item. Every handler returns the events it produced; controlled
//! fields are never mutated here, only reported.

use std::fmt;
use std::time::Instant;

use super::blur_timer::BlurTimer;
use super::events::{AutocompleteEvent, InteractionState, Key, SelectMeta, SelectTrigger};
use super::field_mode::{ControlledProps, FieldMode};
use super::options::AutocompleteOptions;
use super::registry::VisibleItemRegistry;

pub type Events<T> = Vec<AutocompleteEvent<T>>;

type ItemToString<T> = Box<dyn Fn(&T) -> String>;

pub struct AutocompleteController<T> {
    options: AutocompleteOptions,
    item_to_string: ItemToString<T>,
    is_open: FieldMode<bool>,
    input_value: FieldMode<String>,
    highlighted_index: FieldMode<Option<usize>>,
    selected_item: FieldMode<Option<T>>,
    /// Open/close already requested from the caller this render (controlled `is_open`)
    requested_open: Option<bool>,
    registry: VisibleItemRegistry<T>,
    blur_timer: BlurTimer,
}

impl<T: fmt::Debug> fmt::Debug for AutocompleteController<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutocompleteController")
            .field("is_open", &self.is_open)
            .field("input_value", &self.input_value)
            .field("highlighted_index", &self.highlighted_index)
            .field("selected_item", &self.selected_item)
            .field("registry", &self.registry)
            .field("blur_timer", &self.blur_timer)
            .finish_non_exhaustive()
    }
}

impl<T: Clone> AutocompleteController<T> {
    pub fn new(
        item_to_string: impl Fn(&T) -> String + 'static,
        options: AutocompleteOptions,
    ) -> Self {
        let blur_timer = BlurTimer::new(options.blur_close_delay());
        Self {
            options,
            item_to_string: Box::new(item_to_string),
            is_open: FieldMode::Uncontrolled(false),
            input_value: FieldMode::Uncontrolled(String::new()),
            highlighted_index: FieldMode::Uncontrolled(None),
            selected_item: FieldMode::Uncontrolled(None),
            requested_open: None,
            registry: VisibleItemRegistry::new(),
            blur_timer,
        }
    }

    /// Start open (uncontrolled).
    pub fn with_initial_open(mut self, is_open: bool) -> Self {
        self.is_open = FieldMode::Uncontrolled(is_open);
        self
    }

    /// Start with text in the input (uncontrolled).
    pub fn with_initial_input_value(mut self, value: impl Into<String>) -> Self {
        self.input_value = FieldMode::Uncontrolled(value.into());
        self
    }

    /// Apply this render's controlled props.
    pub fn set_props(&mut self, props: ControlledProps<T>) {
        self.is_open.sync(props.is_open);
        self.input_value.sync(props.input_value);
        self.highlighted_index.sync(props.highlighted_index);
        self.selected_item.sync(props.selected_item);
        self.requested_open = None;
    }

    /// Replace the visible items with the caller's filtered list.
    pub fn set_items(&mut self, items: impl IntoIterator<Item = T>) {
        self.registry = VisibleItemRegistry::from_items(items);
        self.clamp_highlight();
    }

    pub fn register_item_count(&mut self, count: usize) {
        self.registry.register_item_count(count);
        self.clamp_highlight();
    }

    pub fn register_visible_item(&mut self, index: usize, item: T) {
        self.registry.register_visible_item(index, item);
    }

    pub fn is_open(&self) -> bool {
        *self.is_open.get()
    }

    pub fn input_value(&self) -> &str {
        self.input_value.get()
    }

    /// The highlighted row, `None` while the menu is closed.
    pub fn highlighted_index(&self) -> Option<usize> {
        if !self.is_open() {
            return None;
        }
        let count = self.registry.item_count();
        self.highlighted_index
            .get()
            .filter(|index| *index < count || self.registry.get(*index).is_some())
    }

    /// The stored highlight, kept across close for reopening.
    pub fn last_highlighted_index(&self) -> Option<usize> {
        *self.highlighted_index.get()
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.selected_item.get().as_ref()
    }

    pub fn item_count(&self) -> usize {
        self.registry.item_count()
    }

    pub fn item(&self, index: usize) -> Option<&T> {
        self.registry.get(index)
    }

    pub fn item_to_string(&self, item: &T) -> String {
        (self.item_to_string)(item)
    }

    pub fn options(&self) -> &AutocompleteOptions {
        &self.options
    }

    pub fn has_pending_close(&self) -> bool {
        self.blur_timer.is_pending()
    }

    pub fn state(&self) -> InteractionState<T> {
        InteractionState {
            is_open: self.is_open(),
            input_value: self.input_value().to_string(),
            highlighted_index: self.highlighted_index(),
            selected_item: self.selected_item().cloned(),
        }
    }

    pub fn actions(&mut self) -> Actions<'_, T> {
        Actions { controller: self }
    }

    pub fn handle_focus(&mut self) -> Events<T> {
        self.blur_timer.cancel();
        self.open()
    }

    pub fn handle_blur(&mut self) -> Events<T> {
        self.handle_blur_at(Instant::now())
    }

    /// Arm the deferred close. Nothing closes until [`tick_at`](Self::tick_at).
    pub fn handle_blur_at(&mut self, now: Instant) -> Events<T> {
        if self.effective_open() {
            self.blur_timer.arm_at(now);
        }
        Vec::new()
    }

    pub fn tick(&mut self) -> Events<T> {
        self.tick_at(Instant::now())
    }

    /// Fire the deferred close if its delay has elapsed.
    pub fn tick_at(&mut self, now: Instant) -> Events<T> {
        if self.blur_timer.take_due_at(now) {
            #[cfg(debug_assertions)]
            log::debug!("autocomplete: blur close fired");
            self.close()
        } else {
            Vec::new()
        }
    }

    pub fn handle_click_outside(&mut self) -> Events<T> {
        self.close()
    }

    pub fn handle_input_change(&mut self, text: impl Into<String>) -> Events<T> {
        let text = text.into();
        let mut events = Vec::new();

        self.input_value.request(text.clone());
        events.push(AutocompleteEvent::InputValueChange(text));

        if self.effective_open() {
            self.reset_highlight(&mut events);
        } else {
            events.extend(self.open());
        }
        events
    }

    pub fn handle_key_down(&mut self, key: Key) -> Events<T> {
        match key {
            Key::Escape => self.close(),
            Key::ArrowDown => self.navigate(|current| current.map_or(0, |index| index + 1)),
            Key::ArrowUp => self.navigate(|current| current.map_or(0, |index| index.saturating_sub(1))),
            Key::Enter if self.options.should_select_with_enter => {
                self.select_highlighted(SelectTrigger::Enter)
            }
            Key::Tab if self.options.should_select_with_tab => {
                self.select_highlighted(SelectTrigger::Tab)
            }
            Key::Enter | Key::Tab | Key::Other => Vec::new(),
        }
    }

    /// Pointer over a row: highlight without scrolling.
    pub fn handle_item_hover(&mut self, index: usize) -> Events<T> {
        if !self.effective_open() || self.registry.get(index).is_none() {
            return Vec::new();
        }
        let mut events = Vec::new();
        self.set_highlight(index, &mut events);
        events
    }

    /// Click on a row always selects, whatever the Enter/Tab flags say.
    pub fn handle_item_click(&mut self, index: usize) -> Events<T> {
        self.blur_timer.cancel();
        self.select_index(index, SelectTrigger::Click)
    }

    /// Open the menu. For a controlled `is_open` only `Open` is reported.
    pub fn open(&mut self) -> Events<T> {
        if self.effective_open() {
            return Vec::new();
        }

        #[cfg(debug_assertions)]
        log::debug!("autocomplete: open");

        let mut events = Vec::new();
        self.request_open(true);
        events.push(AutocompleteEvent::Open);
        self.reset_highlight(&mut events);
        events
    }

    /// Close the menu. At most one `Close` per logical close.
    pub fn close(&mut self) -> Events<T> {
        self.blur_timer.cancel();
        if !self.effective_open() {
            return Vec::new();
        }

        #[cfg(debug_assertions)]
        log::debug!("autocomplete: close");

        let mut events = Vec::new();
        self.request_open(false);
        events.push(AutocompleteEvent::Close);

        if self.options.reset_input_on_close {
            self.input_value.request(String::new());
            events.push(AutocompleteEvent::InputValueChange(String::new()));
        }
        events
    }

    /// Tear down the widget, dropping any pending close.
    pub fn unmount(mut self) {
        if self.blur_timer.cancel() {
            #[cfg(debug_assertions)]
            log::debug!("autocomplete: unmounted with pending close, cancelled");
        }
    }

    fn effective_open(&self) -> bool {
        self.requested_open.unwrap_or_else(|| self.is_open())
    }

    fn request_open(&mut self, open: bool) {
        if !self.is_open.request(open) {
            self.requested_open = Some(open);
        }
    }

    fn navigate(&mut self, step: impl Fn(Option<usize>) -> usize) -> Events<T> {
        let count = self.registry.item_count();
        if !self.effective_open() || count == 0 {
            return Vec::new();
        }

        let current = self.highlighted_index.get().filter(|index| *index < count);
        let next = step(current).min(count - 1);

        let mut events = Vec::new();
        self.set_highlight(next, &mut events);
        events.push(AutocompleteEvent::ScrollIntoView(next));
        events
    }

    fn select_highlighted(&mut self, trigger: SelectTrigger) -> Events<T> {
        match self.highlighted_index() {
            Some(index) => self.select_index(index, trigger),
            None => Vec::new(),
        }
    }

    fn select_index(&mut self, index: usize, trigger: SelectTrigger) -> Events<T> {
        if self.registry.is_empty() {
            return Vec::new();
        }
        let Some(item) = self.registry.get(index).cloned() else {
            return Vec::new();
        };

        #[cfg(debug_assertions)]
        log::debug!("autocomplete: select index {} via {}", index, trigger);

        let mut events = vec![AutocompleteEvent::Select {
            item: item.clone(),
            state: self.state(),
            meta: SelectMeta { trigger, index },
        }];

        if !self.input_value.is_controlled() {
            let text = (self.item_to_string)(&item);
            self.input_value.request(text.clone());
            events.push(AutocompleteEvent::InputValueChange(text));
        }
        self.selected_item.request(Some(item));

        if self.options.close_on_select {
            events.extend(self.close());
        }
        events
    }

    fn set_highlight(&mut self, index: usize, events: &mut Events<T>) {
        if *self.highlighted_index.get() == Some(index) {
            return;
        }
        self.highlighted_index.request(Some(index));
        events.push(AutocompleteEvent::HighlightChange(Some(index)));
    }

    fn reset_highlight(&mut self, events: &mut Events<T>) {
        let index = self.options.default_highlighted_index;
        if *self.highlighted_index.get() == index {
            return;
        }
        self.highlighted_index.request(index);
        events.push(AutocompleteEvent::HighlightChange(index));
    }

    /// Pull an uncontrolled highlight back inside a shrunken list.
    fn clamp_highlight(&mut self) {
        if self.highlighted_index.is_controlled() {
            return;
        }
        let Some(index) = *self.highlighted_index.get() else {
            return;
        };
        // An empty list keeps the stored index for when items come back.
        if let Some(clamped) = self.registry.clamp(index).filter(|clamped| *clamped != index) {
            self.highlighted_index.request(Some(clamped));
        }
    }
}

/// Imperative open/close handle for use outside input events.
pub struct Actions<'a, T> {
    controller: &'a mut AutocompleteController<T>,
}

impl<T: Clone> Actions<'_, T> {
    pub fn open(&mut self) -> Events<T> {
        self.controller.open()
    }

    pub fn close(&mut self) -> Events<T> {
        self.controller.close()
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
