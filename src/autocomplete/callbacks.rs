//! Callback-style consumption of controller events
//!
//! Handlers return [`AutocompleteEvent`]s; callers that prefer the
//! `on_select(item, state, meta)` shape can register closures here and replay
//! each batch through [`Callbacks::dispatch`].

use std::fmt;

use super::events::{AutocompleteEvent, InteractionState, SelectMeta};

type SelectCallback<'a, T> = Box<dyn FnMut(&T, &InteractionState<T>, SelectMeta) + 'a>;

pub struct Callbacks<'a, T> {
    on_open: Option<Box<dyn FnMut() + 'a>>,
    on_close: Option<Box<dyn FnMut() + 'a>>,
    on_select: Option<SelectCallback<'a, T>>,
    on_input_value_change: Option<Box<dyn FnMut(&str) + 'a>>,
    on_highlight_change: Option<Box<dyn FnMut(Option<usize>) + 'a>>,
    on_scroll_into_view: Option<Box<dyn FnMut(usize) + 'a>>,
}

impl<T> fmt::Debug for Callbacks<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_open", &self.on_open.is_some())
            .field("on_close", &self.on_close.is_some())
            .field("on_select", &self.on_select.is_some())
            .finish_non_exhaustive()
    }
}

impl<T> Default for Callbacks<'_, T> {
    fn default() -> Self {
        Self {
            on_open: None,
            on_close: None,
            on_select: None,
            on_input_value_change: None,
            on_highlight_change: None,
            on_scroll_into_view: None,
        }
    }
}

impl<'a, T> Callbacks<'a, T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_open(mut self, callback: impl FnMut() + 'a) -> Self {
        self.on_open = Some(Box::new(callback));
        self
    }

    pub fn on_close(mut self, callback: impl FnMut() + 'a) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    pub fn on_select(
        mut self,
        callback: impl FnMut(&T, &InteractionState<T>, SelectMeta) + 'a,
    ) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    pub fn on_input_value_change(mut self, callback: impl FnMut(&str) + 'a) -> Self {
        self.on_input_value_change = Some(Box::new(callback));
        self
    }

    pub fn on_highlight_change(mut self, callback: impl FnMut(Option<usize>) + 'a) -> Self {
        self.on_highlight_change = Some(Box::new(callback));
        self
    }

    pub fn on_scroll_into_view(mut self, callback: impl FnMut(usize) + 'a) -> Self {
        self.on_scroll_into_view = Some(Box::new(callback));
        self
    }

    /// Invoke the registered callbacks for a batch, in event order.
    pub fn dispatch(&mut self, events: &[AutocompleteEvent<T>]) {
        for event in events {
            match event {
                AutocompleteEvent::Open => {
                    if let Some(callback) = self.on_open.as_mut() {
                        callback();
                    }
                }
                AutocompleteEvent::Close => {
                    if let Some(callback) = self.on_close.as_mut() {
                        callback();
                    }
                }
                AutocompleteEvent::Select { item, state, meta } => {
                    if let Some(callback) = self.on_select.as_mut() {
                        callback(item, state, *meta);
                    }
                }
                AutocompleteEvent::InputValueChange(text) => {
                    if let Some(callback) = self.on_input_value_change.as_mut() {
                        callback(text);
                    }
                }
                AutocompleteEvent::HighlightChange(index) => {
                    if let Some(callback) = self.on_highlight_change.as_mut() {
                        callback(*index);
                    }
                }
                AutocompleteEvent::ScrollIntoView(index) => {
                    if let Some(callback) = self.on_scroll_into_view.as_mut() {
                        callback(*index);
                    }
                }
            }
        }
    }
}
