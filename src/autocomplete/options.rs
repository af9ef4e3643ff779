// Behaviour flags for the autocomplete controller

use std::time::Duration;

use serde::Deserialize;

use super::blur_timer::DEFAULT_BLUR_CLOSE_DELAY;

fn default_true() -> bool {
    true
}

fn default_blur_close_delay_ms() -> u64 {
    DEFAULT_BLUR_CLOSE_DELAY.as_millis() as u64
}

fn default_highlighted_index() -> Option<usize> {
    Some(0)
}

/// Options fixed for the lifetime of a controller.
///
/// Deserializes from the `[autocomplete]` config section; every field is
/// optional there.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AutocompleteOptions {
    /// Close the menu as part of selecting an item
    #[serde(default = "default_true")]
    pub close_on_select: bool,
    #[serde(default = "default_true")]
    pub should_select_with_enter: bool,
    #[serde(default = "default_true")]
    pub should_select_with_tab: bool,
    /// Clear the input text whenever the menu closes
    #[serde(default)]
    pub reset_input_on_close: bool,
    #[serde(default = "default_blur_close_delay_ms")]
    pub blur_close_delay_ms: u64,
    /// Highlight applied when the menu opens or the text changes
    #[serde(default = "default_highlighted_index")]
    pub default_highlighted_index: Option<usize>,
}

impl Default for AutocompleteOptions {
    fn default() -> Self {
        Self {
            close_on_select: true,
            should_select_with_enter: true,
            should_select_with_tab: true,
            reset_input_on_close: false,
            blur_close_delay_ms: default_blur_close_delay_ms(),
            default_highlighted_index: default_highlighted_index(),
        }
    }
}

impl AutocompleteOptions {
    pub fn blur_close_delay(&self) -> Duration {
        Duration::from_millis(self.blur_close_delay_ms)
    }

    pub fn with_close_on_select(mut self, close_on_select: bool) -> Self {
        self.close_on_select = close_on_select;
        self
    }

    pub fn with_select_with_enter(mut self, enabled: bool) -> Self {
        self.should_select_with_enter = enabled;
        self
    }

    pub fn with_select_with_tab(mut self, enabled: bool) -> Self {
        self.should_select_with_tab = enabled;
        self
    }

    pub fn with_reset_input_on_close(mut self, reset: bool) -> Self {
        self.reset_input_on_close = reset;
        self
    }

    pub fn with_blur_close_delay(mut self, delay: Duration) -> Self {
        self.blur_close_delay_ms = delay.as_millis() as u64;
        self
    }

    pub fn with_default_highlighted_index(mut self, index: Option<usize>) -> Self {
        self.default_highlighted_index = index;
        self
    }
}
