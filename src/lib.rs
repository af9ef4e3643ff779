//! autocombo library - headless autocomplete controller and terminal picker
//!
//! The controller lives in [`autocomplete`]; [`picker`] wires it to a
//! ratatui terminal UI.

pub mod autocomplete;
pub mod config;
pub mod error;
pub mod layout;
pub mod picker;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use autocomplete::{AutocompleteController, AutocompleteEvent, AutocompleteOptions};
pub use config::Config;
pub use picker::Picker;
