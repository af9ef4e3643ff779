use std::fmt;

/// Keys the controller reacts to. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowUp,
    ArrowDown,
    Enter,
    Tab,
    Other,
}

/// What caused a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectTrigger {
    Click,
    Enter,
    Tab,
}

impl fmt::Display for SelectTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectTrigger::Click => write!(f, "click"),
            SelectTrigger::Enter => write!(f, "enter"),
            SelectTrigger::Tab => write!(f, "tab"),
        }
    }
}

/// Metadata passed alongside a selected item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectMeta {
    pub trigger: SelectTrigger,
    pub index: usize,
}

/// Snapshot of the interaction state: `{is_open, input_value, highlighted_index, selected_item}`.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionState<T> {
    pub is_open: bool,
    pub input_value: String,
    pub highlighted_index: Option<usize>,
    pub selected_item: Option<T>,
}

/// Notifications produced by a transition, in the order they happened.
///
/// These are the controller's callbacks: the caller inspects them (or replays
/// them through [`Callbacks`](super::Callbacks)) and feeds controlled values
/// back as props on the next render.
#[derive(Debug, Clone, PartialEq)]
pub enum AutocompleteEvent<T> {
    Open,
    Close,
    Select {
        item: T,
        state: InteractionState<T>,
        meta: SelectMeta,
    },
    InputValueChange(String),
    HighlightChange(Option<usize>),
    /// Keyboard navigation moved the highlight; the row should be scrolled into view
    ScrollIntoView(usize),
}

impl<T> AutocompleteEvent<T> {
    pub fn is_open(&self) -> bool {
        matches!(self, AutocompleteEvent::Open)
    }

    pub fn is_close(&self) -> bool {
        matches!(self, AutocompleteEvent::Close)
    }

    pub fn is_select(&self) -> bool {
        matches!(self, AutocompleteEvent::Select { .. })
    }
}
