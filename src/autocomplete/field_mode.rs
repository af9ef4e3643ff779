//! Controlled/uncontrolled ownership of a single state field
//!
//! A field is controlled when the caller supplies its value every render; the
//! controller then only requests changes through events. Otherwise the
//! controller owns and mutates the value itself.

/// Ownership mode of one controllable field, resolved once per render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldMode<V> {
    /// The caller owns the value; requested changes are reported, not applied.
    Controlled(V),
    /// The controller owns the value.
    Uncontrolled(V),
}

impl<V> FieldMode<V> {
    /// The effective value for this render.
    pub fn get(&self) -> &V {
        match self {
            FieldMode::Controlled(value) | FieldMode::Uncontrolled(value) => value,
        }
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self, FieldMode::Controlled(_))
    }

    /// Request a new value.
    ///
    /// Returns `true` when the value was stored (uncontrolled). Controlled
    /// fields are left untouched and the caller is expected to be notified.
    pub fn request(&mut self, next: V) -> bool {
        match self {
            FieldMode::Controlled(_) => false,
            FieldMode::Uncontrolled(value) => {
                *value = next;
                true
            }
        }
    }

    fn value_mut(&mut self) -> &mut V {
        match self {
            FieldMode::Controlled(value) | FieldMode::Uncontrolled(value) => value,
        }
    }
}

impl<V: Default> FieldMode<V> {
    /// Apply the caller's prop for this render.
    ///
    /// `Some` switches the field to controlled with that value. `None` hands
    /// ownership back to the controller, keeping the last effective value.
    pub fn sync(&mut self, prop: Option<V>) {
        match prop {
            Some(value) => *self = FieldMode::Controlled(value),
            None if self.is_controlled() => {
                let value = std::mem::take(self.value_mut());
                *self = FieldMode::Uncontrolled(value);
            }
            None => {}
        }
    }
}

impl<V: Default> Default for FieldMode<V> {
    fn default() -> Self {
        FieldMode::Uncontrolled(V::default())
    }
}

/// Caller-supplied values for the controllable fields.
///
/// Each `Some` independently puts that field in controlled mode; this is the
/// set of controlled fields for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlledProps<T> {
    pub is_open: Option<bool>,
    pub input_value: Option<String>,
    pub highlighted_index: Option<Option<usize>>,
    pub selected_item: Option<Option<T>>,
}

impl<T> Default for ControlledProps<T> {
    fn default() -> Self {
        Self {
            is_open: None,
            input_value: None,
            highlighted_index: None,
            selected_item: None,
        }
    }
}

impl<T> ControlledProps<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(mut self, is_open: bool) -> Self {
        self.is_open = Some(is_open);
        self
    }

    pub fn input_value(mut self, value: impl Into<String>) -> Self {
        self.input_value = Some(value.into());
        self
    }

    pub fn highlighted_index(mut self, index: Option<usize>) -> Self {
        self.highlighted_index = Some(index);
        self
    }

    pub fn selected_item(mut self, item: Option<T>) -> Self {
        self.selected_item = Some(item);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncontrolled_request_stores_value() {
        let mut field = FieldMode::Uncontrolled(false);
        assert!(field.request(true));
        assert!(*field.get());
    }

    #[test]
    fn test_controlled_request_is_suppressed() {
        let mut field = FieldMode::Controlled(String::from("abc"));
        assert!(!field.request(String::from("xyz")));
        assert_eq!(field.get(), "abc");
    }

    #[test]
    fn test_sync_some_switches_to_controlled() {
        let mut field: FieldMode<bool> = FieldMode::default();
        field.sync(Some(true));
        assert_eq!(field, FieldMode::Controlled(true));
    }

    #[test]
    fn test_sync_none_releases_control_and_keeps_value() {
        let mut field = FieldMode::Controlled(Some(3usize));
        field.sync(None);
        assert_eq!(field, FieldMode::Uncontrolled(Some(3)));
    }

    #[test]
    fn test_sync_none_on_uncontrolled_is_noop() {
        let mut field = FieldMode::Uncontrolled(String::from("kept"));
        field.sync(None);
        assert_eq!(field, FieldMode::Uncontrolled(String::from("kept")));
    }

    #[test]
    fn test_controlled_props_builder() {
        let props: ControlledProps<&str> = ControlledProps::new()
            .is_open(false)
            .input_value("ap")
            .selected_item(Some("Apple"));

        assert_eq!(props.is_open, Some(false));
        assert_eq!(props.input_value.as_deref(), Some("ap"));
        assert_eq!(props.highlighted_index, None);
        assert_eq!(props.selected_item, Some(Some("Apple")));
    }
}
