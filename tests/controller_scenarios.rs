//! End-to-end controller flows through the public API

use std::time::{Duration, Instant};

use autocombo::autocomplete::{
    AutocompleteController, AutocompleteEvent, AutocompleteOptions, ControlledProps, Key,
    SelectTrigger,
};

const FRUITS: [&str; 3] = ["Apple", "Pineapple", "Orange"];

fn fruit_controller(options: AutocompleteOptions) -> AutocompleteController<String> {
    let mut controller = AutocompleteController::new(|item: &String| item.clone(), options);
    controller.set_items(FRUITS.map(String::from));
    controller
}

fn contains_filter(query: &str) -> Vec<String> {
    let query = query.to_lowercase();
    FRUITS
        .iter()
        .filter(|item| item.to_lowercase().contains(&query))
        .map(|item| item.to_string())
        .collect()
}

fn count(events: &[AutocompleteEvent<String>], predicate: fn(&AutocompleteEvent<String>) -> bool) -> usize {
    events.iter().filter(|event| predicate(event)).count()
}

#[test]
fn test_keyboard_selection_closes_and_fills_input() {
    let mut controller = fruit_controller(AutocompleteOptions::default());

    let events = controller.handle_focus();
    assert!(events.contains(&AutocompleteEvent::Open));
    assert!(controller.is_open());
    assert_eq!(controller.item_count(), 3);

    controller.handle_key_down(Key::ArrowDown);
    controller.handle_key_down(Key::ArrowDown);
    assert_eq!(controller.highlighted_index(), Some(2));

    let events = controller.handle_key_down(Key::Enter);

    match &events[0] {
        AutocompleteEvent::Select { item, meta, .. } => {
            assert_eq!(item, "Orange");
            assert_eq!(meta.trigger, SelectTrigger::Enter);
            assert_eq!(meta.index, 2);
        }
        other => panic!("expected a selection, got {:?}", other),
    }
    assert!(!controller.is_open());
    assert_eq!(controller.input_value(), "Orange");
    assert_eq!(controller.selected_item(), Some(&String::from("Orange")));
}

#[test]
fn test_controlled_closed_menu_requests_open_once() {
    let mut controller = fruit_controller(AutocompleteOptions::default());
    controller.set_props(ControlledProps::new().is_open(false));

    let mut events = controller.handle_focus();
    events.extend(controller.handle_focus());
    events.extend(controller.handle_input_change("a"));

    assert!(!controller.is_open());
    assert_eq!(count(&events, AutocompleteEvent::is_open), 1);
}

#[test]
fn test_blur_closes_after_delay_exactly_once() {
    let mut controller = fruit_controller(AutocompleteOptions::default());
    let start = Instant::now();
    controller.handle_focus();

    let mut events = controller.handle_blur_at(start);
    events.extend(controller.tick_at(start + Duration::from_millis(50)));
    assert!(controller.is_open());

    events.extend(controller.tick_at(start + Duration::from_millis(250)));
    assert!(!controller.is_open());

    events.extend(controller.handle_click_outside());
    events.extend(controller.tick_at(start + Duration::from_secs(5)));

    assert_eq!(count(&events, AutocompleteEvent::is_close), 1);
}

#[test]
fn test_click_outside_right_after_blur_closes_once() {
    let mut controller = fruit_controller(AutocompleteOptions::default());
    let start = Instant::now();
    controller.handle_focus();

    let mut events = controller.handle_blur_at(start);
    events.extend(controller.handle_click_outside());
    events.extend(controller.tick_at(start + Duration::from_secs(1)));

    assert!(!controller.is_open());
    assert_eq!(count(&events, AutocompleteEvent::is_close), 1);
}

#[test]
fn test_typing_narrows_items_and_keeps_highlight_valid() {
    let mut controller = fruit_controller(AutocompleteOptions::default());
    controller.handle_focus();
    controller.handle_key_down(Key::ArrowDown);
    controller.handle_key_down(Key::ArrowDown);

    controller.handle_input_change("a");
    controller.set_items(contains_filter("a"));
    assert_eq!(controller.item_count(), 3);
    assert!(controller.highlighted_index().is_some_and(|i| i < 3));

    controller.handle_input_change("ap");
    controller.set_items(contains_filter("ap"));
    assert_eq!(controller.item_count(), 2);
    assert!(controller.highlighted_index().is_some_and(|i| i < 2));
    assert_eq!(controller.input_value(), "ap");
}

#[test]
fn test_keep_open_selection_preserves_highlight() {
    let options = AutocompleteOptions::default().with_close_on_select(false);
    let mut controller = fruit_controller(options);
    controller.handle_focus();
    controller.handle_key_down(Key::ArrowDown);

    let events = controller.handle_key_down(Key::Enter);

    assert!(events.iter().any(AutocompleteEvent::is_select));
    assert!(!events.iter().any(AutocompleteEvent::is_close));
    assert!(controller.is_open());
    assert_eq!(controller.highlighted_index(), Some(1));
    assert_eq!(controller.input_value(), "Pineapple");

    controller.handle_key_down(Key::ArrowDown);
    assert_eq!(controller.highlighted_index(), Some(2));
}

#[test]
fn test_unmount_with_pending_close_emits_nothing() {
    let mut controller = fruit_controller(AutocompleteOptions::default());
    controller.handle_focus();
    controller.handle_blur();
    assert!(controller.has_pending_close());

    controller.unmount();
}
