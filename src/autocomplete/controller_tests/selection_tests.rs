//! Enter/Tab/click selection and close-on-select

use super::*;

#[test]
fn test_enter_selects_highlighted_and_closes() {
    let mut controller = open_fruit_controller();
    controller.handle_key_down(Key::ArrowDown);

    let events = controller.handle_key_down(Key::Enter);

    assert_eq!(selected(&events), Some(&String::from("Pineapple")));
    assert_eq!(count_close(&events), 1);
    assert_eq!(controller.input_value(), "Pineapple");
    assert_eq!(controller.selected_item(), Some(&String::from("Pineapple")));
    assert!(!controller.is_open());
}

#[test]
fn test_select_event_carries_prior_state_and_meta() {
    let mut controller = open_fruit_controller();
    controller.handle_input_change("o");

    let events = controller.handle_key_down(Key::Enter);

    match &events[0] {
        AutocompleteEvent::Select { item, state, meta } => {
            assert_eq!(item, "Apple");
            assert!(state.is_open);
            assert_eq!(state.input_value, "o");
            assert_eq!(state.highlighted_index, Some(0));
            assert_eq!(state.selected_item, None);
            assert_eq!(meta.trigger, SelectTrigger::Enter);
            assert_eq!(meta.index, 0);
        }
        other => panic!("expected Select first, got {:?}", other),
    }
}

#[test]
fn test_enter_disabled_does_not_select() {
    let mut controller = controller_with(options().with_select_with_enter(false));
    controller.handle_focus();

    let events = controller.handle_key_down(Key::Enter);

    assert!(events.is_empty());
    assert!(controller.is_open());
    assert_eq!(controller.selected_item(), None);
}

#[test]
fn test_tab_selects_when_enabled() {
    let mut controller = open_fruit_controller();
    let events = controller.handle_key_down(Key::Tab);

    assert_eq!(selected(&events), Some(&String::from("Apple")));
}

#[test]
fn test_tab_disabled_does_not_select() {
    let mut controller = controller_with(options().with_select_with_tab(false));
    controller.handle_focus();

    assert!(controller.handle_key_down(Key::Tab).is_empty());
}

#[test]
fn test_click_selects_even_when_keys_disabled() {
    let mut controller = controller_with(
        options()
            .with_select_with_enter(false)
            .with_select_with_tab(false),
    );
    controller.handle_focus();

    let events = controller.handle_item_click(2);

    assert_eq!(selected(&events), Some(&String::from("Orange")));
    assert_eq!(controller.input_value(), "Orange");
}

#[test]
fn test_click_after_blur_cancels_pending_close() {
    let base = Instant::now();
    let mut controller = open_fruit_controller();
    controller.handle_blur_at(base);

    let mut closes = count_close(&controller.handle_item_click(1));
    closes += count_close(&controller.tick_at(after(base, TEST_DELAY_MS * 2)));

    assert_eq!(closes, 1);
    assert_eq!(controller.input_value(), "Pineapple");
}

#[test]
fn test_enter_while_closed_is_noop() {
    let mut controller = open_fruit_controller();
    controller.handle_key_down(Key::Escape);

    assert!(controller.handle_key_down(Key::Enter).is_empty());
}

#[test]
fn test_enter_without_highlight_is_noop() {
    let mut controller = controller_with(options().with_default_highlighted_index(None));
    controller.handle_focus();

    assert!(controller.handle_key_down(Key::Enter).is_empty());
}

#[test]
fn test_select_with_no_items_is_noop() {
    let mut controller = open_fruit_controller();
    controller.set_items(Vec::new());

    assert!(controller.handle_item_click(0).is_empty());
    assert!(controller.handle_key_down(Key::Enter).is_empty());
}

#[test]
fn test_close_on_select_false_keeps_menu_and_highlight() {
    let mut controller = controller_with(options().with_close_on_select(false));
    controller.handle_focus();
    controller.handle_key_down(Key::ArrowDown);

    let events = controller.handle_key_down(Key::Enter);

    assert_eq!(selected(&events), Some(&String::from("Pineapple")));
    assert_eq!(count_close(&events), 0);
    assert!(controller.is_open());
    assert_eq!(controller.highlighted_index(), Some(1));

    controller.handle_key_down(Key::ArrowDown);
    assert_eq!(controller.highlighted_index(), Some(2));
}

#[test]
fn test_reselecting_same_item_yields_same_text() {
    let mut controller = open_fruit_controller();
    controller.handle_item_click(2);
    let first = controller.input_value().to_string();

    controller.handle_focus();
    controller.handle_item_click(2);

    assert_eq!(controller.input_value(), first);
    assert_eq!(controller.selected_item(), Some(&String::from("Orange")));
}

#[test]
fn test_item_to_string_is_used_for_input_text() {
    #[derive(Debug, Clone, PartialEq)]
    struct Project {
        id: u32,
        slug: &'static str,
    }

    let mut controller =
        AutocompleteController::new(|project: &Project| project.slug.to_uppercase(), options());
    controller.set_items(vec![
        Project { id: 1, slug: "web" },
        Project { id: 2, slug: "api" },
    ]);
    controller.handle_focus();

    controller.handle_item_click(1);

    assert_eq!(controller.input_value(), "API");
    assert_eq!(controller.selected_item().map(|p| p.id), Some(2));
}
