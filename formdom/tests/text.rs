use formdom::text::{char_width, display_width, truncate_to_width};
use formdom::{Element, Event, Key, Modifiers, TextInputState};

// ============================================================================
// Width measurement
// ============================================================================

#[test]
fn test_display_width_ascii() {
    assert_eq!(display_width("hello"), 5);
    assert_eq!(display_width(""), 0);
}

#[test]
fn test_display_width_wide_chars() {
    assert_eq!(display_width("日本"), 4);
    assert_eq!(char_width('日'), 2);
    assert_eq!(char_width('a'), 1);
}

#[test]
fn test_truncate_to_width() {
    assert_eq!(truncate_to_width("hello", 10), "hello");
    assert_eq!(truncate_to_width("hello world", 5), "hell…");
    assert_eq!(truncate_to_width("hello", 0), "");
}

// ============================================================================
// Text input editing
// ============================================================================

fn field() -> Element {
    Element::col()
        .id("root")
        .child(Element::text_input("").id("field"))
}

fn key_event(key: Key) -> Event {
    Event::Key {
        target: Some("field".to_string()),
        key,
        modifiers: Modifiers::default(),
    }
}

fn press(inputs: &mut TextInputState, root: &Element, key: Key) -> Vec<Event> {
    inputs.process_events(&[key_event(key)], root)
}

#[test]
fn test_typing_emits_change_events() {
    let root = field();
    let mut inputs = TextInputState::new();

    let events = press(&mut inputs, &root, Key::Char('h'));
    assert_eq!(
        events,
        vec![Event::Change {
            target: "field".to_string(),
            text: "h".to_string()
        }]
    );

    let events = press(&mut inputs, &root, Key::Char('i'));
    assert_eq!(
        events,
        vec![Event::Change {
            target: "field".to_string(),
            text: "hi".to_string()
        }]
    );

    assert_eq!(inputs.get("field"), "hi");
}

#[test]
fn test_backspace_deletes_before_cursor() {
    let root = field();
    let mut inputs = TextInputState::new();
    inputs.set("field", "hi");

    let events = press(&mut inputs, &root, Key::Backspace);
    assert_eq!(
        events,
        vec![Event::Change {
            target: "field".to_string(),
            text: "h".to_string()
        }]
    );

    // Backspace on an empty field changes nothing and emits nothing
    press(&mut inputs, &root, Key::Backspace);
    let events = press(&mut inputs, &root, Key::Backspace);
    assert!(events.is_empty());
}

#[test]
fn test_cursor_movement_and_mid_insert() {
    let root = field();
    let mut inputs = TextInputState::new();
    inputs.set("field", "hi");

    // Cursor movement is handled silently
    let events = press(&mut inputs, &root, Key::Left);
    assert!(events.is_empty());

    let events = press(&mut inputs, &root, Key::Char('x'));
    assert_eq!(
        events,
        vec![Event::Change {
            target: "field".to_string(),
            text: "hxi".to_string()
        }]
    );
}

#[test]
fn test_home_end_and_delete() {
    let root = field();
    let mut inputs = TextInputState::new();
    inputs.set("field", "abc");

    press(&mut inputs, &root, Key::Home);
    let events = press(&mut inputs, &root, Key::Delete);
    assert_eq!(
        events,
        vec![Event::Change {
            target: "field".to_string(),
            text: "bc".to_string()
        }]
    );

    press(&mut inputs, &root, Key::End);
    let events = press(&mut inputs, &root, Key::Delete);
    assert!(events.is_empty());
}

#[test]
fn test_enter_emits_submit() {
    let root = field();
    let mut inputs = TextInputState::new();
    inputs.set("field", "hello");

    let events = press(&mut inputs, &root, Key::Enter);
    assert_eq!(
        events,
        vec![Event::Submit {
            target: "field".to_string()
        }]
    );
    // The value is untouched
    assert_eq!(inputs.get("field"), "hello");
}

#[test]
fn test_keys_for_non_input_targets_pass_through() {
    let root = Element::col()
        .id("root")
        .child(Element::text("go").id("button").focusable(true));
    let mut inputs = TextInputState::new();

    let event = Event::Key {
        target: Some("button".to_string()),
        key: Key::Char('x'),
        modifiers: Modifiers::default(),
    };
    let events = inputs.process_events(&[event.clone()], &root);
    assert_eq!(events, vec![event]);
}

#[test]
fn test_multibyte_editing_stays_on_char_boundaries() {
    let root = field();
    let mut inputs = TextInputState::new();
    inputs.set("field", "héllo");

    press(&mut inputs, &root, Key::Home);
    press(&mut inputs, &root, Key::Right);
    let events = press(&mut inputs, &root, Key::Delete);
    assert_eq!(
        events,
        vec![Event::Change {
            target: "field".to_string(),
            text: "hllo".to_string()
        }]
    );
}
