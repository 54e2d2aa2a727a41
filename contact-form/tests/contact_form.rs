//! Behavioral tests for the contact form: build the view, feed events the
//! way the runtime would, then look for visible text and labeled nodes.

use contact_form::view::SUBMIT_BUTTON_ID;
use contact_form::{ContactApp, Field};
use formdom::{
    find_by_placeholder, find_element, find_text, query_all_text, Element, Event, FocusState, Key,
    Modifiers, MouseButton, TextInputState,
};

struct Form {
    app: ContactApp,
    focus: FocusState,
    inputs: TextInputState,
}

impl Form {
    fn new() -> Self {
        let mut inputs = TextInputState::new();
        for field in Field::ALL {
            inputs.set(field.name(), "");
        }
        Self {
            app: ContactApp::new(),
            focus: FocusState::new(),
            inputs,
        }
    }

    fn render(&self) -> Element {
        self.app.view(&self.inputs, self.focus.focused())
    }

    /// Run events through text editing and into the app, against the
    /// currently rendered tree.
    fn dispatch(&mut self, events: Vec<Event>) {
        let root = self.render();
        let events = self.inputs.process_events(&events, &root);
        for event in &events {
            self.app.update(event);
        }
    }

    fn type_text(&mut self, id: &str, text: &str) {
        if self.focus.focus(id) {
            self.dispatch(vec![Event::Focus {
                target: id.to_string(),
            }]);
        }
        let keys = text
            .chars()
            .map(|c| Event::Key {
                target: Some(id.to_string()),
                key: Key::Char(c),
                modifiers: Modifiers::default(),
            })
            .collect();
        self.dispatch(keys);
    }

    fn clear_field(&mut self, id: &str) {
        let count = self.inputs.get(id).chars().count();
        let keys = (0..count)
            .map(|_| Event::Key {
                target: Some(id.to_string()),
                key: Key::Backspace,
                modifiers: Modifiers::default(),
            })
            .collect();
        self.dispatch(keys);
    }

    fn click_submit(&mut self) {
        self.dispatch(vec![Event::Click {
            target: Some(SUBMIT_BUTTON_ID.to_string()),
            x: 0,
            y: 0,
            button: MouseButton::Left,
        }]);
    }

    fn fill_valid_trio(&mut self) {
        self.type_text("firstname", "Johnny");
        self.type_text("lastname", "Snow");
        self.type_text("email", "lordcommander@castleblack.com");
    }
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn renders_without_errors() {
    let form = Form::new();
    let root = form.render();

    assert!(query_all_text(&root, "must have at least").is_empty());
    assert!(query_all_text(&root, "required field").is_empty());
    assert!(query_all_text(&root, "valid email").is_empty());
}

#[test]
fn renders_the_contact_form_header() {
    let form = Form::new();
    let root = form.render();

    assert!(find_text(&root, "contact form").is_some());
}

#[test]
fn renders_labels_and_placeholders() {
    let form = Form::new();
    let root = form.render();

    assert!(find_text(&root, "First Name").is_some());
    assert!(find_text(&root, "Last Name").is_some());
    assert!(find_text(&root, "Email").is_some());
    assert!(find_text(&root, "Message").is_some());

    assert!(find_by_placeholder(&root, "edd").is_some());
    assert!(find_by_placeholder(&root, "burke").is_some());
    assert!(find_by_placeholder(&root, "bluebill1049@hotmail.com").is_some());
}

// ============================================================================
// Live validation while typing
// ============================================================================

#[test]
fn renders_one_error_for_short_firstname() {
    let mut form = Form::new();
    form.type_text("firstname", "abc");

    let root = form.render();
    assert!(find_text(&root, "firstname must have at least 5 characters.").is_some());
    assert_eq!(query_all_text(&root, "must have at least 5 characters.").len(), 1);
}

#[test]
fn renders_email_error_while_typing_invalid_email() {
    let mut form = Form::new();
    form.type_text("email", "notAnEmail");

    let root = form.render();
    assert!(find_text(&root, "email must be a valid email address.").is_some());
}

#[test]
fn error_clears_once_the_field_becomes_valid() {
    let mut form = Form::new();
    form.type_text("firstname", "abc");
    assert!(find_text(&form.render(), "must have at least 5 characters.").is_some());

    form.type_text("firstname", "de");

    let root = form.render();
    assert!(find_text(&root, "must have at least 5 characters.").is_none());
}

// ============================================================================
// Submission validation
// ============================================================================

#[test]
fn renders_three_errors_when_submitting_empty_form() {
    let mut form = Form::new();
    form.click_submit();

    let root = form.render();
    assert!(find_text(&root, "must have at least 5 characters.").is_some());
    assert!(find_text(&root, "must be a valid email address.").is_some());
    assert!(find_text(&root, "is a required field.").is_some());

    assert!(find_element(&root, "firstname-error").is_some());
    assert!(find_element(&root, "lastname-error").is_some());
    assert!(find_element(&root, "email-error").is_some());
    assert!(find_element(&root, "message-error").is_none());

    assert_eq!(form.app.errors().len(), 3);
    assert!(form.app.submission().is_none());
}

#[test]
fn renders_one_error_with_valid_names_but_no_email() {
    let mut form = Form::new();
    form.type_text("firstname", "Johnny");
    form.type_text("lastname", "Testing");
    form.click_submit();

    let root = form.render();
    assert_eq!(query_all_text(&root, "must be a valid email address.").len(), 1);
    assert!(find_text(&root, "must have at least 5 characters.").is_none());
    assert!(find_text(&root, "is a required field.").is_none());
    assert!(form.app.submission().is_none());
}

#[test]
fn renders_lastname_required_when_submitted_without_lastname() {
    let mut form = Form::new();
    form.click_submit();

    let root = form.render();
    assert!(find_text(&root, "lastname is a required field.").is_some());
}

// ============================================================================
// Submission display
// ============================================================================

#[test]
fn renders_submitted_values_without_message() {
    let mut form = Form::new();
    form.fill_valid_trio();
    form.click_submit();

    let root = form.render();
    let firstname = find_element(&root, "firstname-display").unwrap();
    assert!(firstname.as_text().unwrap().contains("Johnny"));
    let lastname = find_element(&root, "lastname-display").unwrap();
    assert!(lastname.as_text().unwrap().contains("Snow"));
    let email = find_element(&root, "email-display").unwrap();
    assert!(email.as_text().unwrap().contains("lordcommander@castleblack.com"));

    assert!(find_element(&root, "message-display").is_none());
}

#[test]
fn renders_all_fields_when_message_is_submitted() {
    let mut form = Form::new();
    form.fill_valid_trio();
    form.type_text("message", "Test Message.");
    form.click_submit();

    let root = form.render();
    assert!(find_element(&root, "firstname-display").is_some());
    assert!(find_element(&root, "lastname-display").is_some());
    assert!(find_element(&root, "email-display").is_some());
    let message = find_element(&root, "message-display").unwrap();
    assert!(message.as_text().unwrap().contains("Test Message."));
}

#[test]
fn no_errors_remain_after_a_successful_submit() {
    let mut form = Form::new();
    form.type_text("email", "notAnEmail");
    form.clear_field("email");
    form.fill_valid_trio();
    form.click_submit();

    let root = form.render();
    assert!(find_element(&root, "firstname-error").is_none());
    assert!(find_element(&root, "lastname-error").is_none());
    assert!(find_element(&root, "email-error").is_none());
}

// ============================================================================
// Submission replacement policy
// ============================================================================

#[test]
fn resubmitting_identical_values_replaces_with_an_identical_submission() {
    let mut form = Form::new();
    form.fill_valid_trio();
    form.click_submit();
    let first = form.app.submission().cloned().unwrap();

    form.click_submit();
    let second = form.app.submission().cloned().unwrap();

    assert_eq!(first, second);
    let root = form.render();
    assert_eq!(query_all_text(&root, "Johnny").len(), 1);
}

#[test]
fn failed_resubmit_retains_the_previous_submission() {
    let mut form = Form::new();
    form.fill_valid_trio();
    form.click_submit();
    assert!(form.app.submission().is_some());

    form.clear_field("firstname");
    form.click_submit();

    let root = form.render();
    assert!(find_element(&root, "firstname-error").is_some());
    let display = find_element(&root, "firstname-display").unwrap();
    assert!(display.as_text().unwrap().contains("Johnny"));
}

#[test]
fn a_new_successful_submit_replaces_the_displayed_values() {
    let mut form = Form::new();
    form.fill_valid_trio();
    form.click_submit();

    form.clear_field("firstname");
    form.type_text("firstname", "Eddard");
    form.click_submit();

    let root = form.render();
    let display = find_element(&root, "firstname-display").unwrap();
    assert!(display.as_text().unwrap().contains("Eddard"));
    assert!(!display.as_text().unwrap().contains("Johnny"));
}
