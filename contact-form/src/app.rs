//! The contact form application: owns the form state, reacts to UI events,
//! and decides when a submission is published.

use formdom::{Element, Event, Key, TextInputState, Theme};

use crate::form::{Field, FieldPhase, FormState, Submission};
use crate::validation::{validate_all, validate_field, ErrorSet, ValidationResult};
use crate::view;

pub struct ContactApp {
    theme: Theme,
    form: FormState,
    errors: ErrorSet,
    submission: Option<Submission>,
}

impl ContactApp {
    pub fn new() -> Self {
        Self {
            theme: Theme::dark(),
            form: FormState::new(),
            errors: ErrorSet::new(),
            submission: None,
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub fn submission(&self) -> Option<&Submission> {
        self.submission.as_ref()
    }

    /// Build the element tree for the current state.
    pub fn view(&self, inputs: &TextInputState, focused: Option<&str>) -> Element {
        view::render(self, inputs, focused)
    }

    /// Apply one UI event.
    pub fn update(&mut self, event: &Event) {
        match event {
            Event::Change { target, text } => self.on_change(target, text),
            Event::Focus { target } => self.on_focus(target),
            Event::Submit { .. } => self.submit(),
            Event::Click {
                target: Some(target),
                ..
            } if target == view::SUBMIT_BUTTON_ID => self.submit(),
            Event::Key {
                target: Some(target),
                key: Key::Enter | Key::Char(' '),
                ..
            } if target == view::SUBMIT_BUTTON_ID => self.submit(),
            _ => {}
        }
    }

    fn on_focus(&mut self, target: &str) {
        let Some(field) = Field::from_name(target) else {
            return;
        };
        if self.form.phase(field) == FieldPhase::Pristine {
            self.form.set_phase(field, FieldPhase::Editing);
        }
    }

    /// A keystroke changed one field: store the value and revalidate just
    /// that field.
    fn on_change(&mut self, target: &str, text: &str) {
        let Some(field) = Field::from_name(target) else {
            return;
        };

        self.form.set(field, text);

        match validate_field(field, text) {
            Some(error) => {
                log::debug!("{} invalid: {}", field.name(), error.message);
                self.form.set_phase(field, FieldPhase::Invalid);
                self.errors.insert(error);
            }
            None => {
                self.form.set_phase(field, FieldPhase::Valid);
                self.errors.clear(field);
            }
        }
    }

    /// Run every rule and either publish a snapshot or surface the errors.
    /// A previously published submission survives a failed attempt.
    pub fn submit(&mut self) {
        match validate_all(&self.form) {
            ValidationResult::Valid => {
                for field in Field::ALL {
                    self.form.set_phase(field, FieldPhase::Valid);
                }
                self.errors.clear_all();
                let submission = Submission::capture(&self.form);
                log::info!(
                    "submitted: {} {} <{}>",
                    submission.firstname,
                    submission.lastname,
                    submission.email
                );
                self.submission = Some(submission);
            }
            ValidationResult::Invalid(errors) => {
                log::debug!("submit blocked by {} error(s)", errors.len());
                for field in Field::ALL {
                    self.form.set_phase(field, FieldPhase::Valid);
                }
                self.errors.clear_all();
                for error in errors {
                    self.form.set_phase(error.field, FieldPhase::Invalid);
                    self.errors.insert(error);
                }
            }
        }
    }
}

impl Default for ContactApp {
    fn default() -> Self {
        Self::new()
    }
}
