use std::collections::HashMap;

use crate::element::{find_element, Element};
use crate::event::{Event, Key, Modifiers};

/// Data for a single text input: text content and cursor position.
/// The cursor is a character index into the text.
#[derive(Debug, Clone, Default)]
pub struct TextInputData {
    pub text: String,
    pub cursor: usize,
}

impl TextInputData {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }
}

/// Tracks text input state for multiple elements.
#[derive(Debug, Default)]
pub struct TextInputState {
    inputs: HashMap<String, TextInputData>,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the text value for an input.
    pub fn get(&self, id: &str) -> &str {
        self.inputs.get(id).map(|d| d.text.as_str()).unwrap_or("")
    }

    /// Get the full input data (text and cursor).
    pub fn get_data(&self, id: &str) -> Option<&TextInputData> {
        self.inputs.get(id)
    }

    /// Get mutable access to input data.
    pub fn get_data_mut(&mut self, id: &str) -> &mut TextInputData {
        self.inputs.entry(id.to_string()).or_default()
    }

    /// Set the text value for an input, placing the cursor at the end.
    pub fn set(&mut self, id: &str, text: impl Into<String>) {
        self.inputs.insert(id.to_string(), TextInputData::new(text));
    }

    /// Process events and handle text editing for elements that capture
    /// input. Returns the events that were generated (Change, Submit) or
    /// passed through.
    pub fn process_events(&mut self, events: &[Event], root: &Element) -> Vec<Event> {
        let mut output = Vec::new();

        for event in events {
            if let Event::Key {
                target: Some(target),
                key,
                modifiers,
            } = event
            {
                if let Some(element) = find_element(root, target) {
                    if element.captures_input && !element.disabled {
                        match self.handle_key(target, *key, *modifiers) {
                            TextEditResult::Changed => {
                                output.push(Event::Change {
                                    target: target.clone(),
                                    text: self.get(target).to_string(),
                                });
                                continue;
                            }
                            TextEditResult::Submitted => {
                                output.push(Event::Submit {
                                    target: target.clone(),
                                });
                                continue;
                            }
                            TextEditResult::Handled => {
                                // Cursor moved, no event needed
                                continue;
                            }
                            TextEditResult::Ignored => {
                                // Pass through
                            }
                        }
                    }
                }
            }
            output.push(event.clone());
        }

        output
    }

    /// Handle a key press for text editing.
    fn handle_key(&mut self, id: &str, key: Key, modifiers: Modifiers) -> TextEditResult {
        match key {
            Key::Char(c) if !modifiers.ctrl && !modifiers.alt => {
                self.insert_char(id, c);
                TextEditResult::Changed
            }

            Key::Backspace if modifiers.none() => {
                if self.delete_back(id) {
                    TextEditResult::Changed
                } else {
                    TextEditResult::Handled
                }
            }

            Key::Delete if modifiers.none() => {
                if self.delete_forward(id) {
                    TextEditResult::Changed
                } else {
                    TextEditResult::Handled
                }
            }

            Key::Left if modifiers.none() => {
                self.move_cursor(id, -1);
                TextEditResult::Handled
            }

            Key::Right if modifiers.none() => {
                self.move_cursor(id, 1);
                TextEditResult::Handled
            }

            Key::Home if modifiers.none() => {
                self.get_data_mut(id).cursor = 0;
                TextEditResult::Handled
            }

            Key::End if modifiers.none() => {
                let data = self.get_data_mut(id);
                data.cursor = data.text.chars().count();
                TextEditResult::Handled
            }

            Key::Enter => TextEditResult::Submitted,

            _ => TextEditResult::Ignored,
        }
    }

    /// Insert a character at the cursor.
    fn insert_char(&mut self, id: &str, c: char) {
        let data = self.get_data_mut(id);
        let byte_pos = char_to_byte_index(&data.text, data.cursor);
        data.text.insert(byte_pos, c);
        data.cursor += 1;
    }

    /// Delete the character before the cursor.
    /// Returns true if the text changed.
    fn delete_back(&mut self, id: &str) -> bool {
        let data = self.get_data_mut(id);
        if data.cursor == 0 {
            return false;
        }

        let byte_pos = char_to_byte_index(&data.text, data.cursor - 1);
        data.text.remove(byte_pos);
        data.cursor -= 1;
        true
    }

    /// Delete the character at the cursor.
    /// Returns true if the text changed.
    fn delete_forward(&mut self, id: &str) -> bool {
        let data = self.get_data_mut(id);
        if data.cursor >= data.text.chars().count() {
            return false;
        }

        let byte_pos = char_to_byte_index(&data.text, data.cursor);
        data.text.remove(byte_pos);
        true
    }

    /// Move the cursor by delta characters, clamped to the text.
    fn move_cursor(&mut self, id: &str, delta: i32) {
        let data = self.get_data_mut(id);
        let char_count = data.text.chars().count();
        data.cursor = (data.cursor as i32 + delta).clamp(0, char_count as i32) as usize;
    }
}

/// Result of handling a text editing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEditResult {
    /// Text was modified.
    Changed,
    /// Enter was pressed.
    Submitted,
    /// Key was handled but text didn't change (e.g., cursor movement).
    Handled,
    /// Key was not handled, should be passed through.
    Ignored,
}

/// Convert a character index to a byte index in a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
