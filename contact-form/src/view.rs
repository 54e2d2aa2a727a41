//! Element tree construction for the contact form.

use formdom::{
    Border, Edges, Element, Size, Style, TextInputData, TextInputState, Theme,
};

use crate::app::ContactApp;
use crate::form::{Field, FieldPhase, Submission};

pub const SUBMIT_BUTTON_ID: &str = "submit-button";

const INPUT_WIDTH: u16 = 40;

/// Build the whole form for the current state.
pub fn render(app: &ContactApp, inputs: &TextInputState, focused: Option<&str>) -> Element {
    let theme = app.theme();

    let mut root = Element::col()
        .id("contact-form")
        .width(Size::Fill)
        .height(Size::Fill)
        .padding(Edges::symmetric(1, 2))
        .gap(1)
        .style(Style::new().background(theme.background))
        .child(
            Element::text("Contact Form")
                .id("header")
                .style(Style::new().foreground(theme.primary).bold()),
        );

    for field in Field::ALL {
        root = root.child(field_section(field, app, inputs, focused, theme));
    }

    root = root.child(submit_button(focused, theme));

    if let Some(submission) = app.submission() {
        root = root.child(submission_summary(submission, theme));
    }

    root.child(
        Element::text("Tab next field · Enter submit · Esc quit")
            .id("help")
            .style(Style::new().foreground(theme.muted).dim()),
    )
}

/// Label, input, and (when invalid) the error line for one field.
fn field_section(
    field: Field,
    app: &ContactApp,
    inputs: &TextInputState,
    focused: Option<&str>,
    theme: &Theme,
) -> Element {
    let id = field.name();
    let is_focused = focused == Some(id);
    let invalid = app.form().phase(field) == FieldPhase::Invalid;

    let input_fg = if invalid {
        theme.danger
    } else {
        theme.foreground
    };

    let mut input = Element::text_input("")
        .id(id)
        .width(Size::Fixed(INPUT_WIDTH))
        .input_state(
            inputs.get_data(id).unwrap_or(&TextInputData::default()),
            is_focused,
        )
        .style(
            Style::new()
                .background(theme.surface)
                .foreground(input_fg)
                .border(Border::Single),
        )
        .style_focused(
            Style::new()
                .background(theme.surface)
                .foreground(if invalid { theme.danger } else { theme.primary })
                .border(Border::Single),
        );

    if let Some(hint) = field.placeholder() {
        input = input.placeholder(hint);
    }

    let mut section = Element::col()
        .id(format!("{id}-section"))
        .child(
            Element::text(field.label())
                .id(format!("{id}-label"))
                .style(Style::new().foreground(theme.muted)),
        )
        .child(input);

    if let Some(error) = app.errors().get(field) {
        section = section.child(
            Element::text(error.message.clone())
                .id(format!("{id}-error"))
                .style(Style::new().foreground(theme.danger)),
        );
    }

    section
}

fn submit_button(focused: Option<&str>, theme: &Theme) -> Element {
    let is_focused = focused == Some(SUBMIT_BUTTON_ID);

    Element::text("[ Submit ]")
        .id(SUBMIT_BUTTON_ID)
        .focusable(true)
        .clickable(true)
        .focused(is_focused)
        .style(Style::new().foreground(theme.foreground))
        .style_focused(
            Style::new()
                .background(theme.primary)
                .foreground(theme.background)
                .bold(),
        )
}

/// The echoed values of the last successful submit. The message line only
/// exists when a message was captured.
fn submission_summary(submission: &Submission, theme: &Theme) -> Element {
    let mut summary = Element::col()
        .id("submission")
        .child(
            Element::text("You Submitted:")
                .id("submission-header")
                .style(Style::new().foreground(theme.success).bold()),
        )
        .child(display_line("firstname-display", "First Name", &submission.firstname))
        .child(display_line("lastname-display", "Last Name", &submission.lastname))
        .child(display_line("email-display", "Email", &submission.email));

    if let Some(message) = &submission.message {
        summary = summary.child(display_line("message-display", "Message", message));
    }

    summary
}

fn display_line(id: &str, label: &str, value: &str) -> Element {
    Element::text(format!("{label}: {value}")).id(id)
}
