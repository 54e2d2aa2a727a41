use std::fs::File;

use formdom::{Event, FocusState, Key, Terminal, TextInputState};
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

use contact_form::{AppError, ContactApp, Field};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    // The terminal owns stdout, so logs go to a file.
    let log_file = File::create("contact-form.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let mut term = Terminal::new()?;
    let mut focus = FocusState::new();
    let mut inputs = TextInputState::new();
    let mut app = ContactApp::new();

    for field in Field::ALL {
        inputs.set(field.name(), "");
    }

    loop {
        let root = app.view(&inputs, focus.focused());
        term.render(&root)?;

        let raw = term.poll(None)?;
        let events = focus.process_events(&raw, &root, term.layout());
        let events = inputs.process_events(&events, &root);

        for event in &events {
            if should_quit(event) {
                return Ok(());
            }
            app.update(event);
        }
    }
}

fn should_quit(event: &Event) -> bool {
    match event {
        // Escape reaches the app only once nothing is focused
        Event::Key {
            key: Key::Escape,
            target: None,
            ..
        } => true,
        Event::Key {
            key: Key::Char('c'),
            modifiers,
            ..
        } => modifiers.ctrl,
        _ => false,
    }
}
