//! Form state: the four fields, their lifecycle, and the submitted snapshot.

/// One named input slot in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Firstname,
    Lastname,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Firstname,
        Field::Lastname,
        Field::Email,
        Field::Message,
    ];

    /// The wire name used in element ids and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Field::Firstname => "firstname",
            Field::Lastname => "lastname",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    /// The visible label above the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Firstname => "First Name",
            Field::Lastname => "Last Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    /// The placeholder hint shown in the empty input.
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Field::Firstname => Some("Edd"),
            Field::Lastname => Some("Burke"),
            Field::Email => Some("bluebill1049@hotmail.com"),
            Field::Message => None,
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.name() == name)
    }

    fn index(self) -> usize {
        match self {
            Field::Firstname => 0,
            Field::Lastname => 1,
            Field::Email => 2,
            Field::Message => 3,
        }
    }
}

/// Per-field lifecycle. A field starts `Pristine`, becomes `Editing` when it
/// gains focus, and settles into `Valid` or `Invalid` once validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldPhase {
    #[default]
    Pristine,
    Editing,
    Valid,
    Invalid,
}

/// The current values of the form, mutated in place as the user edits.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: [String; 4],
    phases: [FieldPhase; 4],
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    pub fn phase(&self, field: Field) -> FieldPhase {
        self.phases[field.index()]
    }

    pub fn set_phase(&mut self, field: Field, phase: FieldPhase) {
        self.phases[field.index()] = phase;
    }
}

/// An immutable snapshot of valid field values, published by a successful
/// submit and replaced wholesale by the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    /// Present only when the message was non-empty at capture time.
    pub message: Option<String>,
}

impl Submission {
    pub fn capture(form: &FormState) -> Self {
        let message = form.value(Field::Message);
        Self {
            firstname: form.value(Field::Firstname).to_string(),
            lastname: form.value(Field::Lastname).to_string(),
            email: form.value(Field::Email).to_string(),
            message: (!message.is_empty()).then(|| message.to_string()),
        }
    }
}
