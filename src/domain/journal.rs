//! Journal draft fields

/// Heading shown above the three journal fields.
pub const JOURNAL_HEADING: &str = "✍️ Moje 3 ranní věty:";

/// The three reflective prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JournalField {
    /// Something I appreciate about myself
    SelfAppreciation,
    /// Something I allow myself today
    Permission,
    /// Something that will make me happy
    Joy,
}

impl JournalField {
    pub const ALL: [JournalField; 3] = [
        JournalField::SelfAppreciation,
        JournalField::Permission,
        JournalField::Joy,
    ];

    /// Prompt label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            JournalField::SelfAppreciation => "Za co si vážím sám sebe",
            JournalField::Permission => "Co si dnes dovolím",
            JournalField::Joy => "Co mi udělá radost",
        }
    }
}

/// Free-text answers. Held in memory only and never validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalDraft {
    self_appreciation: String,
    permission: String,
    joy: String,
}

impl JournalDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: JournalField) -> &str {
        match field {
            JournalField::SelfAppreciation => &self.self_appreciation,
            JournalField::Permission => &self.permission,
            JournalField::Joy => &self.joy,
        }
    }

    fn slot(&mut self, field: JournalField) -> &mut String {
        match field {
            JournalField::SelfAppreciation => &mut self.self_appreciation,
            JournalField::Permission => &mut self.permission,
            JournalField::Joy => &mut self.joy,
        }
    }

    /// Replace the whole value of a field
    pub fn set(&mut self, field: JournalField, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    pub fn push(&mut self, field: JournalField, c: char) {
        self.slot(field).push(c);
    }

    /// Remove the last character, if any
    pub fn pop(&mut self, field: JournalField) -> Option<char> {
        self.slot(field).pop()
    }

    pub fn clear(&mut self, field: JournalField) {
        self.slot(field).clear();
    }
}
