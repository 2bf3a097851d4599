//! Morning checklist entries

use crate::error::{Result, RoutineError};

/// Checklist shipped with the app.
pub const DEFAULT_CHECKLIST: [&str; 5] = [
    "✅ Laskavé slovo po probuzení",
    "✅ Protažení těla",
    "✅ 3 věty do zápisníku",
    "✅ Dechová chvilka",
    "✅ Úsměv do zrcadla",
];

/// One task of the morning routine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistEntry {
    pub label: String,
    pub checked: bool,
}

impl ChecklistEntry {
    pub fn new(label: impl Into<String>) -> Self {
        ChecklistEntry {
            label: label.into(),
            checked: false,
        }
    }
}

/// Ordered list of entries. Entries are addressed by position and the
/// set never grows or shrinks after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checklist {
    entries: Vec<ChecklistEntry>,
}

impl Checklist {
    /// Build an unchecked checklist from labels
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Checklist {
            entries: labels.into_iter().map(ChecklistEntry::new).collect(),
        }
    }

    pub fn entries(&self) -> &[ChecklistEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&ChecklistEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Invert the checked flag of the entry at `index` and return the new value
    pub fn toggle(&mut self, index: usize) -> Result<bool> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(RoutineError::EntryOutOfRange { index, len })?;
        entry.checked = !entry.checked;
        Ok(entry.checked)
    }

    /// Number of checked entries
    pub fn completed(&self) -> usize {
        self.entries.iter().filter(|e| e.checked).count()
    }
}

impl Default for Checklist {
    fn default() -> Self {
        Checklist::new(DEFAULT_CHECKLIST)
    }
}
